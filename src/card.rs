//! Card types and deck utilities.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::ParseError;

/// Card suit.
///
/// The declaration order (Diamonds, Hearts, Spades, Clubs) is also the order
/// used when sorting cards and when breaking ties between equally frequent
/// suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// No suit established, or a failed lookup.
    Invalid,
}

impl Suit {
    /// The four playable suits in precedence order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the full name of the suit (`"-"` for [`Suit::Invalid`]).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Invalid => "-",
        }
    }

    /// Returns the single-letter code of the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Invalid => '-',
        }
    }

    /// Looks up a suit by its letter code.
    ///
    /// Unknown letters yield [`Suit::Invalid`].
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::Suit;
    ///
    /// assert_eq!(Suit::from_char('s'), Suit::Spades);
    /// assert_eq!(Suit::from_char('x'), Suit::Invalid);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'D' => Self::Diamonds,
            'H' => Self::Hearts,
            'S' => Self::Spades,
            'C' => Self::Clubs,
            _ => Self::Invalid,
        }
    }

    /// Returns whether this is one of the four playable suits.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    const fn index(self) -> Option<usize> {
        match self {
            Self::Diamonds => Some(0),
            Self::Hearts => Some(1),
            Self::Spades => Some(2),
            Self::Clubs => Some(3),
            Self::Invalid => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    /// Parses a suit letter or full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let suit = Self::from_char(c);
            return if suit.is_valid() {
                Ok(suit)
            } else {
                Err(ParseError::InvalidSuit)
            };
        }

        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidSuit)
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Seven.
pub const SEVEN: u8 = 7;
/// Rank of an Eight.
pub const EIGHT: u8 = 8;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the point value of a rank: 25 for an Ace, 10 for a face card,
/// otherwise the rank itself.
#[must_use]
pub const fn point_value(rank: u8) -> u8 {
    match rank {
        ACE => 25,
        11..=13 => 10,
        _ => rank,
    }
}

/// Converts a rank code (`A`, `2`..`9`, `T`, `J`, `Q`, `K`) to a rank.
///
/// Returns `0` for unknown codes, which is never a valid rank.
#[must_use]
pub const fn rank_from_char(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        'A' => ACE,
        'T' => 10,
        'J' => 11,
        'Q' => 12,
        'K' => 13,
        c @ '2'..='9' => c as u8 - b'0',
        _ => 0,
    }
}

const fn rank_code(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "T",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

const fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "Ace",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "?",
    }
}

/// A playing card.
///
/// Cards compare equal and hash by rank and suit only. The point value is
/// derived from the rank unless built with [`Card::with_value`].
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// Penalty points charged when the card is left in a losing hand.
    pub value: u8,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl Card {
    /// Creates a new card with its rule-defined point value.
    ///
    /// Note: This function does not validate the rank. Use
    /// [`Card::is_valid`] before treating the card as playable.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            value: point_value(rank),
        }
    }

    /// Creates a card with an explicit point value.
    #[must_use]
    pub const fn with_value(rank: u8, suit: Suit, value: u8) -> Self {
        Self { rank, suit, value }
    }

    /// Creates a card from a rank code and a suit code, e.g. `('K', 'S')`.
    ///
    /// Unrecognized codes produce an invalid card instead of failing.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::{Card, Suit};
    ///
    /// let card = Card::from_codes('T', 'h');
    /// assert_eq!(card, Card::new(10, Suit::Hearts));
    /// assert!(!Card::from_codes('X', 'S').is_valid());
    /// assert!(!Card::from_codes('4', 'Z').is_valid());
    /// ```
    #[must_use]
    pub const fn from_codes(rank: char, suit: char) -> Self {
        Self::new(rank_from_char(rank), Suit::from_char(suit))
    }

    /// Returns whether the card has a playable suit and a rank in 1..=13.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.suit.is_valid() && self.rank >= 1 && self.rank <= 13
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is a Seven.
    #[must_use]
    pub const fn is_seven(&self) -> bool {
        self.rank == SEVEN
    }

    /// Returns whether the card is an Eight.
    #[must_use]
    pub const fn is_eight(&self) -> bool {
        self.rank == EIGHT
    }

    /// Returns the short description, e.g. `"KS"` or `"TD"`.
    #[must_use]
    pub fn short_name(&self) -> alloc::string::String {
        let mut name = alloc::string::String::with_capacity(2);
        name.push_str(rank_code(self.rank));
        name.push(self.suit.letter());
        name
    }

    /// Returns the long description, e.g. `"King of Spades"`.
    #[must_use]
    pub fn long_name(&self) -> alloc::string::String {
        alloc::format!("{} of {}", rank_name(self.rank), self.suit.name())
    }

    /// Returns whether `name` refers to this card in short or long form.
    ///
    /// Comparison ignores case, surrounding whitespace, and repeated inner
    /// whitespace.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let normalized = normalize(name);
        normalized == self.short_name().to_lowercase() || normalized == self.long_name().to_lowercase()
    }
}

fn normalize(input: &str) -> alloc::string::String {
    input
        .split_whitespace()
        .collect::<alloc::vec::Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_code(self.rank), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a card from its short (`"ks"`) or long (`"king of spades"`)
    /// description.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);

        if let Some((rank, suit)) = normalized.split_once(" of ") {
            let rank = match rank {
                "ace" => ACE,
                "jack" => 11,
                "queen" => 12,
                "king" => 13,
                digits => digits.parse::<u8>().map_err(|_| ParseError::InvalidRank)?,
            };
            let card = Self::new(rank, suit.parse()?);
            return if card.is_valid() {
                Ok(card)
            } else {
                Err(ParseError::InvalidRank)
            };
        }

        let mut chars = normalized.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                let card = Self::from_codes(rank, suit);
                if !card.suit.is_valid() {
                    Err(ParseError::InvalidSuit)
                } else if card.is_valid() {
                    Ok(card)
                } else {
                    Err(ParseError::InvalidRank)
                }
            }
            _ => Err(ParseError::InvalidCard),
        }
    }
}

/// Returns the suit appearing most often among `cards`.
///
/// Ties go to the suit that comes first in [`Suit::ALL`]; an empty slice
/// yields [`Suit::Diamonds`].
///
/// # Example
///
/// ```
/// use agonia::{Card, Suit, card::dominant_suit};
///
/// let cards = [
///     Card::new(3, Suit::Clubs),
///     Card::new(9, Suit::Hearts),
///     Card::new(4, Suit::Clubs),
/// ];
/// assert_eq!(dominant_suit(&cards), Suit::Clubs);
/// ```
#[must_use]
pub fn dominant_suit<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Suit {
    let mut counts = [0_usize; 4];
    for card in cards {
        if let Some(index) = card.suit.index() {
            counts[index] += 1;
        }
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    Suit::ALL
        .into_iter()
        .zip(counts)
        .find_map(|(suit, count)| (count == max).then_some(suit))
        .unwrap_or(Suit::Diamonds)
}

/// Sort key: suit precedence first, then rank ascending.
#[must_use]
pub const fn sort_key(card: &Card) -> (Suit, u8) {
    (card.suit, card.rank)
}
