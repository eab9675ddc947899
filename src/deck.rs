//! The draw pile and the face-up card.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand::Hand;

/// Number of cards dealt to each player at the start of a round.
pub const STARTING_CARDS: usize = 7;

/// The visible card together with the suit that must be matched.
///
/// The active suit differs from the card's own suit only after an Ace sets
/// a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownState {
    /// The face-up card.
    pub card: Card,
    /// The suit the next card must follow.
    pub suit: Suit,
}

impl DownState {
    /// Returns whether `card` may be played on top of this state.
    ///
    /// Aces are always legal; other cards must match the down-card's rank or
    /// the active suit.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        card.is_ace() || card.rank == self.card.rank || card.suit == self.suit
    }
}

/// All 52 cards in suit-major order, unshuffled.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// The cards not held by either player and not face up.
///
/// Cards are dealt from the front. When the deck runs dry it is rebuilt
/// from the full set minus the down-card and both hands, so previously
/// covered cards come back into play.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    down: Option<DownState>,
    rng: ChaCha8Rng,
    reshuffles: usize,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// The seed drives every later shuffle, including reshuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use agonia::Deck;
    ///
    /// let mut deck = Deck::new(7);
    /// deck.shuffle();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::stacked(standard_cards(), seed)
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// The caller is responsible for keeping the cards distinct.
    #[must_use]
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into(),
            down: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffles: 0,
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Returns the current down state, if a card has been turned up.
    #[must_use]
    pub const fn down(&self) -> Option<DownState> {
        self.down
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn down_card(&self) -> Option<Card> {
        self.down.map(|down| down.card)
    }

    /// Returns the suit that must be matched, or [`Suit::Invalid`] before
    /// the first card is turned up.
    #[must_use]
    pub fn active_suit(&self) -> Suit {
        self.down.map_or(Suit::Invalid, |down| down.suit)
    }

    /// Places `card` face up and resets the active suit to its suit.
    pub const fn set_down_card(&mut self, card: Card) {
        self.down = Some(DownState {
            card,
            suit: card.suit,
        });
    }

    /// Overrides the active suit without changing the down-card.
    ///
    /// Has no effect before a card is face up.
    pub const fn set_active_suit(&mut self, suit: Suit) {
        if let Some(down) = self.down.as_mut() {
            down.suit = suit;
        }
    }

    /// Returns whether `card` may be played now.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        self.down.is_none_or(|down| down.accepts(card))
    }

    /// Removes and returns the front card, reshuffling first if the deck is
    /// empty.
    ///
    /// Returns `None` only when every card is either face up or held.
    pub fn deal_one(&mut self, hand1: &Hand, hand2: &Hand) -> Option<Card> {
        if self.cards.is_empty() {
            self.reshuffle(hand1, hand2);
        }
        self.cards.pop_front()
    }

    /// Rebuilds the deck from the full set minus the down-card and both
    /// hands, then shuffles it.
    pub fn reshuffle(&mut self, hand1: &Hand, hand2: &Hand) {
        let down = self.down_card();
        let mut cards = standard_cards();
        cards.retain(|card| {
            Some(*card) != down && !hand1.contains(card) && !hand2.contains(card)
        });
        cards.shuffle(&mut self.rng);

        self.reshuffles += 1;
        log::debug!(
            "reshuffled deck: {} cards back in play (reshuffle #{})",
            cards.len(),
            self.reshuffles
        );
        self.cards = cards.into();
    }

    /// Turns up the first card and deals the starting hands.
    ///
    /// Both hands are cleared first; cards alternate between them, starting
    /// with `hand1`.
    pub fn deal_initial(&mut self, hand1: &mut Hand, hand2: &mut Hand) {
        hand1.clear();
        hand2.clear();

        if let Some(card) = self.deal_one(hand1, hand2) {
            self.set_down_card(card);
        }

        for i in 0..STARTING_CARDS * 2 {
            let Some(card) = self.deal_one(hand1, hand2) else {
                break;
            };
            if i % 2 == 0 {
                hand1.add_card(card);
            } else {
                hand2.add_card(card);
            }
        }
    }

    /// Returns the cards left in the deck, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the deck has been rebuilt.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
