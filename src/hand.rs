//! Player hands and play history.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{self, Card};

/// Cards held by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card from the hand.
    ///
    /// Returns `false` if the card was not held.
    pub fn remove(&mut self, card: &Card) -> bool {
        if let Some(index) = self.cards.iter().position(|held| held == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Finds a held card by its short or long description.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Card> {
        self.cards.iter().copied().find(|card| card.matches_name(name))
    }

    /// Returns the Sevens held, in hand order.
    #[must_use]
    pub fn sevens(&self) -> Vec<Card> {
        self.cards.iter().copied().filter(Card::is_seven).collect()
    }

    /// Sorts the hand by suit, then by rank ascending.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(card::sort_key);
    }

    /// Returns a sorted copy of the cards.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(card::sort_key);
        cards
    }

    /// Sums the point values of all held cards.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value)).sum()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The last two cards a player put on the table, oldest first.
///
/// Pushing a third card drops the oldest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayHistory {
    slots: [Option<Card>; 2],
}

impl PlayHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None; 2] }
    }

    /// Records a played card.
    pub const fn push(&mut self, card: Card) {
        self.slots[0] = self.slots[1];
        self.slots[1] = Some(card);
    }

    /// Returns the recorded cards, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Returns the most recently played card.
    #[must_use]
    pub const fn last(&self) -> Option<Card> {
        self.slots[1]
    }

    /// Returns whether either recorded card is an Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.iter().any(|card| card.is_ace())
    }
}
