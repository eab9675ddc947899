use crate::card::{ACE, Card, EIGHT, SEVEN, Suit};
use crate::error::RoundError;
use crate::event::Event;
use crate::player::{OpponentView, PlayerId};
use crate::strategy::{Choice, TurnContext};

use super::{Game, GameState, split_players};

impl Game {
    /// Applies the effect of the first face-up card for the player who
    /// moves first.
    ///
    /// An Ace lets the starter set the suit. A Seven starts a chain in which
    /// the starter answers first; if the starter ends up playing the last
    /// Seven, the turn passes. An Eight always costs the starter the turn.
    ///
    /// Returns `true` if the starter lost the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the first card was already resolved, or a
    /// strategy's input closes.
    pub fn play_first_card(&mut self) -> Result<bool, RoundError> {
        if self.state != GameState::FirstCard {
            return Err(RoundError::InvalidState);
        }
        let player = self.current;
        let down_card = self.deck.down_card().ok_or(RoundError::InvalidState)?;

        let skipped = match down_card.rank {
            ACE => {
                self.choose_suit(player, None)?;
                false
            }
            SEVEN => self.resolve_seven_chain(player.other())?.drawer != player,
            EIGHT => true,
            _ => false,
        };

        self.state = GameState::Playing;
        if skipped {
            log::debug!("{player} loses the first turn to {down_card}");
            self.events.push(Event::TurnLost { player });
            self.current = player.other();
        }
        self.settle(player);
        Ok(skipped)
    }

    /// Plays one turn for the current player.
    ///
    /// The player keeps the turn after an Eight, and after a Seven chain in
    /// which the opponent answered last, unless the round is already won.
    /// Returns the round winner if a hand was emptied.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, or a strategy's input
    /// closes.
    pub fn play_turn(&mut self) -> Result<Option<PlayerId>, RoundError> {
        if self.state != GameState::Playing {
            return Err(RoundError::InvalidState);
        }
        let player = self.current;
        let opponent = player.other();

        loop {
            let Choice::Play(card) = self.choose_card(player)? else {
                log::debug!("{player} folds");
                self.events.push(Event::Folded { player });
                break;
            };

            let previous = self.deck.active_suit();
            self.put_down(player, card);
            let emptied = self.player(player).has_won();

            match card.rank {
                ACE if !emptied => {
                    self.choose_suit(player, Some(previous))?;
                }
                SEVEN => {
                    let chain = self.resolve_seven_chain(player)?;
                    if chain.drawer == player && !self.player(opponent).has_won() {
                        continue;
                    }
                }
                EIGHT if !emptied => {
                    log::debug!("{opponent} loses the turn to {card}");
                    self.events.push(Event::TurnLost { player: opponent });
                    continue;
                }
                _ => {}
            }
            break;
        }

        self.current = opponent;
        Ok(self.settle(player))
    }

    /// Asks `player`'s strategy for a card and validates the answer.
    fn choose_card(&mut self, player: PlayerId) -> Result<Choice, RoundError> {
        let (me, opponent) = split_players(&mut self.players, player);
        let mut turn = TurnContext::new(me, opponent, &mut self.deck);
        let choice = self.strategies[player.index()].choose_card(&mut turn)?;

        if let Some(card) = turn.pulled() {
            log::debug!("{player} pulled {card}");
            self.events.push(Event::Pulled { player, card });
        }

        let checked = match choice {
            Choice::Play(card) => turn.play(card),
            Choice::Fold => turn.fold(),
        };
        Ok(checked.unwrap_or_else(|err| {
            log::warn!("{player} made an illegal move ({err}), treating as a fold");
            Choice::Fold
        }))
    }

    /// Moves `card` from `player`'s hand onto the table.
    fn put_down(&mut self, player: PlayerId, card: Card) {
        let me = &mut self.players[player.index()];
        me.hand.remove(&card);
        me.record_play(card);
        self.deck.set_down_card(card);

        log::debug!("{player} plays {card}");
        self.events.push(Event::Played { player, card });
    }

    /// Asks `player`'s strategy for a suit and makes it active.
    fn choose_suit(&mut self, player: PlayerId, previous: Option<Suit>) -> Result<Suit, RoundError> {
        let index = player.index();
        let opponent = OpponentView::new(&self.players[player.other().index()]);
        let mut suit = self.strategies[index].choose_suit(&self.players[index], opponent, previous)?;
        if !suit.is_valid() {
            log::warn!("{player} chose no suit, keeping the ace's suit");
            suit = self.deck.active_suit();
        }

        self.deck.set_active_suit(suit);
        log::debug!("{player} sets {suit}");
        self.events.push(Event::SuitChosen { player, suit });
        Ok(suit)
    }
}
