use crate::error::RoundError;
use crate::event::Event;
use crate::player::PlayerId;

use super::{Game, SevenChain, split_players};

impl Game {
    /// Resolves a Seven chain started by `played_by`.
    ///
    /// Beginning with the other player, each side in turn is asked whether
    /// to answer with a Seven of its own. Every Seven adds two cards to the
    /// penalty; the first player who cannot or will not answer draws the
    /// whole penalty.
    ///
    /// The Seven that started the chain must already be face up. For a
    /// Seven turned up as the first card, pass the player who does *not*
    /// move first, so that the starter is asked first.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy's input closes.
    pub fn resolve_seven_chain(&mut self, played_by: PlayerId) -> Result<SevenChain, RoundError> {
        let mut sevens = 1;
        let mut last = played_by;

        loop {
            let responder = last.other();
            let index = responder.index();
            let Some(card) = self.strategies[index].choose_seven(&self.players[index])? else {
                break;
            };

            let player = &mut self.players[index];
            if !card.is_seven() || !player.hand.remove(&card) {
                log::warn!("{responder} answered a seven with {card}, treating as a pass");
                break;
            }
            player.record_play(card);
            self.deck.set_down_card(card);
            log::debug!("{responder} answers with {card}");
            self.events.push(Event::Played {
                player: responder,
                card,
            });

            sevens += 1;
            last = responder;
        }

        let drawer = last.other();
        let drawn = self.draw_penalty(drawer, sevens * 2);
        log::debug!("seven chain of {sevens}: {drawer} draws {drawn}");
        self.events.push(Event::SevenPenalty {
            player: drawer,
            cards: drawn,
        });

        Ok(SevenChain {
            sevens,
            drawer,
            drawn,
        })
    }

    /// Deals `count` cards to `player`, stopping early only if every card
    /// is held. Returns the number of cards dealt.
    fn draw_penalty(&mut self, player: PlayerId, count: usize) -> usize {
        let (me, opponent) = split_players(&mut self.players, player);
        let mut drawn = 0;
        while drawn < count {
            let Some(card) = self.deck.deal_one(&me.hand, &opponent.hand) else {
                break;
            };
            me.hand.add_card(card);
            drawn += 1;
        }
        drawn
    }
}
