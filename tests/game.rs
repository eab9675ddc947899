//! Game integration tests.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use agonia::{
    Card, Cpu, DECK_SIZE, Deck, Event, Game, GameOptions, GameState, Hand, Human, Input,
    OptionsError, PlayerId, Prompt, RoundError, Suit,
};

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// An input source that replays fixed lines.
#[derive(Clone, Default)]
struct Script {
    lines: Rc<RefCell<VecDeque<&'static str>>>,
}

impl Script {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: Rc::new(RefCell::new(lines.iter().copied().collect())),
        }
    }
}

impl Input for Script {
    fn read(&mut self, _prompt: &Prompt) -> Option<String> {
        self.lines.borrow_mut().pop_front().map(str::to_owned)
    }
}

/// Builds a deck that turns up `down`, deals `human` and `cpu` alternately,
/// then deals `pile`, then the rest of the cards in standard order.
fn stacked(down: Card, human: [Card; 7], cpu: [Card; 7], pile: &[Card]) -> Deck {
    let mut order = vec![down];
    for (h, c) in human.into_iter().zip(cpu) {
        order.push(h);
        order.push(c);
    }
    order.extend_from_slice(pile);

    let rest: Vec<Card> = agonia::deck::standard_cards()
        .into_iter()
        .filter(|card| !order.contains(card))
        .collect();
    order.extend(rest);
    assert_eq!(order.len(), DECK_SIZE);
    Deck::stacked(order, 0)
}

fn game_with_script(lines: &[&'static str]) -> Game {
    Game::new(
        GameOptions::default(),
        1,
        Box::new(Human::new(Script::new(lines))),
        Box::new(Cpu),
    )
    .unwrap()
}

const HUMAN_HEARTS: [Card; 7] = [
    card(2, Suit::Hearts),
    card(3, Suit::Hearts),
    card(4, Suit::Hearts),
    card(5, Suit::Hearts),
    card(6, Suit::Hearts),
    card(9, Suit::Hearts),
    card(10, Suit::Hearts),
];

const CPU_CLUBS: [Card; 7] = [
    card(2, Suit::Clubs),
    card(3, Suit::Clubs),
    card(4, Suit::Clubs),
    card(5, Suit::Clubs),
    card(6, Suit::Clubs),
    card(9, Suit::Clubs),
    card(10, Suit::Clubs),
];

fn assert_no_duplicates(game: &Game) {
    let down = game.deck().down_card();
    let mut seen = HashSet::new();
    let mut total = 0;
    let locations = game
        .deck()
        .cards()
        .chain(game.player(PlayerId::Human).hand.cards())
        .chain(game.player(PlayerId::Cpu).hand.cards())
        .chain(down.as_ref());
    for card in locations {
        assert!(seen.insert(*card), "{card} appears twice");
        total += 1;
    }
    assert!(total <= DECK_SIZE);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_points_limit(250)
        .with_first_player(PlayerId::Cpu);

    assert_eq!(options.points_limit, 250);
    assert_eq!(options.first_player, PlayerId::Cpu);
    assert_eq!(GameOptions::default().first_player, PlayerId::Human);
}

#[test]
fn zero_points_limit_is_rejected() {
    let options = GameOptions::default().with_points_limit(0);
    let err = Game::new(options, 1, Box::new(Cpu), Box::new(Cpu)).unwrap_err();
    assert_eq!(err, OptionsError::ZeroPointsLimit);

    let options = GameOptions::default().with_points_limit(30);
    let game = Game::new(options, 1, Box::new(Cpu), Box::new(Cpu)).unwrap();
    assert_eq!(*game.options(), options);
    assert!(game.deck().is_empty());
    assert_eq!(game.deck().down_card(), None);
}

#[test]
fn operations_reject_wrong_state() {
    let mut game = game_with_script(&[]);
    assert_eq!(game.state(), GameState::WaitingForRound);
    assert_eq!(game.play_turn().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.play_first_card().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.finish_round().unwrap_err(), RoundError::InvalidState);
    assert!(game.result().is_none());

    game.start_round().unwrap();
    assert_eq!(game.state(), GameState::FirstCard);
    assert_eq!(game.start_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.play_turn().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn start_round_deals_fifteen_cards() {
    let mut game = game_with_script(&[]);
    let down = game.start_round().unwrap();

    assert_eq!(game.round(), 1);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 7);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 7);
    assert_eq!(game.deck().len(), 37);
    assert_eq!(game.deck().down_card(), Some(down));
    assert_eq!(game.current_player(), PlayerId::Human);

    let table = game.table(PlayerId::Human);
    assert_eq!(table.opponent_cards, 7);
    assert_eq!(table.deck_cards, 37);
    assert_eq!(table.hand.len(), 7);
    assert_eq!(table.down.map(|d| d.card), Some(down));

    let events = game.take_events();
    assert_eq!(
        events,
        vec![Event::RoundStarted {
            round: 1,
            starter: PlayerId::Human,
            down_card: down,
        }]
    );
    assert!(game.take_events().is_empty());
    assert_no_duplicates(&game);
}

#[test]
fn answered_first_seven_costs_four_and_the_turn() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(7, Suit::Spades);
    let mut game = game_with_script(&["y", "7S"]);
    game.start_round_with(stacked(card(7, Suit::Diamonds), human, CPU_CLUBS, &[]))
        .unwrap();

    let skipped = game.play_first_card().unwrap();

    assert!(skipped);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 6);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 11);
    assert_eq!(game.deck().down_card(), Some(card(7, Suit::Spades)));
    assert_eq!(game.deck().active_suit(), Suit::Spades);
    assert_eq!(game.current_player(), PlayerId::Cpu);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(
        game.player(PlayerId::Human).history().last(),
        Some(card(7, Suit::Spades))
    );

    let events = game.take_events();
    assert!(events.contains(&Event::SevenPenalty {
        player: PlayerId::Cpu,
        cards: 4,
    }));
    assert!(events.contains(&Event::TurnLost {
        player: PlayerId::Human,
    }));
    assert_no_duplicates(&game);
}

#[test]
fn unanswered_first_seven_costs_two_and_keeps_the_turn() {
    let mut game = game_with_script(&[]);
    game.start_round_with(stacked(card(7, Suit::Diamonds), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();

    let skipped = game.play_first_card().unwrap();

    assert!(!skipped);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 9);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 7);
    assert_eq!(game.current_player(), PlayerId::Human);
}

#[test]
fn first_eight_skips_the_starter() {
    let mut game = game_with_script(&[]);
    game.start_round_with(stacked(card(8, Suit::Diamonds), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();

    assert!(game.play_first_card().unwrap());
    assert_eq!(game.current_player(), PlayerId::Cpu);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 7);
}

#[test]
fn first_ace_lets_the_starter_set_the_suit() {
    let mut game = game_with_script(&["c"]);
    game.start_round_with(stacked(card(1, Suit::Diamonds), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();

    assert!(!game.play_first_card().unwrap());
    assert_eq!(game.deck().active_suit(), Suit::Clubs);
    assert_eq!(game.deck().down_card(), Some(card(1, Suit::Diamonds)));
    assert_eq!(game.current_player(), PlayerId::Human);
}

#[test]
fn cpu_starter_sets_suit_on_first_ace() {
    let options = GameOptions::default().with_first_player(PlayerId::Cpu);
    let mut game = Game::new(options, 1, Box::new(Cpu), Box::new(Cpu)).unwrap();
    game.start_round_with(stacked(card(1, Suit::Diamonds), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();

    assert!(!game.play_first_card().unwrap());
    assert_eq!(game.deck().active_suit(), Suit::Clubs);
    assert_eq!(game.current_player(), PlayerId::Cpu);
}

#[test]
fn seven_in_play_makes_the_opponent_draw_two() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(7, Suit::Spades);
    let mut game = game_with_script(&["7s"]);
    game.start_round_with(stacked(card(3, Suit::Spades), human, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 6);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 9);
    assert_eq!(game.current_player(), PlayerId::Cpu);
}

#[test]
fn countered_seven_returns_the_turn_to_the_first_player() {
    // The human plays 7S, the CPU answers with 7C, the human cannot answer
    // and draws four, then plays again.
    let mut human = HUMAN_HEARTS;
    human[0] = card(7, Suit::Spades);
    let mut cpu = CPU_CLUBS;
    cpu[0] = card(7, Suit::Clubs);
    let mut game = game_with_script(&["7s", "p", "f"]);
    game.start_round_with(stacked(card(3, Suit::Spades), human, cpu, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    assert_eq!(game.play_turn().unwrap(), None);

    // 7 - 1 played + 4 penalty + 1 pulled.
    assert_eq!(game.player(PlayerId::Human).hand.len(), 11);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 6);
    assert_eq!(game.current_player(), PlayerId::Cpu);

    let events = game.take_events();
    assert!(events.contains(&Event::Played {
        player: PlayerId::Cpu,
        card: card(7, Suit::Clubs),
    }));
    assert!(events.contains(&Event::SevenPenalty {
        player: PlayerId::Human,
        cards: 4,
    }));
    assert_eq!(events.last(), Some(&Event::Folded {
        player: PlayerId::Human,
    }));
}

#[test]
fn seven_chain_resolves_directly() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(7, Suit::Spades);
    human[1] = card(7, Suit::Hearts);
    let mut cpu = CPU_CLUBS;
    cpu[0] = card(7, Suit::Clubs);
    let mut game = game_with_script(&["y", "7s", "y", "7h"]);
    game.start_round_with(stacked(card(7, Suit::Diamonds), human, cpu, &[]))
        .unwrap();

    // Down 7D counts as the CPU's Seven; human 7S, CPU 7C, human 7H.
    let chain = game.resolve_seven_chain(PlayerId::Cpu).unwrap();
    assert_eq!(chain.sevens, 4);
    assert_eq!(chain.drawer, PlayerId::Cpu);
    assert_eq!(chain.drawn, 8);
    assert_eq!(game.player(PlayerId::Cpu).hand.len(), 6 + 8);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 5);
    assert_eq!(game.deck().down_card(), Some(card(7, Suit::Hearts)));
}

#[test]
fn eight_lets_the_player_go_again() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(8, Suit::Spades);
    human[1] = card(8, Suit::Hearts);
    let mut game = game_with_script(&["8s", "8h", "4h"]);
    game.start_round_with(stacked(card(3, Suit::Spades), human, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.player(PlayerId::Human).hand.len(), 4);
    assert_eq!(game.deck().down_card(), Some(card(4, Suit::Hearts)));
    assert_eq!(game.current_player(), PlayerId::Cpu);

    let lost = game
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, Event::TurnLost { player: PlayerId::Cpu }))
        .count();
    assert_eq!(lost, 2);
}

#[test]
fn ace_in_play_sets_suit_and_cpu_follows_it() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(1, Suit::Spades);
    let mut game = game_with_script(&["as", "d"]);
    game.start_round_with(stacked(card(3, Suit::Spades), human, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    game.play_turn().unwrap();
    assert_eq!(game.deck().active_suit(), Suit::Diamonds);
    assert_eq!(game.current_player(), PlayerId::Cpu);

    // All-Clubs CPU hand has nothing for Diamonds: it pulls from the pile.
    let pile_front = *game.deck().cards().next().unwrap();
    game.play_turn().unwrap();
    let events = game.take_events();
    assert!(events.contains(&Event::Pulled {
        player: PlayerId::Cpu,
        card: pile_front,
    }));
}

#[test]
fn emptying_the_hand_wins_the_round_and_charges_the_loser() {
    let mut game = game_with_script(&["zz", "5s"]);
    game.start_round_with(stacked(card(3, Suit::Spades), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();
    game.player_mut(PlayerId::Human).hand = Hand::from_cards([card(5, Suit::Spades)]);

    assert_eq!(game.play_turn().unwrap(), Some(PlayerId::Human));
    assert!(game.player(PlayerId::Human).has_won());
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.play_turn().unwrap_err(), RoundError::InvalidState);

    let expected: u32 = CPU_CLUBS.iter().map(|c| u32::from(c.value)).sum();
    let result = game.finish_round().unwrap();
    assert_eq!(result.winner, PlayerId::Human);
    assert_eq!(result.loser, PlayerId::Cpu);
    assert_eq!(result.points, expected);
    assert_eq!(result.cpu_score, expected);
    assert_eq!(result.human_score, 0);
    assert!(!result.game_over);
    assert_eq!(game.state(), GameState::WaitingForRound);
}

#[test]
fn last_card_ace_ends_the_round_without_a_suit_prompt() {
    let mut game = game_with_script(&["ah"]);
    game.start_round_with(stacked(card(3, Suit::Spades), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();
    game.player_mut(PlayerId::Human).hand = Hand::from_cards([card(1, Suit::Hearts)]);

    assert_eq!(game.play_turn().unwrap(), Some(PlayerId::Human));
}

#[test]
fn closed_input_surfaces_as_round_error() {
    let mut game = game_with_script(&[]);
    game.start_round_with(stacked(card(3, Suit::Spades), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    assert_eq!(game.play_turn().unwrap_err(), RoundError::InputClosed);
}

#[test]
fn reaching_the_limit_ends_the_game() {
    let options = GameOptions::default().with_points_limit(1);
    let mut game = Game::new(
        options,
        1,
        Box::new(Human::new(Script::new(&["5s"]))),
        Box::new(Cpu),
    )
    .unwrap();
    game.start_round_with(stacked(card(3, Suit::Spades), HUMAN_HEARTS, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();
    game.player_mut(PlayerId::Human).hand = Hand::from_cards([card(5, Suit::Spades)]);
    game.play_turn().unwrap();

    let result = game.finish_round().unwrap();
    assert!(result.game_over);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.start_round().unwrap_err(), RoundError::GameOver);

    let final_result = game.result().unwrap();
    assert_eq!(final_result.winner, PlayerId::Human);
    assert_eq!(final_result.rounds, 1);
}

#[test]
fn rounds_alternate_the_starting_player() {
    let mut game = Game::new(GameOptions::default(), 11, Box::new(Cpu), Box::new(Cpu)).unwrap();

    game.start_round().unwrap();
    assert_eq!(game.current_player(), PlayerId::Human);
    game.play_first_card().unwrap();
    while game.state() == GameState::Playing {
        game.play_turn().unwrap();
    }
    game.finish_round().unwrap();

    game.start_round().unwrap();
    assert_eq!(game.round(), 2);
    assert_eq!(game.current_player(), PlayerId::Cpu);
}

#[test]
fn cpu_against_cpu_plays_to_the_limit() {
    let options = GameOptions::default().with_points_limit(60);
    let mut game = Game::new(options, 2024, Box::new(Cpu), Box::new(Cpu)).unwrap();

    while game.state() != GameState::GameOver {
        game.start_round().unwrap();
        assert_no_duplicates(&game);
        game.play_first_card().unwrap();
        while game.state() == GameState::Playing {
            game.play_turn().unwrap();
            assert_no_duplicates(&game);
        }
        let winner = game.round_winner().unwrap();
        assert!(game.player(winner).has_won());
        let loser_points = game.player(winner.other()).hand.points();
        let result = game.finish_round().unwrap();
        assert_eq!(result.points, loser_points);
    }

    let result = game.result().unwrap();
    assert!(result.human_score >= 60 || result.cpu_score >= 60);
    let winner_score = match result.winner {
        PlayerId::Human => result.human_score,
        PlayerId::Cpu => result.cpu_score,
    };
    assert_eq!(winner_score, result.human_score.min(result.cpu_score));
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = |seed| {
        let mut game = Game::new(GameOptions::default(), seed, Box::new(Cpu), Box::new(Cpu)).unwrap();
        let result = game.run().unwrap();
        (result, game.take_events())
    };
    assert_eq!(play(5), play(5));
}

#[test]
fn seven_penalty_reshuffles_when_the_deck_runs_out() {
    let mut human = HUMAN_HEARTS;
    human[0] = card(7, Suit::Spades);
    let mut game = game_with_script(&["7s"]);
    game.start_round_with(stacked(card(3, Suit::Spades), human, CPU_CLUBS, &[]))
        .unwrap();
    game.play_first_card().unwrap();

    // One card left: the second penalty card comes from a rebuilt deck that
    // must leave out the card the CPU just drew.
    let jack = card(11, Suit::Diamonds);
    let mut short = Deck::stacked(vec![jack], 7);
    short.set_down_card(card(3, Suit::Spades));
    *game.deck_mut() = short;

    assert_eq!(game.play_turn().unwrap(), None);

    assert_eq!(game.deck().reshuffles(), 1);
    let cpu = &game.player(PlayerId::Cpu).hand;
    assert_eq!(cpu.len(), 9);
    assert!(cpu.contains(&jack));
    // 52 - down 7S - 6 human cards - 8 CPU cards before the second draw.
    assert_eq!(game.deck().len(), DECK_SIZE - 1 - 6 - 8 - 1);
    assert!(game.deck().cards().all(|c| *c != jack));
    assert_no_duplicates(&game);

    let events = game.take_events();
    assert!(events.contains(&Event::SevenPenalty {
        player: PlayerId::Cpu,
        cards: 2,
    }));
}
