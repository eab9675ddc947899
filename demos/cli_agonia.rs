//! CLI Agonia example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use agonia::{
    Card, Cpu, DownState, Event, Game, GameOptions, GameState, Human, Input, MoveError, PlayerId,
    Prompt, RoundResult, Suit, TableView,
};

fn main() {
    env_logger::init();

    println!("Agonia CLI example (type 'q' to quit)");
    print_help();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(points_limit) = prompt_u32("Points limit (default 100): ", 100) else {
        return;
    };
    let first_player = match prompt_line("Who plays first? ([h]uman/[c]pu): ").as_str() {
        "c" | "cpu" => PlayerId::Cpu,
        _ => PlayerId::Human,
    };
    let options = GameOptions::default()
        .with_points_limit(points_limit)
        .with_first_player(first_player);

    let mut game = match Game::new(options, seed, Box::new(Human::new(Terminal)), Box::new(Cpu)) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    while game.state() != GameState::GameOver {
        match play_round(&mut game) {
            Ok(result) => print_scores(&result),
            Err(err) => {
                print_events(&mut game);
                println!("{err}. Goodbye.");
                return;
            }
        }
    }

    if let Some(result) = game.result() {
        let banner = match result.winner {
            PlayerId::Human => colorize("You win the game!", "32"),
            PlayerId::Cpu => colorize("The CPU wins the game.", "31"),
        };
        println!(
            "\n{banner} Final score after {} rounds: you {}, cpu {}",
            result.rounds, result.human_score, result.cpu_score
        );
    }
}

fn play_round(game: &mut Game) -> Result<RoundResult, agonia::RoundError> {
    game.start_round()?;
    print_events(game);

    game.play_first_card()?;
    print_events(game);

    while game.state() == GameState::Playing {
        game.play_turn()?;
        print_events(game);
    }

    let result = game.finish_round()?;
    print_events(game);
    Ok(result)
}

/// Reads commands from standard input.
struct Terminal;

impl Input for Terminal {
    fn read(&mut self, prompt: &Prompt) -> Option<String> {
        let line = match prompt {
            Prompt::Card(view) => {
                print_table(view);
                let hint = if view.pulled {
                    "Card name or [f]old: "
                } else {
                    "Card name, [p]ull or [f]old: "
                };
                read_line(hint)?
            }
            Prompt::Suit { hand } => {
                println!("Your hand: {}", format_cards(hand));
                read_line("Choose a suit ([d]iamonds, [h]earts, [s]pades, [c]lubs): ")?
            }
            Prompt::CounterSeven { sevens } => {
                println!("You hold {}.", format_cards(sevens));
                read_line("Answer the Seven with a Seven? (y/n): ")?
            }
            Prompt::Seven { sevens } => {
                println!("Your Sevens: {}", format_cards(sevens));
                read_line("Which Seven? ")?
            }
        };

        match line.as_str() {
            "q" | "quit" => None,
            "h" | "help" if matches!(prompt, Prompt::Card(_)) => {
                print_help();
                self.read(prompt)
            }
            _ => Some(line),
        }
    }

    fn reject(&mut self, error: MoveError) {
        println!("{}", colorize(&format!("{error}."), "33"));
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_line(prompt: &str) -> String {
    read_line(prompt).unwrap_or_default()
}

fn prompt_u32(prompt: &str, default: u32) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(default);
        }
        match input.parse::<u32>() {
            Ok(value) if value > 0 => return Some(value),
            _ => println!("Please enter a positive number."),
        }
    }
}

fn print_help() {
    println!("Play a card by name: \"7s\", \"TD\" or \"king of hearts\".");
    println!("A card matches the face-up card by rank or by the active suit.");
    println!("Aces always play and set the suit. Sevens make the opponent pull");
    println!("two cards unless answered. Eights let you go again.");
    println!("[p]ull one card per turn, then [f]old if you cannot play. [h]elp, [q]uit.\n");
}

fn print_table(view: &TableView) {
    println!(
        "\nDeck: {} cards | CPU holds {} card(s)",
        view.deck_cards, view.opponent_cards
    );
    if let Some(down) = view.down {
        println!("Down: {}", format_down(down));
    }
    println!("Your hand: {}", format_cards(&view.hand));
}

fn print_events(game: &mut Game) {
    for event in game.take_events() {
        match event {
            Event::RoundStarted {
                round,
                starter,
                down_card,
            } => {
                println!(
                    "\n=== Round {round} === {} starts, first card {}",
                    name(starter),
                    format_card(&down_card)
                );
            }
            Event::Played { player, card } => {
                println!("{} played {}.", name(player), format_card(&card));
            }
            // The CPU's pulled card stays hidden.
            Event::Pulled {
                player: PlayerId::Human,
                card,
            } => println!("You pulled {}.", format_card(&card)),
            Event::Pulled { player, .. } => println!("{} pulled a card.", name(player)),
            Event::Folded { player } => println!("{} folded.", name(player)),
            Event::SuitChosen { player, suit } => {
                println!("{} set the suit to {}.", name(player), format_suit(suit));
            }
            Event::SevenPenalty { player, cards } => {
                println!("{} pulled {cards} card(s) for the Sevens.", name(player));
            }
            Event::TurnLost { player } => println!("{} lost the turn.", name(player)),
            Event::RoundWon { player, points } => {
                println!(
                    "{}",
                    colorize(
                        &format!("{} won the round, {points} points charged.", name(player)),
                        "32"
                    )
                );
            }
        }
    }
}

fn print_scores(result: &RoundResult) {
    println!("+----------------------+");
    println!("| Round {:<14} |", result.round);
    println!("| You: {:<15} |", result.human_score);
    println!("| CPU: {:<15} |", result.cpu_score);
    println!("+----------------------+");
}

const fn name(player: PlayerId) -> &'static str {
    match player {
        PlayerId::Human => "You",
        PlayerId::Cpu => "CPU",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
        Suit::Invalid => "90",
    }
}

fn format_suit(suit: Suit) -> String {
    colorize(suit.name(), suit_color(suit))
}

fn format_down(down: DownState) -> String {
    if down.card.suit == down.suit {
        format_card(&down.card)
    } else {
        format!("{} (suit {})", format_card(&down.card), format_suit(down.suit))
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = suit_color(card.suit);
    let name = card.short_name();
    if card.is_ace() || card.is_seven() || card.is_eight() {
        colorize(&format!("[{name}]"), color_code)
    } else {
        colorize(&name, color_code)
    }
}
