//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{
    Card, Decider, Decision, Game, GameOptions, InvalidDecision, Outcome, RoundEvent, TableView,
};

/// Reads hit/stand decisions from standard input.
///
/// Round events are printed as they happen; `shown` counts how many of the
/// current round's events are already on screen.
#[derive(Default)]
struct Terminal {
    shown: usize,
}

impl Terminal {
    fn catch_up(&mut self, events: &[RoundEvent]) {
        for event in events.get(self.shown..).unwrap_or_default() {
            print_event(event);
        }
        self.shown = events.len();
    }
}

impl Decider for Terminal {
    fn decide(&mut self, table: &TableView<'_>) -> Result<Decision, InvalidDecision> {
        self.catch_up(table.events);
        // Stdin closed: stand rather than prompt forever.
        let Some(input) = prompt("Hit or stand? [h/s]: ") else {
            return Ok(Decision::Stand);
        };
        let decision = input.parse();
        if decision.is_err() {
            println!("Invalid input, please choose again.");
        }
        decision
    }
}

fn main() {
    env_logger::init();
    println!("Blackjack CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let mut terminal = Terminal::default();
    loop {
        println!("\n--- New round ({} cards in shoe) ---\n", game.cards_remaining());

        let result = game.play_round(&mut terminal);
        terminal.catch_up(game.events());
        terminal.shown = 0;

        if let Err(err) = result {
            if err.shoe_exhausted().is_some() {
                println!("The shoe ran out of cards. Starting a new shoe.");
                if let Err(err) = game.reshuffle() {
                    println!("Reshuffle error: {err}");
                    break;
                }
            } else {
                println!("Round error: {err}");
                break;
            }
        }

        if prompt("Play again? (yes/no): ").as_deref() != Some("yes") {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_event(event: &RoundEvent) {
    match event {
        RoundEvent::Dealt {
            player,
            player_score,
            dealer_up,
            dealer_up_value,
        } => {
            println!("Player: {} (score {player_score})", format_cards(player));
            println!("Dealer: ?? {dealer_up} (showing {dealer_up_value})");
        }
        RoundEvent::DecisionRejected => {}
        RoundEvent::PlayerHit {
            hand, score, bust, ..
        } => {
            println!("Player: {} (score {score})", format_cards(hand));
            if *bust {
                println!("Player busts.");
            }
        }
        RoundEvent::PlayerStood { score } => println!("Player stands on {score}."),
        RoundEvent::DealerRevealed { hand, score } => {
            println!("Dealer reveals: {} (score {score})", format_cards(hand));
        }
        RoundEvent::DealerDrew {
            hand, score, bust, ..
        } => {
            println!("Dealer: {} (score {score})", format_cards(hand));
            if *bust {
                println!("Dealer busts.");
            }
        }
        RoundEvent::Settled(outcome) => {
            println!(
                "Final scores: player {}, dealer {}",
                outcome.player_score, outcome.dealer_score
            );
            println!("{}", describe(outcome.outcome));
        }
    }
}

const fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "Player wins!",
        Outcome::DealerWins => "Dealer wins!",
        Outcome::Push => "Push.",
        Outcome::PlayerBlackjack => "Player blackjack, player wins!",
        Outcome::DealerBlackjack => "Dealer blackjack, dealer wins!",
        Outcome::BothBlackjack => "Both have blackjack, push.",
        Outcome::PlayerBust => "Player busts, dealer wins!",
        Outcome::DealerBust => "Dealer busts, player wins!",
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
