//! CLI blackjack demo.
//!
//! Drives the engine purely through `start_round`, `decide`, `snapshot`,
//! and `reset_round`; all rendering happens from snapshots.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Action, Card, Game, GameOptions, HandView, Phase, Snapshot, Suit};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        if game.balance() == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let balance = game.balance();
        let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.start_round(bet) {
            println!("Bet rejected: {err}");
            continue;
        }

        if game.is_insurance_offered() {
            println!("Dealer shows an ace. Insurance offered.");
            let action = match prompt_line("Take insurance? (y/n): ").as_str() {
                "y" | "yes" => Action::InsuranceYes,
                _ => Action::InsuranceNo,
            };
            match game.decide(action) {
                Ok(_) => {
                    if game.insurance_stake() > 0 {
                        println!("Insurance bet placed: {}", game.insurance_stake());
                    }
                }
                Err(err) => println!("Insurance error: {err}"),
            }
        }

        while game.phase() == Phase::Playing {
            let snapshot = game.snapshot();
            print_table(&snapshot);
            println!("{}", format_actions(&snapshot));

            let action = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "p" | "split" => Action::Split,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = game.decide(action) {
                println!("Action rejected: {err}");
            }
        }

        if game.phase() == Phase::Settlement {
            let snapshot = game.snapshot();
            print_table(&snapshot);
            println!("Round complete. Balance: {}", snapshot.balance);

            let stats = snapshot.statistics;
            println!(
                "Session: {} rounds | {} won | {} lost | {} blackjacks | +{} / -{}",
                stats.hands_played,
                stats.hands_won,
                stats.hands_lost,
                stats.blackjacks,
                stats.money_won,
                stats.money_lost
            );

            if let Err(err) = game.reset_round() {
                println!("Reset error: {err}");
                break;
            }
        }

        // Always continue to the next round without prompting.
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    let dealer_cards = format_cards(&snapshot.dealer.cards);
    let hole = if snapshot.dealer.hole_hidden { " ??" } else { "" };
    println!(
        "\nDealer: {dealer_cards}{hole} (score {})",
        snapshot.dealer.score
    );

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if index == snapshot.current_hand && snapshot.phase == Phase::Playing {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | score {} | stake {} | {:?}",
            marker,
            index,
            format_cards(hand.cards.as_slice()),
            hand.score,
            hand.stake,
            hand.status
        );
    }
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let hand: Option<&HandView> = snapshot.hands.get(snapshot.current_hand);
    let can_double = hand.is_some_and(|h| h.can_double);
    let can_split = hand.is_some_and(|h| h.can_split);

    let mut parts = Vec::new();
    parts.push(format_action("hit", "h", true));
    parts.push(format_action("stand", "s", true));
    parts.push(format_action("double", "d", can_double));
    parts.push(format_action("split", "p", can_split));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
