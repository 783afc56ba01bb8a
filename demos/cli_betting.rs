//! CLI betting round example.
//!
//! Seats a full ring, posts the blinds and plays one preflop round from the
//! terminal. Commands: `f` fold, `c` check/call, `r <total>` raise,
//! `a <total>` all-in, `q` quit.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use pkrs::{ActionError, Outcome, RoundOptions, Rotator, Seats, Turn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const BIG_BLIND: usize = 2;

enum Command {
    Fold,
    Call,
    Raise(usize),
    AllIn(usize),
    Quit,
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    println!("Betting round CLI example (type 'q' to quit)");

    let mut seats = Seats::new();
    for name in ["UTG", "UTG+1", "UTG+2", "MP", "HJ", "CO", "BTN", "SB", "BB"] {
        seats.join(name);
    }
    let ids = seats.ids();
    seats[ids[7]].bet_placed = BIG_BLIND / 2;
    seats[ids[8]].bet_placed = BIG_BLIND;

    let options = RoundOptions::default().with_bet_size(BIG_BLIND);
    let mut rotator = match Rotator::new(&seats, ids, options) {
        Ok(rotator) => rotator,
        Err(err) => {
            println!("Cannot start round: {err}");
            return;
        }
    };

    loop {
        let turn = match rotator.next_turn(&seats) {
            Ok(Some(turn)) => turn,
            Ok(None) => break,
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        };

        show_turn(&rotator, &seats, &turn);

        loop {
            let result = match prompt_command() {
                Some(Command::Fold) => rotator.fold(&mut seats, turn.player),
                Some(Command::Call) => rotator.check_or_call(&mut seats, turn.player),
                Some(Command::Raise(total)) => rotator.raise_to(&mut seats, turn.player, total),
                Some(Command::AllIn(total)) => rotator.all_in(&mut seats, turn.player, total),
                Some(Command::Quit) => {
                    println!("Goodbye.");
                    return;
                }
                None => {
                    println!("Unknown command.");
                    continue;
                }
            };

            match result {
                Ok(outcome) => {
                    println!("{}: {}", seats[turn.player], describe(outcome));
                    break;
                }
                // Rejected input leaves the turn pending, so ask again.
                Err(
                    err @ (ActionError::RaiseTooSmall { .. }
                    | ActionError::RaiseNotAllowed
                    | ActionError::BetBelowCommitted),
                ) => {
                    println!("{err}");
                }
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            }
        }
    }

    println!();
    println!("Betting finished.");
    match rotator.create_pots(&seats) {
        Ok(pots) => {
            for pot in pots {
                let notation = pot.notation(&seats);
                println!(
                    "  pot of {} at {} each: {}",
                    notation.pot_size,
                    notation.bet_size,
                    notation.players.join(", ")
                );
            }
        }
        Err(err) => println!("Settle error: {err}"),
    }
}

fn show_turn(rotator: &Rotator, seats: &Seats, turn: &Turn) {
    println!("---------");
    if let Some(bettor) = rotator.last_bettor() {
        println!(
            "{} bet {} to {}",
            seats[bettor],
            rotator.last_raise(),
            rotator.last_bet()
        );
    }
    if let Some(cap) = rotator.cap_bettor() {
        println!("capped by {} at {}", seats[cap], rotator.call());
    }
    if turn.capped {
        println!("call={}", turn.to_call);
    } else {
        println!("call={}, minraise={}", turn.to_call, turn.min_raise);
    }
    println!("{} ({})", seats[turn.player], seats[turn.player].bet_placed);
}

const fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Fold => "folds",
        Outcome::Call => "calls",
        Outcome::Raise => "raises",
        Outcome::UnderRaiseAllIn => "is all-in and caps the betting",
        Outcome::ShortAllIn => "is all-in",
    }
}

fn prompt_command() -> Option<Command> {
    let line = prompt_line("> ");
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "f" | "fold" => Command::Fold,
        "c" | "call" | "check" => Command::Call,
        "r" | "raise" => Command::Raise(parts.next()?.parse().ok()?),
        "a" | "allin" => Command::AllIn(parts.next()?.parse().ok()?),
        "q" | "quit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    if input.is_empty() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}
