//! Interactive machine-guesser mode
//!
//! The human picks a secret code mentally; the machine guesses and the
//! human answers each guess with exact/partial counts.

use crate::core::Color;
use crate::output::formatters::format_code;
use crate::solver::{SessionConfig, SessionError, SessionState, SolverSession, StrategyType};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive machine-guesser loop
///
/// # Errors
///
/// Returns an error on I/O failure reading user input or if the session
/// reaches an invalid internal state.
pub fn run_crack(strategy_name: &str, seed: u64) -> Result<(), String> {
    let config = SessionConfig::classic();

    println!("\nWelcome to Mastermind!");
    println!("You are the host. Pick a secret code of {} colors.", config.code_length);
    println!(
        "Available colors: {}",
        Color::ALL
            .iter()
            .map(|&c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "The computer has {} turns, guessing with the {} strategy.",
        config.max_turns, strategy_name
    );
    println!("Answer each guess with 'exact, partial' counts. Commands: 'new', 'quit'.\n");

    let mut session = new_session(&config, strategy_name, seed);
    session.start().map_err(|e| e.to_string())?;

    loop {
        let guess = session
            .current_guess()
            .ok_or_else(|| "Session has no active guess".to_string())?;

        println!("{}", "─".repeat(60));
        println!(
            "Turn {}: {} candidates remaining",
            session.turn() + 1,
            session.remaining_candidates()
        );
        println!("Computer guesses: {}\n", format_code(guess).bold());

        let input = read_line("Enter feedback (exact, partial)")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = new_session(&config, strategy_name, seed.wrapping_add(1));
                session.start().map_err(|e| e.to_string())?;
                println!("\nNew game started!\n");
                continue;
            }
            _ => {}
        }

        let Some((exact, partial)) = parse_feedback(&input) else {
            println!("{}", "Enter two numbers, e.g. '1, 2'".yellow());
            continue;
        };

        match session.submit_feedback(exact, partial) {
            Ok(SessionState::Won) => {
                println!(
                    "\n{}",
                    format!(
                        "Computer cracked your code in {} turns!",
                        session.history().len()
                    )
                    .green()
                    .bold()
                );
            }
            Ok(SessionState::Lost) => {
                println!("\n{}", "Computer failed to crack your code!".red().bold());
            }
            Ok(SessionState::Contradiction) => {
                println!(
                    "\n{}",
                    "No possible codes remain. The feedback may have been incorrect."
                        .red()
                        .bold()
                );
            }
            Ok(_) => continue,
            Err(SessionError::InvalidFeedback { .. }) => {
                println!(
                    "{}",
                    format!(
                        "Impossible feedback for a code of length {}. Try again.",
                        config.code_length
                    )
                    .yellow()
                );
                continue;
            }
            Err(e) => return Err(e.to_string()),
        }

        // Terminal state reached
        match read_line("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {
                session = new_session(&config, strategy_name, seed.wrapping_add(1));
                session.start().map_err(|e| e.to_string())?;
                println!("\nNew game started!\n");
            }
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn new_session(config: &SessionConfig, strategy_name: &str, seed: u64) -> SolverSession {
    SolverSession::new(config.clone(), StrategyType::from_name(strategy_name), seed)
}

/// Parse "exact, partial" (or "exact partial") into counts
fn parse_feedback(input: &str) -> Option<(u8, u8)> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if parts.len() != 2 {
        return None;
    }

    let exact = parts[0].parse().ok()?;
    let partial = parts[1].parse().ok()?;
    Some((exact, partial))
}

fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feedback_accepts_comma_and_space_forms() {
        assert_eq!(parse_feedback("1, 2"), Some((1, 2)));
        assert_eq!(parse_feedback("1,2"), Some((1, 2)));
        assert_eq!(parse_feedback("1 2"), Some((1, 2)));
        assert_eq!(parse_feedback("  0 ,  0 "), Some((0, 0)));
    }

    #[test]
    fn parse_feedback_rejects_garbage() {
        assert_eq!(parse_feedback(""), None);
        assert_eq!(parse_feedback("1"), None);
        assert_eq!(parse_feedback("1, 2, 3"), None);
        assert_eq!(parse_feedback("one, two"), None);
        assert_eq!(parse_feedback("-1, 2"), None);
    }
}
