//! Interactive human-guesser mode
//!
//! The machine generates a secret code; the human tries to crack it within
//! the turn budget, getting exact/partial feedback each turn.

use crate::core::{Code, Color, Feedback};
use crate::output::formatters::{feedback_pegs, format_code};
use crate::solver::SessionConfig;
use crate::universe;
use colored::Colorize;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the interactive human-guesser loop
///
/// # Errors
///
/// Returns an error on I/O failure or if the universe is empty.
pub fn run_play(seed: u64) -> Result<(), String> {
    let config = SessionConfig::classic();
    let mut rng = StdRng::seed_from_u64(seed);

    let codes = universe::generate(&config.alphabet, config.code_length);
    let secret = codes
        .choose(&mut rng)
        .ok_or_else(|| "No codes to choose a secret from".to_string())?;

    println!("\nWelcome to Mastermind!");
    println!(
        "Try to guess the secret code of {} colors.",
        config.code_length
    );
    println!(
        "Available colors: {}",
        Color::ALL
            .iter()
            .map(|&c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("You have {} turns.\n", config.max_turns);

    let mut turn = 0;
    while turn < config.max_turns {
        let input = read_line(&format!(
            "Turn {}: Enter your guess (comma-separated)",
            turn + 1
        ))?;

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\nThanks for playing!\n");
            return Ok(());
        }

        // A malformed guess does not consume a turn
        let guess = match Code::parse(&input, config.code_length) {
            Ok(guess) => guess,
            Err(e) => {
                println!("{}", e.to_string().yellow());
                continue;
            }
        };

        let feedback = Feedback::score(secret, &guess).map_err(|e| e.to_string())?;
        println!(
            "  {}  ({feedback})\n",
            feedback_pegs(feedback, config.code_length)
        );

        if feedback.is_win(config.code_length) {
            println!(
                "{}",
                format!("Congratulations, you cracked the code in {} turns!", turn + 1)
                    .green()
                    .bold()
            );
            return Ok(());
        }

        turn += 1;
    }

    println!(
        "\n{} The code was: {}\n",
        "Sorry, you ran out of turns.".red().bold(),
        format_code(secret)
    );
    Ok(())
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
