//! Mastermind Solver - CLI
//!
//! Play Mastermind against the machine, or let the machine crack your code
//! with Knuth's minimax strategy or uniform random guessing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{run_benchmark, run_crack, run_play, solve_code},
    core::Code,
    output::{print_benchmark_result, print_solve_result},
    solver::{SessionConfig, StrategyType},
    universe,
};
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaking engine (Knuth minimax and random strategies)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default) or random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Seed for reproducible runs (default: entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// You host: the computer guesses your secret code (default)
    Crack,

    /// The computer hosts: you guess its secret code
    Play,

    /// Auto-solve a known secret, showing the guess path
    Solve {
        /// The secret code, comma-separated, e.g. "red, green, blue, orange"
        secret: String,

        /// Show per-turn candidate counts and worst-case partition sizes
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver across many secrets
    Benchmark {
        /// Number of secrets to test (default: the full universe)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    match cli.command.unwrap_or(Commands::Crack) {
        Commands::Crack => run_crack(&cli.strategy, seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Play => run_play(seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => {
            run_solve_command(&cli.strategy, &secret, verbose, seed)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, seed);
            Ok(())
        }
    }
}

fn run_solve_command(strategy_name: &str, secret: &str, verbose: bool, seed: u64) -> Result<()> {
    let config = SessionConfig::classic();
    let secret = Code::parse(secret, config.code_length).map_err(|e| anyhow::anyhow!(e))?;
    let strategy = StrategyType::from_name(strategy_name);

    let result = solve_code(&secret, config, strategy, seed).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: Option<usize>, seed: u64) {
    let config = SessionConfig::classic();
    let strategy = StrategyType::from_name(strategy_name);

    let all_secrets = universe::generate(&config.alphabet, config.code_length);
    let secrets: Vec<Code> = match count {
        Some(n) => all_secrets.into_iter().take(n).collect(),
        None => all_secrets,
    };

    println!(
        "Benchmarking {} strategy on {} secrets...",
        strategy.name(),
        secrets.len()
    );

    let result = run_benchmark(&secrets, &config, strategy, seed);
    print_benchmark_result(&result);
}
