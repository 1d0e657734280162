//! Benchmark command
//!
//! Runs the solver against many secrets and collects guess-count statistics.

use crate::core::{Code, Feedback};
use crate::solver::{SessionConfig, SessionState, SolverSession, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Sessions that ended in Lost or Contradiction instead of Won
    pub failures: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run the solver once per secret and aggregate the outcomes
///
/// Each game gets a fresh session seeded from `seed` plus the secret's
/// index, so a run is reproducible end to end.
#[must_use]
pub fn run_benchmark(
    secrets: &[Code],
    config: &SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failures = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    for (index, secret) in secrets.iter().enumerate() {
        let guesses = play_out(secret, config.clone(), strategy, seed.wrapping_add(index as u64));

        match guesses {
            Some(count) => {
                total_guesses += count;
                min_guesses = min_guesses.min(count);
                max_guesses = max_guesses.max(count);
                *distribution.entry(count).or_insert(0) += 1;
            }
            None => failures += 1,
        }

        pb.set_message(format!("avg {:.2}", {
            let done = index + 1 - failures;
            if done == 0 {
                0.0
            } else {
                total_guesses as f64 / done as f64
            }
        }));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_secrets = secrets.len();
    let solved = total_secrets - failures;

    BenchmarkResult {
        total_secrets,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        failures,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Play one full game; returns the guess count on a win, `None` otherwise
fn play_out(secret: &Code, config: SessionConfig, strategy: StrategyType, seed: u64) -> Option<usize> {
    let mut session = SolverSession::new(config, strategy, seed);
    session.start().ok()?;

    while session.state() == SessionState::AwaitingFeedback {
        let guess = session.current_guess()?.clone();
        let feedback = Feedback::score(secret, &guess).ok()?;
        session
            .submit_feedback(feedback.exact(), feedback.partial())
            .ok()?;
    }

    (session.state() == SessionState::Won).then(|| session.history().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::solver::MinimaxStrategy;
    use crate::universe;

    fn minimax() -> StrategyType {
        StrategyType::Minimax(MinimaxStrategy::default())
    }

    #[test]
    fn benchmark_runs_and_wins_every_game() {
        let secrets: Vec<Code> = universe::generate(&Color::ALL, 4)
            .into_iter()
            .step_by(137)
            .collect();

        let result = run_benchmark(&secrets, &SessionConfig::classic(), minimax(), 0);

        assert_eq!(result.total_secrets, secrets.len());
        assert_eq!(result.failures, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6); // Documented bound for minimax
    }

    #[test]
    fn distribution_sums_to_solved_count() {
        let secrets: Vec<Code> = universe::generate(&Color::ALL, 4)
            .into_iter()
            .step_by(251)
            .collect();

        let result = run_benchmark(&secrets, &SessionConfig::classic(), minimax(), 0);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_secrets - result.failures);
    }

    #[test]
    fn benchmark_metrics_are_consistent() {
        let secrets: Vec<Code> = universe::generate(&Color::ALL, 4)
            .into_iter()
            .step_by(409)
            .collect();

        let result = run_benchmark(&secrets, &SessionConfig::classic(), minimax(), 0);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn empty_secret_list() {
        let result = run_benchmark(&[], &SessionConfig::classic(), minimax(), 0);

        assert_eq!(result.total_secrets, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.failures, 0);
    }
}
