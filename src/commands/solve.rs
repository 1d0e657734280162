//! Auto-solve command
//!
//! Solves a known secret and returns the guess path, for inspecting how a
//! strategy narrows the search.

use crate::core::{Code, Feedback};
use crate::solver::minimax::worst_case_remaining;
use crate::solver::{SessionConfig, SessionState, SolverSession, StrategyType};

/// Result of auto-solving one secret
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
}

/// One turn of the solution path
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst-case partition size of this guess against the candidates it
    /// faced; `None` once only one candidate was left
    pub worst_case: Option<usize>,
}

/// Drive a session against a known secret
///
/// # Errors
///
/// Returns an error if the secret's length does not match the config or the
/// session rejects a scored feedback (which would indicate a scoring bug,
/// since scored feedback is always in range).
pub fn solve_code(
    secret: &Code,
    config: SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> Result<SolveResult, String> {
    if secret.len() != config.code_length {
        return Err(format!(
            "Secret has {} pegs, expected {}",
            secret.len(),
            config.code_length
        ));
    }

    let mut session = SolverSession::new(config, strategy, seed);
    session.start().map_err(|e| e.to_string())?;

    let mut steps = Vec::new();

    while session.state() == SessionState::AwaitingFeedback {
        let guess = session
            .current_guess()
            .cloned()
            .ok_or_else(|| "Session has no active guess".to_string())?;
        let candidates_before = session.remaining_candidates();
        let worst_case = if candidates_before > 1 {
            Some(worst_case_remaining(&guess, session.candidates()))
        } else {
            None
        };

        let feedback = Feedback::score(secret, &guess).map_err(|e| e.to_string())?;
        session
            .submit_feedback(feedback.exact(), feedback.partial())
            .map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: session.remaining_candidates(),
            worst_case,
        });
    }

    Ok(SolveResult {
        success: session.state() == SessionState::Won,
        secret: secret.clone(),
        steps,
    })
}
