//! Mastermind solving machinery
//!
//! Candidate filtering, guess selection strategies, and the session state
//! machine that ties them together.

pub mod filter;
pub mod minimax;
mod session;
pub mod strategy;

pub use session::{SessionConfig, SessionError, SessionSnapshot, SessionState, SolverSession};
pub use strategy::{MinimaxStrategy, ProbePolicy, RandomStrategy, Strategy, StrategyType};
