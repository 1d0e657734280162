//! Mastermind Solver
//!
//! A code-breaking engine for the classic Mastermind game: exact/partial
//! feedback scoring, consistency-based candidate pruning, and guess
//! selection via Knuth's minimax strategy (worst case 5 guesses for the
//! classic 6-color, length-4 game) or uniform random choice.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//!
//! let secret = Code::parse("red, green, blue, orange", 4).unwrap();
//! let guess = Code::parse("red, red, blue, blue", 4).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess).unwrap();
//! assert_eq!((feedback.exact(), feedback.partial()), (2, 0));
//! ```

// Core domain types
pub mod core;

// Code universe enumeration
pub mod universe;

// Solving machinery: filtering, strategies, session state machine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
