//! Knuth-style minimax guess selection
//!
//! Implements worst-case minimization over feedback partitions.

mod calculator;
mod selector;

pub use calculator::worst_case_remaining;
pub use selector::select_best_guess;
