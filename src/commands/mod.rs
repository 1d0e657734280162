//! Command implementations

pub mod benchmark;
pub mod crack;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use crack::run_crack;
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_code};
