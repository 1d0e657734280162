//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod color;
mod feedback;

pub use code::{Code, CodeError};
pub use color::Color;
pub use feedback::{Feedback, FeedbackError};
