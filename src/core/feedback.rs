//! Feedback scoring
//!
//! Feedback for a guess is a pair of counts:
//! - exact: pegs with the right color in the right position
//! - partial: pegs with a color present in the secret but in the wrong
//!   position, counted with multiset semantics (each secret peg can satisfy
//!   at most one partial match)
//!
//! Invariant: `exact + partial <= code_length`.

use super::Code;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact/partial match counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

/// Error type for scoring and feedback validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Secret and guess lengths differ. A programming error, not user input.
    LengthMismatch { secret: usize, guess: usize },
    /// Counts exceed what any code of this length could produce
    OutOfRange {
        exact: u8,
        partial: u8,
        code_length: usize,
    },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { secret, guess } => {
                write!(f, "Cannot score codes of different lengths: secret has {secret} pegs, guess has {guess}")
            }
            Self::OutOfRange {
                exact,
                partial,
                code_length,
            } => write!(
                f,
                "Feedback ({exact}, {partial}) is impossible for a code of length {code_length}"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Create feedback from raw counts, without validation
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Create feedback from raw counts, validated against a code length
    ///
    /// This is the defensive entry point for counts supplied by a
    /// presentation layer.
    ///
    /// # Errors
    /// Returns `FeedbackError::OutOfRange` if either count exceeds
    /// `code_length` or their sum does.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert!(Feedback::checked(2, 1, 4).is_ok());
    /// assert!(Feedback::checked(5, 0, 4).is_err());
    /// assert!(Feedback::checked(2, 3, 4).is_err());
    /// ```
    pub fn checked(exact: u8, partial: u8, code_length: usize) -> Result<Self, FeedbackError> {
        let total = usize::from(exact) + usize::from(partial);
        if usize::from(exact) > code_length || usize::from(partial) > code_length || total > code_length
        {
            return Err(FeedbackError::OutOfRange {
                exact,
                partial,
                code_length,
            });
        }
        Ok(Self { exact, partial })
    }

    /// Number of exact (right color, right position) matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial (right color, wrong position) matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Whether this feedback means the guess equals the secret
    #[inline]
    #[must_use]
    pub fn is_win(self, code_length: usize) -> bool {
        usize::from(self.exact) == code_length
    }

    /// Score a guess against a secret
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and consume the matched
    ///    secret pegs from an availability multiset.
    /// 2. Second pass: each remaining guess peg scores a partial match if an
    ///    occurrence of its color is still available, consuming it. This is
    ///    an occurrence-count decrement, not an existence check, so duplicate
    ///    colors are counted correctly.
    ///
    /// Neither input is mutated. The parameter order is (secret, guess);
    /// the counting happens to be commutative but the roles are not.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("red, red, blue, green", 4).unwrap();
    /// let guess = Code::parse("red, blue, yellow, blue", 4).unwrap();
    ///
    /// // One exact red; one guessed blue pairs with the secret's blue,
    /// // the second guessed blue has no remaining match.
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    /// assert_eq!((feedback.exact(), feedback.partial()), (1, 1));
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self, FeedbackError> {
        if secret.len() != guess.len() {
            return Err(FeedbackError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut available = secret.color_counts();

        // First pass: exact matches, consumed from the pool
        let mut exact = 0u8;
        for (s, g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                exact += 1;
                if let Some(count) = available.get_mut(s) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: partial matches from the remaining pool
        let mut partial = 0u8;
        for (s, g) in secret.colors().iter().zip(guess.colors()) {
            if s != g
                && let Some(count) = available.get_mut(g)
                && *count > 0
            {
                partial += 1;
                *count -= 1;
            }
        }

        Ok(Self { exact, partial })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exact {}, partial {}", self.exact, self.partial)
    }
}
