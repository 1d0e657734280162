//! Code representation
//!
//! A Code is an ordered, fixed-length sequence of colors. Positions are
//! significant and duplicate colors are allowed.

use super::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of peg colors, used as both secrets and guesses
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Color>);

/// Error type for code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    WrongLength { expected: usize, actual: usize },
    UnknownColor(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} colors, got {actual}")
            }
            Self::UnknownColor(name) => write!(f, "Unknown color: {name}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a color sequence
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse a comma-separated list of color names, e.g. `"red, green, blue, orange"`
    ///
    /// # Errors
    /// Returns `CodeError` if the number of colors differs from
    /// `expected_length` or any name is not a known color.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Color};
    ///
    /// let code = Code::parse("red, red, blue, blue", 4).unwrap();
    /// assert_eq!(code.colors()[0], Color::Red);
    ///
    /// assert!(Code::parse("red, blue", 4).is_err());
    /// assert!(Code::parse("red, red, blue, pink", 4).is_err());
    /// ```
    pub fn parse(input: &str, expected_length: usize) -> Result<Self, CodeError> {
        let names: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if names.len() != expected_length {
            return Err(CodeError::WrongLength {
                expected: expected_length,
                actual: names.len(),
            });
        }

        let colors = names
            .iter()
            .map(|name| Color::from_name(name).ok_or_else(|| CodeError::UnknownColor((*name).to_string())))
            .collect::<Result<Vec<Color>, CodeError>>()?;

        Ok(Self(colors))
    }

    /// The color sequence
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of pegs in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occurrence count of each color in the code
    ///
    /// Used by the scorer for multiset-correct partial matching with
    /// duplicate colors.
    #[inline]
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
