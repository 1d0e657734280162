//! Peg colors
//!
//! The fixed alphabet the game draws codes from. The classic game uses all
//! six colors; smaller alphabets are valid as long as they have at least two.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Purple,
}

impl Color {
    /// The full classic alphabet, in canonical order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Yellow,
        Self::Purple,
    ];

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }

    /// Parse a color from its name (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_name("red"), Some(Color::Red));
    /// assert_eq!(Color::from_name("PURPLE"), Some(Color::Purple));
    /// assert_eq!(Color::from_name("pink"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "orange" => Some(Self::Orange),
            "yellow" => Some(Self::Yellow),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown color: {s}"))
    }
}
