//! Code universe enumeration
//!
//! Generates the full set of candidate codes for a given alphabet and
//! length: every ordered sequence of colors drawn with repetition. The size
//! is `|alphabet|^length`, so this is exponential; callers are responsible
//! for bounding alphabet size × length (~10,000 codes for interactive use).

use crate::core::{Code, Color};

/// Number of codes for a given alphabet size and code length
#[must_use]
pub fn size(alphabet_len: usize, code_length: usize) -> usize {
    alphabet_len.pow(u32::try_from(code_length).unwrap_or(u32::MAX))
}

/// Generate every code of `length` pegs over `alphabet`
///
/// Content is deterministic: codes are produced in odometer order, with the
/// rightmost position varying fastest. No duplicates are produced.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Color;
/// use mastermind_solver::universe;
///
/// let codes = universe::generate(&Color::ALL, 4);
/// assert_eq!(codes.len(), 1296); // 6^4
/// ```
#[must_use]
pub fn generate(alphabet: &[Color], length: usize) -> Vec<Code> {
    if alphabet.is_empty() && length > 0 {
        return Vec::new();
    }

    let mut codes = Vec::with_capacity(size(alphabet.len(), length));
    let mut indices = vec![0usize; length];

    loop {
        codes.push(Code::new(indices.iter().map(|&i| alphabet[i]).collect()));

        // Advance the odometer; done once the leftmost digit wraps
        let mut pos = length;
        loop {
            if pos == 0 {
                return codes;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < alphabet.len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}
