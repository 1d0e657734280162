//! Minimax worst-case calculation
//!
//! Given a guess and a set of candidates, computes the maximum number of
//! candidates that could remain for any feedback the guess might receive.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the worst-case remaining candidates for a guess
///
/// Every candidate that could be the secret would answer this guess with
/// some feedback; candidates sharing a feedback value stay indistinguishable
/// after the turn. The worst case is the size of the largest such group.
#[must_use]
pub fn worst_case_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let partitions = partition_by_feedback(guess, candidates);
    partitions.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would give for this guess
fn partition_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        if let Ok(feedback) = Feedback::score(candidate, guess) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::universe;

    fn code(names: &str) -> Code {
        let len = names.split(',').count();
        Code::parse(names, len).unwrap()
    }

    #[test]
    fn worst_case_of_empty_set_is_zero() {
        let guess = code("red, red, blue, blue");
        assert_eq!(worst_case_remaining(&guess, &[]), 0);
    }

    #[test]
    fn single_candidate_worst_case_is_one() {
        let guess = code("red, red, blue, blue");
        let candidates = vec![code("green, green, orange, orange")];
        assert_eq!(worst_case_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn indistinct_candidates_all_land_in_one_group() {
        // A monochrome purple guess cannot tell these apart: each scores (0, 0)
        let guess = code("purple, purple, purple, purple");
        let candidates = vec![
            code("red, red, red, red"),
            code("green, green, green, green"),
            code("blue, blue, blue, blue"),
        ];

        assert_eq!(worst_case_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn discriminating_guess_splits_the_set() {
        let guess = code("red, green, blue, orange");
        let candidates = vec![
            code("red, red, red, red"),         // (1, 0)
            code("green, green, green, green"), // (1, 0)
            code("red, green, blue, orange"),   // (4, 0)
        ];

        assert_eq!(worst_case_remaining(&guess, &candidates), 2);
    }

    #[test]
    fn worst_case_is_bounded_by_candidate_count() {
        let universe = universe::generate(&Color::ALL, 3);
        let guess = code("red, green, blue");

        let worst = worst_case_remaining(&guess, &universe);
        assert!(worst >= 1);
        assert!(worst <= universe.len());
    }

    #[test]
    fn partition_sizes_sum_to_candidate_count() {
        let universe = universe::generate(&Color::ALL, 3);
        let guess = code("red, red, blue");

        let partitions = partition_by_feedback(&guess, &universe);
        assert_eq!(partitions.values().sum::<usize>(), universe.len());
    }
}
