//! Minimax guess selection
//!
//! Selects the probe code that minimizes the worst-case remaining candidate
//! count, in Knuth's style.

use super::calculator::worst_case_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select the probe code minimizing the worst-case remaining candidates
///
/// Returns the winning code and its worst-case count, or `None` if the probe
/// pool is empty.
///
/// Ties are broken by preferring a probe that is itself one of the current
/// candidates (such a guess can win outright this turn), then by the lowest
/// probe index. The reduction key carries all three components, so the
/// parallel minimum is total-ordered and the result is deterministic
/// regardless of how rayon splits the work.
#[must_use]
pub fn select_best_guess<'a>(
    probe_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    probe_pool
        .par_iter()
        .enumerate()
        .map(|(index, probe)| {
            let worst = worst_case_remaining(probe, candidates);
            let outside = !candidates.contains(probe);
            (worst, outside, index, probe)
        })
        .min_by_key(|&(worst, outside, index, _)| (worst, outside, index))
        .map(|(worst, _, _, probe)| (probe, worst))
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
    fn empty_probe_pool_returns_none() {
        let candidates = vec![code("red, red, blue, blue")];
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn picks_the_discriminating_probe() {
        // The mixed probe gives each candidate a distinct feedback (worst
        // case 1); monochrome purple leaves two of them indistinguishable.
        let probes = vec![
            code("purple, purple, purple, purple"),
            code("red, green, blue, orange"),
        ];
        let candidates = vec![
            code("red, red, red, red"),             // (1,0) vs mixed, (0,0) vs purple
            code("purple, purple, purple, purple"), // (0,0) vs mixed, (4,0) vs purple
            code("red, green, blue, orange"),       // (4,0) vs mixed, (0,0) vs purple
        ];

        let (best, worst) = select_best_guess(&probes, &candidates).unwrap();
        assert_eq!(*best, probes[1]);
        assert_eq!(worst, 1);
    }

    #[test]
    fn tie_break_prefers_a_current_candidate() {
        // Both probes give worst case 1 against a single candidate, but only
        // the second is the candidate itself.
        let probes = vec![
            code("green, green, green, green"),
            code("red, red, blue, blue"),
        ];
        let candidates = vec![code("red, red, blue, blue")];

        let (best, worst) = select_best_guess(&probes, &candidates).unwrap();
        assert_eq!(*best, candidates[0]);
        assert_eq!(worst, 1);
    }

    #[test]
    fn remaining_ties_fall_to_the_lowest_index() {
        // Neither probe is a candidate and both leave everything
        // indistinguishable, so the first one wins.
        let probes = vec![
            code("purple, purple, purple, purple"),
            code("yellow, yellow, yellow, yellow"),
        ];
        let candidates = vec![
            code("red, red, red, red"),
            code("blue, blue, blue, blue"),
        ];

        let (best, _) = select_best_guess(&probes, &candidates).unwrap();
        assert_eq!(*best, probes[0]);
    }

    #[test]
    fn selection_is_deterministic() {
        let universe = universe::generate(&Color::ALL, 3);
        let candidates: Vec<Code> = universe.iter().take(40).cloned().collect();

        let first = select_best_guess(&universe, &candidates).unwrap();
        for _ in 0..5 {
            let again = select_best_guess(&universe, &candidates).unwrap();
            assert_eq!(first.0, again.0);
            assert_eq!(first.1, again.1);
        }
    }

    #[test]
    fn reported_worst_case_matches_the_calculator() {
        let universe = universe::generate(&Color::ALL, 3);
        let candidates: Vec<Code> = universe.iter().step_by(7).cloned().collect();

        let (best, worst) = select_best_guess(&universe, &candidates).unwrap();
        assert_eq!(worst, worst_case_remaining(best, &candidates));
    }
}
