//! Candidate filtering
//!
//! Narrows the candidate set to codes consistent with observed feedback.
//! A code `c` is consistent with `(guess, feedback)` iff scoring `guess`
//! against a secret of `c` reproduces `feedback`.

use crate::core::{Code, Feedback};

/// Keep the candidates consistent with one new observation
///
/// Pure: the input slice is untouched. The result is always a subset of
/// `candidates`. An empty result means the accumulated feedback is
/// contradictory (no possible secret remains); callers must treat that as a
/// distinct terminal outcome, not keep searching.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess).is_ok_and(|f| f == feedback))
        .cloned()
        .collect()
}

/// Re-derive the candidate set from a full guess history
///
/// Equivalent to applying `filter_candidates` once per history entry in
/// order. Used to rebuild session state from a serialized history.
#[must_use]
pub fn filter_history(universe: &[Code], history: &[(Code, Feedback)]) -> Vec<Code> {
    universe
        .iter()
        .filter(|candidate| {
            history.iter().all(|(guess, observed)| {
                Feedback::score(candidate, guess).is_ok_and(|f| f == *observed)
            })
        })
        .cloned()
        .collect()
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
    fn filter_keeps_only_consistent_codes() {
        let universe = universe::generate(&Color::ALL, 4);
        let guess = code("red, red, blue, blue");
        let secret = code("red, green, blue, orange");
        let feedback = Feedback::score(&secret, &guess).unwrap();

        let remaining = filter_candidates(&universe, &guess, feedback);

        assert!(remaining.contains(&secret));
        for candidate in &remaining {
            assert_eq!(Feedback::score(candidate, &guess).unwrap(), feedback);
        }
    }

    #[test]
    fn filter_is_monotone() {
        let universe = universe::generate(&Color::ALL, 4);
        let secret = code("yellow, purple, red, red");

        let mut candidates = universe;
        for guess_str in ["red, red, blue, blue", "green, orange, yellow, yellow"] {
            let guess = code(guess_str);
            let feedback = Feedback::score(&secret, &guess).unwrap();
            let before = candidates.len();

            candidates = filter_candidates(&candidates, &guess, feedback);

            assert!(candidates.len() <= before);
            assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn perfect_feedback_leaves_only_the_guess() {
        let universe = universe::generate(&Color::ALL, 4);
        let guess = code("red, green, blue, orange");

        let remaining = filter_candidates(&universe, &guess, Feedback::new(4, 0));

        assert_eq!(remaining, vec![guess]);
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let universe = universe::generate(&Color::ALL, 4);
        let guess = code("red, red, red, red");

        // Three exact plus one partial is impossible for a monochrome guess
        let remaining = filter_candidates(&universe, &guess, Feedback::new(3, 1));

        assert!(remaining.is_empty());
    }

    #[test]
    fn incremental_matches_batch_refiltering() {
        let universe = universe::generate(&Color::ALL, 4);
        let secret = code("green, green, purple, red");
        let guesses = [
            code("red, red, blue, blue"),
            code("green, orange, green, yellow"),
            code("purple, green, purple, red"),
        ];

        let mut history = Vec::new();
        let mut incremental = universe.clone();
        for guess in &guesses {
            let feedback = Feedback::score(&secret, guess).unwrap();
            incremental = filter_candidates(&incremental, guess, feedback);
            history.push((guess.clone(), feedback));

            // The invariant holds after every turn, not just at the end
            let batch = filter_history(&universe, &history);
            assert_eq!(incremental, batch);
        }
    }

    #[test]
    fn empty_history_keeps_the_full_universe() {
        let universe = universe::generate(&Color::ALL, 3);
        let rebuilt = filter_history(&universe, &[]);
        assert_eq!(rebuilt, universe);
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let universe = universe::generate(&Color::ALL, 3);
        let before = universe.clone();
        let guess = code("red, green, blue");

        let _ = filter_candidates(&universe, &guess, Feedback::new(1, 1));

        assert_eq!(universe, before);
    }
}
