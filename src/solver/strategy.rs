//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::borrow::Cow;

/// A strategy for selecting the next guess
///
/// `universe` is the full original code set, `candidates` the pruned set
/// still consistent with all feedback. Minimax may probe outside the current
/// candidates; random selection never does. Randomness comes only from the
/// injected rng, so a fixed seed replays identically.
pub trait Strategy {
    /// Select the next guess, or `None` if `candidates` is empty
    fn select_guess(
        &self,
        universe: &[Code],
        candidates: &[Code],
        rng: &mut StdRng,
    ) -> Option<Code>;
}

/// Probe-set sizing policy for minimax selection
///
/// Selection cost is O(|probe set| × |candidates|) scorer calls, the dominant
/// cost of the whole solver, so the probe set must be bounded explicitly:
/// the full universe is searched while it is at most `full_search_limit`
/// codes (fully deterministic), otherwise `sample_size` rng-sampled universe
/// codes are probed together with every current candidate, keeping the
/// candidate tie-break meaningful at the cost of seed-dependent probes.
#[derive(Debug, Clone, Copy)]
pub struct ProbePolicy {
    pub full_search_limit: usize,
    pub sample_size: usize,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self {
            full_search_limit: 10_000,
            sample_size: 512,
        }
    }
}

impl ProbePolicy {
    fn probe_set<'a>(
        &self,
        universe: &'a [Code],
        candidates: &[Code],
        rng: &mut StdRng,
    ) -> Cow<'a, [Code]> {
        if universe.len() <= self.full_search_limit {
            return Cow::Borrowed(universe);
        }

        let mut probes: Vec<Code> = candidates.to_vec();
        probes.extend(
            universe
                .choose_multiple(rng, self.sample_size)
                .cloned(),
        );
        Cow::Owned(probes)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Knuth worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// Uniform random choice among remaining candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        universe: &[Code],
        candidates: &[Code],
        rng: &mut StdRng,
    ) -> Option<Code> {
        match self {
            Self::Minimax(s) => s.select_guess(universe, candidates, rng),
            Self::Random(s) => s.select_guess(universe, candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "knuth", "random". Defaults to minimax if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy::default()),
        }
    }

    /// Human-readable strategy name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Knuth-style minimax strategy
///
/// Selects the probe minimizing the worst-case remaining candidate count.
/// A lone candidate is returned immediately without searching.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy {
    pub probe: ProbePolicy,
}

impl Strategy for MinimaxStrategy {
    fn select_guess(
        &self,
        universe: &[Code],
        candidates: &[Code],
        rng: &mut StdRng,
    ) -> Option<Code> {
        match candidates {
            [] => None,
            [only] => Some(only.clone()),
            _ => {
                let probes = self.probe.probe_set(universe, candidates, rng);
                super::minimax::select_best_guess(&probes, candidates)
                    .map(|(best, _)| best.clone())
            }
        }
    }
}

/// Uniform random strategy
///
/// Picks any remaining candidate with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(
        &self,
        _universe: &[Code],
        candidates: &[Code],
        rng: &mut StdRng,
    ) -> Option<Code> {
        candidates.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::universe;
    use rand::SeedableRng;

    fn code(names: &str) -> Code {
        let len = names.split(',').count();
        Code::parse(names, len).unwrap()
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn minimax_returns_lone_candidate_without_searching() {
        let universe = universe::generate(&Color::ALL, 4);
        let candidates = vec![code("purple, yellow, orange, green")];

        let strategy = MinimaxStrategy::default();
        let guess = strategy.select_guess(&universe, &candidates, &mut rng(1));

        assert_eq!(guess, Some(candidates[0].clone()));
    }

    #[test]
    fn minimax_returns_none_for_empty_candidates() {
        let universe = universe::generate(&Color::ALL, 4);
        let strategy = MinimaxStrategy::default();

        assert!(strategy.select_guess(&universe, &[], &mut rng(1)).is_none());
    }

    #[test]
    fn minimax_is_deterministic_within_the_full_search_limit() {
        let universe = universe::generate(&Color::ALL, 3);
        let candidates: Vec<Code> = universe.iter().take(30).cloned().collect();
        let strategy = MinimaxStrategy::default();

        // Different seeds, same answer: the rng is unused under full search
        let a = strategy.select_guess(&universe, &candidates, &mut rng(1));
        let b = strategy.select_guess(&universe, &candidates, &mut rng(999));

        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn minimax_sampling_still_includes_all_candidates() {
        let universe = universe::generate(&Color::ALL, 3);
        let strategy = MinimaxStrategy {
            probe: ProbePolicy {
                full_search_limit: 10, // Force sampling
                sample_size: 5,
            },
        };
        let candidates = vec![code("red, blue, green")];

        // Even with a tiny sample, the lone candidate is chosen outright
        let guess = strategy.select_guess(&universe, &candidates, &mut rng(7));
        assert_eq!(guess, Some(candidates[0].clone()));
    }

    #[test]
    fn random_picks_a_candidate() {
        let universe = universe::generate(&Color::ALL, 4);
        let candidates: Vec<Code> = universe.iter().take(10).cloned().collect();

        let strategy = RandomStrategy;
        let guess = strategy
            .select_guess(&universe, &candidates, &mut rng(42))
            .unwrap();

        assert!(candidates.contains(&guess));
    }

    #[test]
    fn random_is_reproducible_for_a_fixed_seed() {
        let universe = universe::generate(&Color::ALL, 4);
        let candidates: Vec<Code> = universe.iter().take(100).cloned().collect();

        let strategy = RandomStrategy;
        let a = strategy.select_guess(&universe, &candidates, &mut rng(42));
        let b = strategy.select_guess(&universe, &candidates, &mut rng(42));

        assert_eq!(a, b);
    }

    #[test]
    fn random_returns_none_for_empty_candidates() {
        let universe = universe::generate(&Color::ALL, 4);
        assert!(
            RandomStrategy
                .select_guess(&universe, &[], &mut rng(42))
                .is_none()
        );
    }

    #[test]
    fn strategy_type_from_name() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("knuth").name(), "minimax");
        assert_eq!(StrategyType::from_name("anything").name(), "minimax");
    }
}
