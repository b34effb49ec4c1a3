//! Balanced, deduplicated batch sampling of puzzle strings.

use crate::automaton::Automaton;
use crate::core::{AutomatonError, Symbol};
use crate::generator::automaton::random_automaton;
use crate::generator::string::{random_string, PuzzleString};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Retry budget for the balanced sampling loop.
///
/// Once exhausted, remaining slots are filled without the balance and
/// uniqueness constraints so a batch always reaches its full size.
pub const MAX_ATTEMPTS: usize = 1000;

/// Generation settings for one batch - the per-stage string configuration
/// plus the size of the automaton backing it.
///
/// Ranges are inclusive on both ends. Valid inputs (`state_count >= 2`,
/// ordered ranges, a checkpoint minimum of at least 1) are a caller
/// contract; malformed ranges are not a runtime condition the sampler
/// recovers from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    /// How many puzzle strings to generate.
    pub string_count: usize,
    /// How many states the generated automaton has.
    pub state_count: usize,
    /// Inclusive range of plain-letter lengths.
    pub length_range: (usize, usize),
    /// Inclusive range of checkpoint counts per string.
    pub checkpoint_range: (usize, usize),
}

/// Samples a batch of puzzle strings against a single automaton.
///
/// The sampler owns the one automaton it was built with for the duration
/// of the batch. Sampling aims for an approximately even split of
/// accepted and rejected strings - the per-outcome targets derive from
/// `state_count / 2`, not from the requested string count; larger
/// automatons are expected to carry richer example sets - and never emits
/// two strings with the same letter text and the same outcome while the
/// retry budget lasts.
///
/// # Example
///
/// ```rust
/// use automan::{BatchConfig, BatchSampler};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = BatchConfig {
///     string_count: 10,
///     state_count: 4,
///     length_range: (2, 2),
///     checkpoint_range: (1, 1),
/// };
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut sampler = BatchSampler::new(&mut rng, config);
/// let strings = sampler.sample(&mut rng).unwrap();
///
/// assert_eq!(strings.len(), 10);
/// for string in &strings {
///     assert_eq!(string.text().len(), 2);
///     assert_eq!(string.checkpoint_count(), 1);
/// }
/// ```
pub struct BatchSampler {
    automaton: Automaton,
    config: BatchConfig,
}

impl BatchSampler {
    /// Build a fresh random automaton for `config` and wrap it.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, config: BatchConfig) -> Self {
        let automaton = random_automaton(rng, config.state_count, &Symbol::LETTERS);
        Self { automaton, config }
    }

    /// Wrap an existing automaton instead of generating one.
    ///
    /// `config.state_count` should match the automaton's state count; the
    /// balance targets are computed from the config.
    pub fn with_automaton(automaton: Automaton, config: BatchConfig) -> Self {
        Self { automaton, config }
    }

    /// The automaton this sampler generates strings against.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Generate exactly `config.string_count` puzzle strings.
    ///
    /// Up to [`MAX_ATTEMPTS`] candidate strings are drawn with random
    /// length and checkpoint count from the configured ranges. A candidate
    /// is kept only while its outcome still has remaining quota and its
    /// letter text is new for that outcome. If the budget runs out before
    /// the batch is full - the automaton and ranges may simply not admit
    /// enough distinct strings of the needed split - the tail is filled
    /// with unconstrained strings, so the batch always has full size.
    ///
    /// Strings are returned in acceptance order.
    ///
    /// # Errors
    ///
    /// Propagates [`AutomatonError`] from string generation; unreachable
    /// for a sampler holding a complete automaton.
    pub fn sample<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<PuzzleString>, AutomatonError> {
        let BatchConfig {
            string_count,
            state_count,
            length_range: (min_length, max_length),
            checkpoint_range: (min_checkpoints, max_checkpoints),
        } = self.config;

        let mut positive_target = state_count / 2;
        let mut negative_target = state_count / 2;
        let shortfall = string_count.saturating_sub(positive_target + negative_target);
        if shortfall > 0 {
            if rng.gen_bool(0.5) {
                positive_target += shortfall;
            } else {
                negative_target += shortfall;
            }
        }

        let mut strings = Vec::with_capacity(string_count);
        let mut positive_seen: HashSet<String> = HashSet::new();
        let mut negative_seen: HashSet<String> = HashSet::new();

        for _ in 0..MAX_ATTEMPTS {
            if strings.len() >= string_count {
                break;
            }

            let length = rng.gen_range(min_length..=max_length);
            let checkpoints = rng.gen_range(min_checkpoints..=max_checkpoints);
            let candidate = random_string(
                rng,
                &mut self.automaton,
                &Symbol::LETTERS,
                length,
                checkpoints,
            )?;

            let (seen, target) = if candidate.is_accepted() {
                (&mut positive_seen, positive_target)
            } else {
                (&mut negative_seen, negative_target)
            };

            if seen.len() < target && seen.insert(candidate.text().to_owned()) {
                strings.push(candidate);
            }
        }

        debug!(
            positive = positive_seen.len(),
            negative = negative_seen.len(),
            total = strings.len(),
            "balanced sampling finished"
        );

        // Budget exhausted: top up without the balance and uniqueness
        // constraints so the batch always reaches full size.
        while strings.len() < string_count {
            let length = rng.gen_range(min_length..=max_length);
            let checkpoints = rng.gen_range(min_checkpoints..=max_checkpoints);
            strings.push(random_string(
                rng,
                &mut self.automaton,
                &Symbol::LETTERS,
                length,
                checkpoints,
            )?);
        }

        Ok(strings)
    }
}

/// Build an automaton for `config`, sample one batch, and return it.
///
/// Convenience for callers that do not need to keep the automaton around.
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    config: BatchConfig,
) -> Result<Vec<PuzzleString>, AutomatonError> {
    BatchSampler::new(rng, config).sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Four states in a cycle: `A` advances, `B` stays. Acceptance
    /// alternates, so a string is accepted iff its `A` count is odd.
    fn cycle_automaton() -> Automaton {
        let mut builder = AutomatonBuilder::new(4).accepting(1).accepting(3);
        for state in 0..4 {
            builder = builder
                .transition(state, Symbol::LetterA, (state + 1) % 4)
                .transition(state, Symbol::LetterB, state);
        }
        builder.build().unwrap()
    }

    #[test]
    fn sample_returns_exactly_the_requested_count() {
        let config = BatchConfig {
            string_count: 10,
            state_count: 4,
            length_range: (2, 2),
            checkpoint_range: (1, 1),
        };
        let mut rng = StdRng::seed_from_u64(42);
        let strings = sample(&mut rng, config).unwrap();

        assert_eq!(strings.len(), 10);
        for string in &strings {
            assert_eq!(string.text().len(), 2);
            assert_eq!(string.checkpoint_count(), 1);
            let last = string.sequence().iter().last().copied().unwrap();
            assert!(!last.is_letter());
        }
    }

    #[test]
    fn balance_targets_follow_state_count() {
        // The quota formula is state_count / 2 per outcome, not
        // string_count / 2. With four states and four strings the split
        // is exactly 2/2 whenever the budget suffices, which the cycle
        // automaton's rich outcome space guarantees.
        let config = BatchConfig {
            string_count: 4,
            state_count: 4,
            length_range: (4, 4),
            checkpoint_range: (1, 1),
        };
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sampler = BatchSampler::with_automaton(cycle_automaton(), config);
            let strings = sampler.sample(&mut rng).unwrap();

            let positive = strings.iter().filter(|s| s.is_accepted()).count();
            assert_eq!(positive, 2, "seed {seed}");
            assert_eq!(strings.len(), 4);
        }
    }

    #[test]
    fn shortfall_is_added_to_one_side() {
        // Two states give targets of 1 and 1; asking for three strings
        // pushes the extra slot onto one outcome by coin flip.
        let mut builder = AutomatonBuilder::new(2).accepting(1);
        builder = builder
            .transition(0, Symbol::LetterA, 1)
            .transition(0, Symbol::LetterB, 0)
            .transition(1, Symbol::LetterA, 0)
            .transition(1, Symbol::LetterB, 1);
        let automaton = builder.build().unwrap();

        let config = BatchConfig {
            string_count: 3,
            state_count: 2,
            length_range: (2, 4),
            checkpoint_range: (1, 1),
        };
        let mut rng = StdRng::seed_from_u64(6);
        let mut sampler = BatchSampler::with_automaton(automaton, config);
        let strings = sampler.sample(&mut rng).unwrap();

        assert_eq!(strings.len(), 3);
        let positive = strings.iter().filter(|s| s.is_accepted()).count();
        assert!(positive == 1 || positive == 2);
    }

    #[test]
    fn letter_texts_are_unique_within_an_outcome() {
        let config = BatchConfig {
            string_count: 4,
            state_count: 4,
            length_range: (4, 4),
            checkpoint_range: (1, 2),
        };
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sampler = BatchSampler::with_automaton(cycle_automaton(), config);
            let strings = sampler.sample(&mut rng).unwrap();

            let positive: HashSet<&str> = strings
                .iter()
                .filter(|s| s.is_accepted())
                .map(|s| s.text())
                .collect();
            let negative: HashSet<&str> = strings
                .iter()
                .filter(|s| !s.is_accepted())
                .map(|s| s.text())
                .collect();
            assert_eq!(positive.len() + negative.len(), 4, "seed {seed}");
        }
    }

    #[test]
    fn exhausted_budget_still_fills_the_batch() {
        // Zero-length strings all share the empty letter text, so the
        // dedup rule admits at most one per outcome and the tail must be
        // filled unconstrained.
        let config = BatchConfig {
            string_count: 5,
            state_count: 4,
            length_range: (0, 0),
            checkpoint_range: (1, 1),
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut sampler = BatchSampler::with_automaton(cycle_automaton(), config);
        let strings = sampler.sample(&mut rng).unwrap();

        assert_eq!(strings.len(), 5);
        for string in &strings {
            assert_eq!(string.text(), "");
            assert_eq!(string.sequence().len(), 1);
        }
    }

    #[test]
    fn sampler_exposes_its_automaton() {
        let config = BatchConfig {
            string_count: 1,
            state_count: 3,
            length_range: (1, 1),
            checkpoint_range: (1, 1),
        };
        let mut rng = StdRng::seed_from_u64(8);
        let sampler = BatchSampler::new(&mut rng, config);
        assert_eq!(sampler.automaton().state_count(), 3);
    }
}
