//! Random automaton generation.

use crate::automaton::Automaton;
use crate::core::{StateId, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Build a random automaton with a full destination-coverage guarantee.
///
/// The accepting set is a uniform-length prefix (between 1 and
/// `state_count` states) of a shuffled id list, so it is never empty and
/// may cover every state. Transitions are assigned by shuffling the full
/// `(state, letter)` pair list and pinning the first `state_count` pairs
/// to destinations `0, 1, …, state_count - 1` in order; the remaining
/// pairs get uniformly random destinations. The pinning makes every state
/// the destination of at least one transition regardless of the shuffle,
/// which keeps generated puzzles from collapsing onto a handful of
/// reachable states. The initial state is always 0.
///
/// `letters` is the plain alphabet; the algorithm does not care about its
/// size. Valid inputs (`state_count >= 2`, a non-empty alphabet of plain
/// letters) are a caller contract, not a runtime condition.
///
/// # Example
///
/// ```rust
/// use automan::{random_automaton, Symbol};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let automaton = random_automaton(&mut rng, 4, &Symbol::LETTERS);
///
/// assert_eq!(automaton.state_count(), 4);
/// assert_eq!(automaton.initial_state(), 0);
/// // Every (state, letter) pair has a destination.
/// for state in 0..4 {
///     for letter in Symbol::LETTERS {
///         assert!(automaton.destination(state, letter).is_some());
///     }
/// }
/// ```
pub fn random_automaton<R: Rng + ?Sized>(
    rng: &mut R,
    state_count: usize,
    letters: &[Symbol],
) -> Automaton {
    debug_assert!(state_count >= 2, "an automaton puzzle needs two states");
    debug_assert!(!letters.is_empty() && letters.iter().all(|s| s.is_letter()));

    let mut ids: Vec<StateId> = (0..state_count).collect();
    ids.shuffle(rng);
    let accepting_count = rng.gen_range(1..=state_count);
    let accepting = ids[..accepting_count].to_vec();

    let mut pairs: Vec<(StateId, Symbol)> = (0..state_count)
        .flat_map(|state| letters.iter().map(move |&letter| (state, letter)))
        .collect();
    pairs.shuffle(rng);

    let mut transitions = HashMap::with_capacity(pairs.len());
    for (index, &pair) in pairs.iter().enumerate() {
        let destination = if index < state_count {
            index
        } else {
            rng.gen_range(0..state_count)
        };
        transitions.insert(pair, destination);
    }

    Automaton::from_parts(state_count, 0, accepting, transitions)
}
