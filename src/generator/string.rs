//! Random puzzle string generation.

use crate::automaton::Automaton;
use crate::core::{AutomatonError, Symbol, SymbolSequence};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One generated puzzle string: the symbol sequence a round plays through,
/// the plain-letter text used for deduplication, and the automaton's final
/// classification of the string.
///
/// The sequence always ends with a checkpoint marker, so `is_accepted`
/// equals the polarity of the last symbol.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PuzzleString {
    sequence: SymbolSequence,
    text: String,
    accepted: bool,
}

impl PuzzleString {
    /// The full symbol sequence, letters and checkpoints interleaved.
    pub fn sequence(&self) -> &SymbolSequence {
        &self.sequence
    }

    /// Consume the puzzle string, yielding the sequence for simulation.
    pub fn into_sequence(self) -> SymbolSequence {
        self.sequence
    }

    /// The plain letters of the string, checkpoints stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the automaton accepts the full letter sequence.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The number of checkpoint markers embedded in the string.
    pub fn checkpoint_count(&self) -> usize {
        self.sequence.iter().filter(|s| !s.is_letter()).count()
    }
}

impl fmt::Display for PuzzleString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sequence.fmt(f)
    }
}

/// Generate a random puzzle string of `length` plain letters with
/// `checkpoints` embedded checkpoint markers.
///
/// The automaton is reset, `length` letters are drawn uniformly from
/// `letters`, and checkpoint insertion indices are chosen by shuffling the
/// boundary positions `0..length` (0 is before the first letter), keeping
/// the first `checkpoints - 1` of them, and unconditionally adding the
/// final boundary `length` - every generated string ends with an
/// acceptance assertion. Each checkpoint's polarity is the automaton's
/// acceptance at that exact boundary, captured while the letters are fed
/// through [`Automaton::transition`].
///
/// Valid inputs (`checkpoints >= 1`) are a caller contract; when
/// `checkpoints - 1` exceeds `length` every boundary is used and the
/// string carries `length + 1` markers.
///
/// # Errors
///
/// Propagates [`AutomatonError::NoTransition`] if `automaton` has an
/// incomplete transition table. An automaton built by
/// [`random_automaton`](crate::generator::random_automaton) never fails.
///
/// # Example
///
/// ```rust
/// use automan::{random_automaton, random_string, Symbol};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut automaton = random_automaton(&mut rng, 3, &Symbol::LETTERS);
///
/// let string = random_string(&mut rng, &mut automaton, &Symbol::LETTERS, 4, 2).unwrap();
///
/// assert_eq!(string.text().len(), 4);
/// assert_eq!(string.checkpoint_count(), 2);
/// // The last symbol is always a checkpoint carrying the classification.
/// let last = string.sequence().iter().last().copied().unwrap();
/// assert_eq!(last.polarity(), Some(string.is_accepted()));
/// ```
pub fn random_string<R: Rng + ?Sized>(
    rng: &mut R,
    automaton: &mut Automaton,
    letters: &[Symbol],
    length: usize,
    checkpoints: usize,
) -> Result<PuzzleString, AutomatonError> {
    debug_assert!(checkpoints >= 1, "every string ends with a checkpoint");

    automaton.reset();

    let drawn: Vec<Symbol> = (0..length)
        .map(|_| letters[rng.gen_range(0..letters.len())])
        .collect();

    let mut boundaries: Vec<usize> = (0..length).collect();
    boundaries.shuffle(rng);
    let mut checked: HashSet<usize> = boundaries
        .into_iter()
        .take(checkpoints.saturating_sub(1))
        .collect();
    checked.insert(length);

    let mut feed: SymbolSequence = drawn.iter().copied().collect();
    let mut symbols = Vec::with_capacity(length + checked.len());

    for (index, &letter) in drawn.iter().enumerate() {
        if checked.contains(&index) {
            symbols.push(Symbol::checkpoint(automaton.is_accepting()));
        }
        symbols.push(letter);
        automaton.transition(&mut feed)?;
    }

    let accepted = automaton.is_accepting();
    symbols.push(Symbol::checkpoint(accepted));

    Ok(PuzzleString {
        sequence: symbols.into_iter().collect(),
        text: drawn.iter().map(Symbol::to_string).collect(),
        accepted,
    })
}
