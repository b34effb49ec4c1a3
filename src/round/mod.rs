//! Judging shell and session models.
//!
//! A round plays a batch of puzzle strings through the player's automaton
//! and judges every checkpoint assertion against the automaton's actual
//! acceptance. This module is the model side of that loop - rendering,
//! input and animation stay external.

use crate::automaton::Automaton;
use crate::core::{AutomatonError, StateId, SymbolSequence};
use crate::generator::BatchConfig;
use serde::{Deserialize, Serialize};

/// Result of consuming one symbol during a round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepOutcome {
    /// A plain letter moved the automaton to `state`; nothing to judge.
    Moved {
        /// The state the automaton landed in.
        state: StateId,
    },

    /// A checkpoint asserted `expected` while the automaton's acceptance
    /// was `actual`.
    Asserted {
        /// The polarity recorded in the string when it was generated.
        expected: bool,
        /// The acceptance of the automaton the round is judged against.
        actual: bool,
    },
}

impl StepOutcome {
    /// Whether this step counts as correct. Moves always do; assertions
    /// are correct when the recorded polarity matches the acceptance.
    pub fn is_correct(&self) -> bool {
        match self {
            StepOutcome::Moved { .. } => true,
            StepOutcome::Asserted { expected, actual } => expected == actual,
        }
    }
}

/// The judged outcome of one puzzle string.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RoundReport {
    steps: Vec<StepOutcome>,
    error_count: usize,
}

impl RoundReport {
    /// Every step of the run, in consumption order.
    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// The number of checkpoint assertions that did not match.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether every assertion matched.
    pub fn is_perfect(&self) -> bool {
        self.error_count == 0
    }
}

/// Run one puzzle string through `automaton` and judge every checkpoint.
///
/// The automaton is reset, the sequence is drained symbol by symbol, and
/// each assertion is compared against [`Automaton::is_accepting`] at that
/// step. The per-string judgement is what a presentation driver animates;
/// this function is the same loop with the animation stripped out.
///
/// # Errors
///
/// Propagates [`AutomatonError::NoTransition`] if the automaton's table is
/// missing an entry for a consumed letter - a player automaton must be
/// completed (see [`AutomatonBuilder`](crate::builder::AutomatonBuilder))
/// before a round starts.
///
/// # Example
///
/// ```rust
/// use automan::{run_string, Automaton, Symbol, SymbolSequence};
///
/// let mut automaton = Automaton::new(2, 0);
/// automaton.set_acceptance(1, true);
/// automaton.set_transition(0, Symbol::LetterA, 1);
/// automaton.set_transition(0, Symbol::LetterB, 0);
/// automaton.set_transition(1, Symbol::LetterA, 0);
/// automaton.set_transition(1, Symbol::LetterB, 1);
///
/// // "A+" asserts accepting after one A: correct for this automaton.
/// let sequence: SymbolSequence =
///     [Symbol::LetterA, Symbol::CheckAccept].into_iter().collect();
/// let report = run_string(&mut automaton, sequence).unwrap();
///
/// assert!(report.is_perfect());
/// assert_eq!(report.steps().len(), 2);
/// ```
pub fn run_string(
    automaton: &mut Automaton,
    sequence: SymbolSequence,
) -> Result<RoundReport, AutomatonError> {
    automaton.reset();

    let mut sequence = sequence;
    let mut steps = Vec::with_capacity(sequence.len());
    let mut error_count = 0;

    while !sequence.is_empty() {
        let outcome = match automaton.transition(&mut sequence)? {
            None => StepOutcome::Moved {
                state: automaton.current_state(),
            },
            Some(expected) => {
                let actual = automaton.is_accepting();
                if expected != actual {
                    error_count += 1;
                }
                StepOutcome::Asserted { expected, actual }
            }
        };
        steps.push(outcome);
    }

    Ok(RoundReport { steps, error_count })
}

/// Lives a player starts a game with.
pub const INITIAL_LIVES: u32 = 3;

/// The number of stages in a full game.
pub const STAGE_COUNT: usize = 5;

/// The player's remaining lives.
///
/// Starts at [`INITIAL_LIVES`]; each wrong assertion costs one, bottoming
/// out at zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Lives {
    remaining: u32,
}

impl Lives {
    /// Start with full lives.
    pub fn new() -> Self {
        Self {
            remaining: INITIAL_LIVES,
        }
    }

    /// Lives left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Lose one life; never goes below zero.
    pub fn damage(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Whether the player is still in the game.
    pub fn is_survived(&self) -> bool {
        self.remaining > 0
    }

    /// Refill to full, for a retry.
    pub fn reset(&mut self) {
        self.remaining = INITIAL_LIVES;
    }
}

impl Default for Lives {
    fn default() -> Self {
        Self::new()
    }
}

/// One stage of a game: its number, its generation settings, and the
/// mistakes made while playing it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Stage {
    number: usize,
    config: BatchConfig,
    error_count: usize,
}

impl Stage {
    /// Create a stage. Stages are numbered from 1.
    pub fn new(number: usize, config: BatchConfig) -> Self {
        Self {
            number,
            config,
            error_count: 0,
        }
    }

    /// The stage number, starting at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The generation settings for this stage's batch.
    pub fn config(&self) -> BatchConfig {
        self.config
    }

    /// Mistakes made so far in this stage.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Record a judged report into the stage tally.
    pub fn record(&mut self, report: &RoundReport) {
        self.error_count += report.error_count();
    }

    /// Whether the stage was cleared without a single mistake.
    pub fn is_perfect(&self) -> bool {
        self.error_count == 0
    }

    /// Whether this is the final stage of a full game.
    pub fn is_last(&self) -> bool {
        self.number >= STAGE_COUNT
    }
}
