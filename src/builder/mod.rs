//! Validated construction of automatons.
//!
//! The builder is the checked path to a simulation-ready automaton: it
//! proves the "every `(state, letter)` pair has a destination" invariant
//! before handing the machine over, so a driver that starts from a built
//! automaton can never hit
//! [`AutomatonError::NoTransition`](crate::core::AutomatonError::NoTransition).
//! A presentation layer that
//! lets the player wire transitions interactively collects the edits here
//! and freezes the machine with [`build`](AutomatonBuilder::build) when
//! the round starts.

mod error;

pub use error::BuildError;

use crate::automaton::Automaton;
use crate::core::{StateId, Symbol};
use std::collections::HashMap;

/// Builder for constructing automatons with a fluent API.
///
/// # Example
///
/// ```rust
/// use automan::{AutomatonBuilder, Symbol};
///
/// let automaton = AutomatonBuilder::new(2)
///     .accepting(1)
///     .transition(0, Symbol::LetterA, 1)
///     .transition(0, Symbol::LetterB, 0)
///     .transition(1, Symbol::LetterA, 0)
///     .transition(1, Symbol::LetterB, 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.state_count(), 2);
/// assert_eq!(automaton.initial_state(), 0);
/// ```
pub struct AutomatonBuilder {
    state_count: usize,
    initial: StateId,
    accepting: Vec<StateId>,
    transitions: HashMap<(StateId, Symbol), StateId>,
}

impl AutomatonBuilder {
    /// Create a builder for an automaton with `state_count` states.
    ///
    /// The initial state defaults to 0.
    pub fn new(state_count: usize) -> Self {
        Self {
            state_count,
            initial: 0,
            accepting: Vec::new(),
            transitions: HashMap::new(),
        }
    }

    /// Set the initial state.
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = state;
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: StateId) -> Self {
        self.accepting.push(state);
        self
    }

    /// Add a transition; a later call for the same pair replaces it.
    pub fn transition(mut self, from: StateId, symbol: Symbol, to: StateId) -> Self {
        self.transitions.insert((from, symbol), to);
        self
    }

    /// Build the automaton.
    ///
    /// # Errors
    ///
    /// - [`BuildError::NoStates`] if the state count is zero.
    /// - [`BuildError::StateOutOfRange`] if the initial state, an
    ///   accepting state, or a transition endpoint is out of range.
    /// - [`BuildError::CheckpointTransition`] if a transition is labeled
    ///   with a checkpoint marker instead of a plain letter.
    /// - [`BuildError::MissingTransition`] if any `(state, letter)` pair
    ///   over the plain alphabet has no destination.
    pub fn build(self) -> Result<Automaton, BuildError> {
        if self.state_count == 0 {
            return Err(BuildError::NoStates);
        }

        let check_range = |state: StateId| {
            if state < self.state_count {
                Ok(())
            } else {
                Err(BuildError::StateOutOfRange {
                    state,
                    state_count: self.state_count,
                })
            }
        };

        check_range(self.initial)?;
        for &state in &self.accepting {
            check_range(state)?;
        }
        for (&(from, symbol), &to) in &self.transitions {
            if !symbol.is_letter() {
                return Err(BuildError::CheckpointTransition { symbol });
            }
            check_range(from)?;
            check_range(to)?;
        }

        for state in 0..self.state_count {
            for &symbol in &Symbol::LETTERS {
                if !self.transitions.contains_key(&(state, symbol)) {
                    return Err(BuildError::MissingTransition { state, symbol });
                }
            }
        }

        Ok(Automaton::from_parts(
            self.state_count,
            self.initial,
            self.accepting,
            self.transitions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(builder: AutomatonBuilder) -> AutomatonBuilder {
        builder
            .transition(0, Symbol::LetterA, 1)
            .transition(0, Symbol::LetterB, 0)
            .transition(1, Symbol::LetterA, 0)
            .transition(1, Symbol::LetterB, 1)
    }

    #[test]
    fn builder_rejects_zero_states() {
        let result = AutomatonBuilder::new(0).build();
        assert_eq!(result.err(), Some(BuildError::NoStates));
    }

    #[test]
    fn builder_rejects_missing_transitions() {
        let result = AutomatonBuilder::new(2)
            .transition(0, Symbol::LetterA, 1)
            .build();
        assert!(matches!(
            result.err(),
            Some(BuildError::MissingTransition { .. })
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_states() {
        let result = complete(AutomatonBuilder::new(2)).accepting(5).build();
        assert_eq!(
            result.err(),
            Some(BuildError::StateOutOfRange {
                state: 5,
                state_count: 2
            })
        );

        let result = complete(AutomatonBuilder::new(2)).initial(2).build();
        assert_eq!(
            result.err(),
            Some(BuildError::StateOutOfRange {
                state: 2,
                state_count: 2
            })
        );
    }

    #[test]
    fn builder_rejects_checkpoint_labels() {
        let result = complete(AutomatonBuilder::new(2))
            .transition(0, Symbol::CheckAccept, 1)
            .build();
        assert_eq!(
            result.err(),
            Some(BuildError::CheckpointTransition {
                symbol: Symbol::CheckAccept
            })
        );
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = complete(AutomatonBuilder::new(2))
            .accepting(1)
            .build()
            .unwrap();

        assert_eq!(automaton.state_count(), 2);
        assert!(!automaton.states()[0].is_accepting());
        assert!(automaton.states()[1].is_accepting());
        assert_eq!(automaton.destination(0, Symbol::LetterA), Some(1));
    }

    #[test]
    fn later_transition_replaces_earlier() {
        let automaton = complete(AutomatonBuilder::new(2))
            .transition(0, Symbol::LetterA, 0)
            .build()
            .unwrap();
        assert_eq!(automaton.destination(0, Symbol::LetterA), Some(0));
    }
}
