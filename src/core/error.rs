//! Simulator error types.

use crate::core::symbol::Symbol;
use thiserror::Error;

/// Errors that can occur while simulating an automaton.
///
/// Both variants indicate a caller error rather than a recoverable runtime
/// condition: a driver that checks `is_empty` before each step never sees
/// `EmptySequence`, and an automaton with a complete transition table
/// never produces `NoTransition`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum AutomatonError {
    /// A pop or peek was attempted on an exhausted symbol sequence.
    #[error("the symbol sequence is empty")]
    EmptySequence,

    /// The transition table has no entry for the current state and letter.
    #[error("no transition from state {state} on '{symbol}'")]
    NoTransition {
        /// The state the automaton was in when the lookup failed.
        state: usize,
        /// The plain letter that had no destination.
        symbol: Symbol,
    },
}
