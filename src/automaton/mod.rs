//! The DFA simulator.
//!
//! An [`Automaton`] owns a flat array of [`State`]s and an index-keyed
//! transition table, and consumes a symbol sequence one symbol at a time:
//! plain letters move the current-state cursor, checkpoint markers assert
//! the current acceptance without moving it.
//!
//! Simulation is strictly sequential and single-threaded; the design
//! assumes at most one mutation or simulation step in flight at any
//! instant, so no locking is involved.

mod machine;
mod state;

pub use machine::Automaton;
pub use state::State;
