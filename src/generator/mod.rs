//! Procedural generation of automatons and puzzle strings.
//!
//! Generation happens in three layers:
//! - [`random_automaton`] builds a DFA whose transition table covers every
//!   state as a destination at least once
//! - [`random_string`] draws a plain-letter string, simulates it, and
//!   embeds checkpoint markers recording the acceptance at each boundary
//! - [`BatchSampler`] drives both under a bounded retry loop to produce a
//!   balanced, deduplicated batch of strings for one round
//!
//! All randomness comes from the caller's [`rand::Rng`]; seed it once per
//! batch for reproducible rounds.

mod automaton;
mod batch;
mod string;

pub use automaton::random_automaton;
pub use batch::{sample, BatchConfig, BatchSampler, MAX_ATTEMPTS};
pub use string::{random_string, PuzzleString};
