//! Automan: the puzzle engine behind a DFA guessing game.
//!
//! A round of the game presents the player with an automaton and a batch
//! of generated strings. As each string runs through the machine, plain
//! letters (`A`, `B`) drive state transitions while embedded checkpoint
//! markers (`+`, `-`) assert that the automaton is currently accepting or
//! rejecting - the player's job is to have wired the automaton so every
//! assertion holds. This crate is the model core: the simulator, the
//! procedural generators, and the judging loop. Rendering, input and
//! animation are external collaborators consuming its outputs.
//!
//! # Core Concepts
//!
//! - **Symbol**: plain letters transition, checkpoint markers assert
//! - **Automaton**: a DFA with a current-state cursor, editable live
//! - **Generators**: random automatons with full destination coverage,
//!   and balanced, deduplicated batches of puzzle strings
//! - **Rounds**: judge a player's automaton against a batch
//!
//! # Example
//!
//! ```rust
//! use automan::{BatchConfig, BatchSampler, run_string};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Seed once per batch for reproducible rounds.
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let config = BatchConfig {
//!     string_count: 4,
//!     state_count: 4,
//!     length_range: (2, 5),
//!     checkpoint_range: (1, 2),
//! };
//!
//! let mut sampler = BatchSampler::new(&mut rng, config);
//! let strings = sampler.sample(&mut rng).unwrap();
//! assert_eq!(strings.len(), 4);
//!
//! // The sampler's own automaton satisfies every assertion it generated.
//! let mut automaton = sampler.automaton().clone();
//! for string in strings {
//!     let report = run_string(&mut automaton, string.into_sequence()).unwrap();
//!     assert!(report.is_perfect());
//! }
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod generator;
pub mod round;

// Re-export commonly used types
pub use automaton::{Automaton, State};
pub use builder::{AutomatonBuilder, BuildError};
pub use core::{AutomatonError, StateId, Symbol, SymbolSequence};
pub use generator::{
    random_automaton, random_string, sample, BatchConfig, BatchSampler, PuzzleString, MAX_ATTEMPTS,
};
pub use round::{run_string, Lives, RoundReport, Stage, StepOutcome, INITIAL_LIVES, STAGE_COUNT};
