//! Puzzle Round
//!
//! This example walks through one full round of the game loop:
//! sample a batch of puzzle strings, print them, then judge them against
//! a player-built automaton.
//!
//! Key concepts:
//! - Seeded randomness for reproducible rounds
//! - The balanced, deduplicated batch sampler
//! - Checkpoint judging via `run_string`
//!
//! Run with: cargo run --example puzzle_round

use automan::{run_string, AutomatonBuilder, BatchConfig, BatchSampler, Lives, Stage, Symbol};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("=== Automan Puzzle Round ===\n");

    // Seed once per batch; change the seed for a different round.
    let mut rng = StdRng::seed_from_u64(2024);

    let config = BatchConfig {
        string_count: 4,
        state_count: 4,
        length_range: (3, 6),
        checkpoint_range: (1, 2),
    };

    let mut sampler = BatchSampler::new(&mut rng, config);

    println!("Hidden automaton ({} states):", config.state_count);
    for state in sampler.automaton().states() {
        let marker = if state.is_accepting() { "+" } else { "-" };
        let a = sampler.automaton().destination(state.id(), Symbol::LetterA);
        let b = sampler.automaton().destination(state.id(), Symbol::LetterB);
        println!(
            "  state {}{}  A -> {:?}  B -> {:?}",
            state.id(),
            marker,
            a.unwrap(),
            b.unwrap()
        );
    }

    let strings = sampler.sample(&mut rng).expect("complete automaton");

    println!("\nGenerated strings:");
    for string in &strings {
        let outcome = if string.is_accepted() { "accept" } else { "reject" };
        println!("  {}  ({})", string, outcome);
    }

    // The player wires up their own guess. Here the guess is wrong on
    // purpose: a machine that accepts everything.
    let mut guess = AutomatonBuilder::new(2)
        .accepting(0)
        .accepting(1)
        .transition(0, Symbol::LetterA, 1)
        .transition(0, Symbol::LetterB, 0)
        .transition(1, Symbol::LetterA, 0)
        .transition(1, Symbol::LetterB, 1)
        .build()
        .expect("complete guess");

    let mut stage = Stage::new(1, config);
    let mut lives = Lives::new();

    println!("\nJudging against the player's guess:");
    for string in strings {
        let display = string.to_string();
        let report = run_string(&mut guess, string.into_sequence()).expect("complete guess");
        for _ in 0..report.error_count() {
            lives.damage();
        }
        stage.record(&report);
        println!(
            "  {}  {} wrong assertion(s), {} lives left",
            display,
            report.error_count(),
            lives.remaining()
        );
        if !lives.is_survived() {
            break;
        }
    }

    if lives.is_survived() {
        if stage.is_perfect() {
            println!("\nStage {} cleared perfectly!", stage.number());
        } else {
            println!(
                "\nStage {} cleared with {} mistake(s).",
                stage.number(),
                stage.error_count()
            );
        }
    } else {
        println!("\nGame over on stage {}.", stage.number());
    }
}
