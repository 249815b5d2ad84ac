//! Benchmark workloads for the Rover inferrer.
//!
//! - [`generate_commands`]: deterministic pseudo-random command listings
//! - [`planted_workload`]: a listing with a hidden first command and the
//!   target it produces

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rover_core::{Command, Position};
use rover_infer::{simulate, InferConfig, InstructionSequence};

/// Generate `len` commands from a simple multiplicative hash of `seed`.
///
/// Identical arguments always give identical listings.
pub fn generate_commands(len: usize, seed: u64) -> Vec<Command> {
    (0..len as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            Command::DEFAULT_ORDER[((h >> 33) % 4) as usize]
        })
        .collect()
}

/// A listing of `len` commands whose first command is replaced by the
/// placeholder, plus the target the original listing reaches.
///
/// The hidden command is the last entry of the default order, so a
/// sequential search must run every trial unless an earlier candidate
/// happens to coincide.
pub fn planted_workload(len: usize, seed: u64) -> (InstructionSequence, Position) {
    let mut commands = generate_commands(len.max(1), seed);
    commands[0] = Command::TurnRight;
    let truth = InstructionSequence::from_commands(commands.iter().copied());
    let target = simulate(truth.as_slice(), &InferConfig::default())
        .position()
        .unwrap_or(Position::ORIGIN);

    let mut tokens: Vec<&str> = commands.iter().map(|c| c.token()).collect();
    tokens[0] = rover_core::PLACEHOLDER;
    (InstructionSequence::parse(tokens), target)
}
