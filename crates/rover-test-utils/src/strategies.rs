//! Proptest strategies for Rover types.

use proptest::prelude::*;
use rover_core::{Command, Heading, Position};
use rover_infer::{BackMode, CandidateSet, InstructionSequence};

pub fn arb_heading() -> impl Strategy<Value = Heading> {
    prop_oneof![
        Just(Heading::East),
        Just(Heading::South),
        Just(Heading::West),
        Just(Heading::North),
    ]
}

pub fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Forward),
        Just(Command::Back),
        Just(Command::TurnLeft),
        Just(Command::TurnRight),
    ]
}

pub fn arb_back_mode() -> impl Strategy<Value = BackMode> {
    prop_oneof![Just(BackMode::Reverse), Just(BackMode::TurnAround)]
}

/// Positions within `radius` of the origin on both axes.
pub fn arb_position(radius: i32) -> impl Strategy<Value = Position> {
    (-radius..=radius, -radius..=radius).prop_map(|(x, y)| Position::new(x, y))
}

/// A non-empty sequence of known commands, up to `max_len` long.
pub fn arb_sequence(max_len: usize) -> impl Strategy<Value = InstructionSequence> {
    prop::collection::vec(arb_command(), 1..=max_len.max(1))
        .prop_map(InstructionSequence::from_commands)
}

/// A permutation of the full vocabulary.
pub fn arb_candidate_order() -> impl Strategy<Value = CandidateSet> {
    Just(Command::DEFAULT_ORDER.to_vec())
        .prop_shuffle()
        .prop_map(|order| CandidateSet::from(&order[..]))
}
