//! Reference inference scenarios.
//!
//! Each [`Scenario`] bundles a token listing, slot, candidate order,
//! configuration, target, and the expected answer. The expected answers
//! are derived from the y-up delta table, not copied from any listing's
//! commentary.

use rover_core::{Command, Position};
use rover_infer::{
    BackMode, CandidateSet, InferConfig, InferError, InferenceResult, Inferrer,
    InstructionSequence, SlotMode,
};

/// A worked inference example.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub tokens: Vec<&'static str>,
    pub unknown_index: usize,
    pub candidates: Vec<Command>,
    pub config: InferConfig,
    pub target: Position,
    pub expected: InferenceResult,
}

impl Scenario {
    /// A default-config scenario with the slot at 0 and default order.
    pub fn new(
        name: &'static str,
        tokens: &[&'static str],
        target: (i32, i32),
        expected: InferenceResult,
    ) -> Self {
        Self {
            name,
            tokens: tokens.to_vec(),
            unknown_index: 0,
            candidates: Command::DEFAULT_ORDER.to_vec(),
            config: InferConfig::default(),
            target: target.into(),
            expected,
        }
    }

    pub fn with_config(mut self, config: InferConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_candidates(mut self, candidates: &[Command]) -> Self {
        self.candidates = candidates.to_vec();
        self
    }

    pub fn sequence(&self) -> InstructionSequence {
        InstructionSequence::parse(self.tokens.iter().copied())
    }

    pub fn candidate_set(&self) -> CandidateSet {
        CandidateSet::from(&self.candidates[..])
    }

    /// Run the scenario through a fresh inferrer.
    pub fn run(&self) -> Result<InferenceResult, InferError> {
        let inferrer = Inferrer::new(self.config.clone())
            .unwrap_or_else(|e| panic!("scenario {}: bad config: {e}", self.name));
        inferrer.infer(
            &self.sequence(),
            self.unknown_index,
            &self.candidate_set(),
            self.target,
        )
    }
}

/// The worked examples every configuration of the inferrer must agree on.
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "forward-left-forward",
            &["???", "FORWARD", "TURN LEFT", "FORWARD"],
            (0, 1),
            InferenceResult::Found(Command::Back),
        ),
        Scenario::new(
            "three-left-turns-unreachable",
            &["???", "TURN LEFT", "TURN LEFT", "TURN LEFT"],
            (99, 99),
            InferenceResult::NotFound,
        ),
        Scenario::new(
            "right-then-two-forwards",
            &["???", "FORWARD", "FORWARD"],
            (0, -2),
            InferenceResult::Found(Command::TurnRight),
        ),
        Scenario::new(
            "left-then-two-forwards",
            &["TURN LEFT", "FORWARD", "FORWARD"],
            (0, 2),
            InferenceResult::Found(Command::TurnLeft),
        ),
        Scenario::new(
            "prepend-left-cannot-reach",
            &["TURN LEFT", "FORWARD", "FORWARD"],
            (0, 2),
            InferenceResult::NotFound,
        )
        .with_config(InferConfig {
            slot_mode: SlotMode::Insert,
            back_mode: BackMode::TurnAround,
            ..Default::default()
        }),
        Scenario::new(
            "prepend-forward-before-right-turn",
            &["TURN RIGHT", "FORWARD", "FORWARD"],
            (1, -2),
            InferenceResult::Found(Command::Forward),
        )
        .with_config(InferConfig {
            slot_mode: SlotMode::Insert,
            back_mode: BackMode::TurnAround,
            ..Default::default()
        })
        .with_candidates(&[
            Command::Forward,
            Command::TurnLeft,
            Command::TurnRight,
            Command::Back,
        ]),
        Scenario::new(
            "back-as-turn-around",
            &["???", "FORWARD"],
            (-1, 0),
            InferenceResult::Found(Command::Back),
        )
        .with_config(InferConfig {
            back_mode: BackMode::TurnAround,
            ..Default::default()
        }),
        Scenario::new(
            "back-as-reverse-cannot-reach",
            &["???", "FORWARD"],
            (-1, 0),
            InferenceResult::NotFound,
        ),
    ]
}
