//! The brute-force instruction inferrer.

use rover_core::{Command, Position};

use crate::candidates::CandidateSet;
use crate::config::{ConfigError, Evaluation, InferConfig, TokenPolicy};
use crate::error::InferError;
use crate::parallel;
use crate::report::Message;
use crate::sequence::InstructionSequence;
use crate::simulate::{simulate, TrialOutcome};

/// Outcome of one inference call.
///
/// `NotFound` is a successful answer ("no candidate in the set works"),
/// not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InferenceResult {
    /// The highest-priority candidate that reproduces the target.
    Found(Command),
    /// No candidate reproduces the target.
    NotFound,
}

impl InferenceResult {
    /// The inferred command, if any.
    pub fn command(self) -> Option<Command> {
        match self {
            InferenceResult::Found(cmd) => Some(cmd),
            InferenceResult::NotFound => None,
        }
    }

    /// Whether a candidate was found.
    pub fn is_found(self) -> bool {
        matches!(self, InferenceResult::Found(_))
    }

    /// Human-readable rendering of this result for `target`.
    pub fn message(self, target: Position) -> Message {
        Message::new(self, target)
    }
}

/// Record of one candidate's trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialReport {
    /// The command substituted into the slot.
    pub candidate: Command,
    /// How the trial ended.
    pub outcome: TrialOutcome,
}

impl TrialReport {
    /// Whether this trial completed exactly on `target`.
    pub fn matches(&self, target: Position) -> bool {
        self.outcome.reaches(target)
    }
}

/// Infers the missing instruction by simulating every candidate.
///
/// Each call is a pure computation: no state survives between calls
/// and identical arguments always give identical results.
///
/// # Examples
///
/// ```
/// use rover_core::{Command, Position};
/// use rover_infer::{InferenceResult, Inferrer, InstructionSequence};
///
/// let seq = InstructionSequence::parse(["???", "TURN LEFT", "TURN LEFT", "TURN LEFT"]);
/// let result = Inferrer::default()
///     .infer_first(&seq, Position::new(99, 99))
///     .unwrap();
/// assert_eq!(result, InferenceResult::NotFound);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Inferrer {
    config: InferConfig,
}

impl Inferrer {
    /// Create an inferrer after validating `config`.
    pub fn new(config: InferConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &InferConfig {
        &self.config
    }

    /// Find the first candidate that, placed at `unknown_index`, makes
    /// the trajectory end on `target`.
    ///
    /// Candidates are tried in the set's priority order and the search
    /// stops at the first match. Fails with
    /// [`InferError::InvalidSlot`] if the index is out of range,
    /// [`InferError::EmptyCandidateSet`] if there are no candidates, and
    /// [`InferError::MalformedSequence`] under a strict token policy.
    pub fn infer(
        &self,
        sequence: &InstructionSequence,
        unknown_index: usize,
        candidates: &CandidateSet,
        target: Position,
    ) -> Result<InferenceResult, InferError> {
        self.preflight(sequence, unknown_index, candidates)?;
        let result = match self.config.evaluation {
            Evaluation::Sequential => self.search(sequence, unknown_index, candidates, target)?,
            Evaluation::Parallel { workers } => {
                parallel::search(self, sequence, unknown_index, candidates, target, workers)?
            }
        };
        tracing::debug!(?result, %target, slot = unknown_index, "inference finished");
        Ok(result)
    }

    /// [`infer`](Self::infer) with the unknown slot at index 0 and the
    /// default candidate order.
    pub fn infer_first(
        &self,
        sequence: &InstructionSequence,
        target: Position,
    ) -> Result<InferenceResult, InferError> {
        self.infer(sequence, 0, &CandidateSet::default(), target)
    }

    /// Run every candidate's trial without stopping at the first match.
    ///
    /// Reports come back in priority order. Useful for diagnostics: the
    /// answer [`infer`](Self::infer) would give is the first report that
    /// [`matches`](TrialReport::matches) the target.
    pub fn trials(
        &self,
        sequence: &InstructionSequence,
        unknown_index: usize,
        candidates: &CandidateSet,
        target: Position,
    ) -> Result<Vec<TrialReport>, InferError> {
        self.preflight(sequence, unknown_index, candidates)?;
        candidates
            .iter()
            .map(|candidate| self.run_trial(sequence, unknown_index, candidate, target))
            .collect()
    }

    fn preflight(
        &self,
        sequence: &InstructionSequence,
        unknown_index: usize,
        candidates: &CandidateSet,
    ) -> Result<(), InferError> {
        sequence.check_slot(unknown_index, self.config.slot_mode)?;
        if candidates.is_empty() {
            return Err(InferError::EmptyCandidateSet);
        }
        if self.config.token_policy == TokenPolicy::Strict {
            if let Some((index, token)) =
                sequence.first_unrecognized(unknown_index, self.config.slot_mode)
            {
                return Err(InferError::MalformedSequence { index, token });
            }
        }
        Ok(())
    }

    fn search(
        &self,
        sequence: &InstructionSequence,
        unknown_index: usize,
        candidates: &CandidateSet,
        target: Position,
    ) -> Result<InferenceResult, InferError> {
        for candidate in candidates.iter() {
            if self
                .run_trial(sequence, unknown_index, candidate, target)?
                .matches(target)
            {
                return Ok(InferenceResult::Found(candidate));
            }
        }
        Ok(InferenceResult::NotFound)
    }

    pub(crate) fn run_trial(
        &self,
        sequence: &InstructionSequence,
        unknown_index: usize,
        candidate: Command,
        target: Position,
    ) -> Result<TrialReport, InferError> {
        let trial = sequence.with_slot(unknown_index, candidate, self.config.slot_mode)?;
        let outcome = simulate(&trial, &self.config);
        match &outcome {
            TrialOutcome::Reached(end) => tracing::debug!(
                candidate = %candidate,
                end = %end.position,
                distance = end.position.manhattan(target),
                matched = end.position == target,
                "trial finished"
            ),
            TrialOutcome::Aborted { index, token } => tracing::debug!(
                candidate = %candidate,
                index,
                token = token.as_str(),
                "trial aborted"
            ),
        }
        Ok(TrialReport { candidate, outcome })
    }
}
