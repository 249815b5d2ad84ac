//! Inference configuration, validation, and error types.
//!
//! [`InferConfig`] is the constructor input for an
//! [`Inferrer`](crate::Inferrer). [`validate()`](InferConfig::validate)
//! checks structural invariants once, when the inferrer is built.

use std::error::Error;
use std::fmt;

use rover_core::Heading;

// ── Policies ───────────────────────────────────────────────────────

/// What to do with a token outside the command vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenPolicy {
    /// The trial that reaches the token ends as a non-match and the
    /// search moves on to the next candidate.
    #[default]
    Lenient,
    /// The whole call fails with
    /// [`InferError::MalformedSequence`](crate::InferError::MalformedSequence)
    /// before any trial runs.
    Strict,
    /// Unexecutable tokens, stray placeholders included, are skipped as
    /// no-ops and the trial carries on.
    Ignore,
}

/// How a candidate is placed into the unknown slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotMode {
    /// The candidate overwrites whatever occupies the slot.
    #[default]
    Replace,
    /// The candidate is inserted before the slot index, shifting the
    /// rest of the sequence right. For listings that omit the missing
    /// instruction entirely. The slot may equal the sequence length.
    Insert,
}

/// Meaning of the `BACK` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackMode {
    /// Move one unit against the current heading; heading unchanged.
    #[default]
    Reverse,
    /// Rotate 180° in place; position unchanged.
    TurnAround,
}

/// How candidate trials are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Trials run one after another and the search stops at the first
    /// match.
    #[default]
    Sequential,
    /// Trials are spread over scoped worker threads. Every trial runs;
    /// the lowest-ranked match is selected afterwards, so the result is
    /// identical to sequential evaluation.
    Parallel {
        /// Number of worker threads. Clamped to the candidate count.
        workers: usize,
    },
}

// ── InferConfig ────────────────────────────────────────────────────

/// Configuration for an [`Inferrer`](crate::Inferrer).
///
/// # Examples
///
/// ```
/// use rover_infer::{BackMode, Evaluation, InferConfig};
///
/// let config = InferConfig {
///     back_mode: BackMode::TurnAround,
///     evaluation: Evaluation::Parallel { workers: 2 },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
///
/// let broken = InferConfig {
///     evaluation: Evaluation::Parallel { workers: 0 },
///     ..Default::default()
/// };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InferConfig {
    /// Handling of unrecognized tokens. Default: [`TokenPolicy::Lenient`].
    pub token_policy: TokenPolicy,
    /// Candidate placement. Default: [`SlotMode::Replace`].
    pub slot_mode: SlotMode,
    /// Meaning of `BACK`. Default: [`BackMode::Reverse`].
    pub back_mode: BackMode,
    /// Heading at the start of every trial. Default: [`Heading::East`].
    pub start_heading: Heading,
    /// Trial scheduling. Default: [`Evaluation::Sequential`].
    pub evaluation: Evaluation,
}

impl InferConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Evaluation::Parallel { workers: 0 } = self.evaluation {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`InferConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Parallel evaluation was requested with zero workers.
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "parallel evaluation needs at least one worker"),
        }
    }
}

impl Error for ConfigError {}
