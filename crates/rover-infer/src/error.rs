//! Errors surfaced by [`Inferrer`](crate::Inferrer) calls.
//!
//! Only structural problems are errors. A search that finds no
//! matching candidate returns
//! [`InferenceResult::NotFound`](crate::InferenceResult::NotFound).

use std::error::Error;
use std::fmt;

/// Reasons an inference call could not run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InferError {
    /// The unknown-slot index is outside the sequence.
    InvalidSlot {
        /// The requested slot.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// The candidate set is empty.
    EmptyCandidateSet,
    /// A token outside the vocabulary appears in a non-slot position
    /// and the token policy is strict.
    MalformedSequence {
        /// Position of the first offending token.
        index: usize,
        /// The offending token, verbatim.
        token: String,
    },
    /// A parallel trial worker panicked.
    WorkerPanicked,
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlot { index, len } => {
                write!(f, "unknown slot {index} out of range for sequence of length {len}")
            }
            Self::EmptyCandidateSet => write!(f, "candidate set is empty"),
            Self::MalformedSequence { index, token } => {
                write!(f, "unrecognized token {token:?} at position {index}")
            }
            Self::WorkerPanicked => write!(f, "trial worker panicked"),
        }
    }
}

impl Error for InferError {}
