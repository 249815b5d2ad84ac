//! Brute-force inference of a single missing robot instruction.
//!
//! Given an [`InstructionSequence`] with one unknown slot, a
//! [`CandidateSet`] in priority order, and the robot's known final
//! [`Position`](rover_core::Position), the [`Inferrer`] substitutes each
//! candidate into the slot, re-simulates the whole sequence from the
//! origin, and reports the first candidate whose trajectory ends exactly
//! on the target.
//!
//! # Example
//!
//! ```
//! use rover_core::{Command, Position};
//! use rover_infer::{CandidateSet, InferenceResult, Inferrer, InstructionSequence};
//!
//! let seq = InstructionSequence::parse(["???", "FORWARD", "FORWARD"]);
//! let inferrer = Inferrer::default();
//! let result = inferrer
//!     .infer(&seq, 0, &CandidateSet::default(), Position::new(0, -2))
//!     .unwrap();
//! assert_eq!(result, InferenceResult::Found(Command::TurnRight));
//! ```
//!
//! # Configuration
//!
//! [`InferConfig`] selects how unrecognized tokens are treated
//! ([`TokenPolicy`]), whether the candidate overwrites or is inserted at
//! the slot ([`SlotMode`]), what `BACK` means ([`BackMode`]), and whether
//! trials run on worker threads ([`Evaluation`]). None of these affect
//! the tie-break: the earliest matching candidate always wins.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidates;
pub mod config;
pub mod error;
pub mod infer;
mod parallel;
pub mod report;
pub mod sequence;
pub mod simulate;

pub use candidates::CandidateSet;
pub use config::{BackMode, ConfigError, Evaluation, InferConfig, SlotMode, TokenPolicy};
pub use error::InferError;
pub use infer::{InferenceResult, Inferrer, TrialReport};
pub use report::Message;
pub use sequence::InstructionSequence;
pub use simulate::{simulate, SimulationState, TrialOutcome};
