//! Rover: infer a robot's missing instruction from where it ended up.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Rover sub-crates. For most users, adding `rover` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//!
//! // The first instruction was lost; the robot ended up at (0, -2).
//! let seq = InstructionSequence::parse(["???", "FORWARD", "FORWARD"]);
//! let target = Position::new(0, -2);
//!
//! let inferrer = Inferrer::default();
//! let result = inferrer.infer(&seq, 0, &CandidateSet::default(), target).unwrap();
//! assert_eq!(result, InferenceResult::Found(Command::TurnRight));
//! assert_eq!(
//!     result.message(target).to_string(),
//!     "The first instruction should be TURN RIGHT to reach the target 0,-2",
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rover-core` | Headings, positions, commands, token decoding |
//! | [`infer`] | `rover-infer` | Sequences, simulation, configuration, the inferrer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Headings, positions, and the command vocabulary (`rover-core`).
///
/// [`types::Heading`] carries the turn and displacement transforms;
/// [`types::Command`] and [`types::Instruction`] handle token decoding.
pub use rover_core as types;

/// Simulation and inference (`rover-infer`).
///
/// [`infer::Inferrer`] runs the candidate search configured by
/// [`infer::InferConfig`].
pub use rover_infer as infer;

/// Common imports for typical Rover usage.
///
/// ```rust
/// use rover::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rover_core::{Command, Heading, Instruction, Position, PLACEHOLDER};

    // Inference
    pub use rover_infer::{
        CandidateSet, InferenceResult, Inferrer, InstructionSequence, Message, TrialReport,
    };

    // Configuration
    pub use rover_infer::{BackMode, Evaluation, InferConfig, SlotMode, TokenPolicy};

    // Errors
    pub use rover_core::ParseCommandError;
    pub use rover_infer::{ConfigError, InferError};
}
