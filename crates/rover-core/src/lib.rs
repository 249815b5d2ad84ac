//! Core types for the Rover instruction-inference workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cardinal [`Heading`] model and its turn/displacement transforms,
//! the integer [`Position`] lattice, and the closed [`Command`]
//! vocabulary together with its textual token encoding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;
pub mod position;

pub use command::{Command, Instruction, PLACEHOLDER};
pub use error::ParseCommandError;
pub use heading::Heading;
pub use position::Position;
