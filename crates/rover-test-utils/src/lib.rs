//! Test utilities for Rover development.
//!
//! Provides the reference [`Scenario`] fixtures (the worked examples the
//! inferrer must reproduce) and proptest strategies for the core types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{reference_scenarios, Scenario};
