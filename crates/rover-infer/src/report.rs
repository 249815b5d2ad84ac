//! Human-readable rendering of inference results.

use std::fmt;

use rover_core::Position;

use crate::infer::InferenceResult;

/// Display adapter pairing an [`InferenceResult`] with its target.
///
/// The wording is fixed: a found command is always reported as "the
/// first instruction", whatever slot it was inferred for.
///
/// # Examples
///
/// ```
/// use rover_core::{Command, Position};
/// use rover_infer::{InferenceResult, Message};
///
/// let found = Message::new(InferenceResult::Found(Command::TurnLeft), Position::new(0, 2));
/// assert_eq!(
///     found.to_string(),
///     "The first instruction should be TURN LEFT to reach the target 0,2",
/// );
///
/// let missing = InferenceResult::NotFound.message(Position::new(99, 99));
/// assert_eq!(missing.to_string(), "No valid instruction found to reach the target.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    result: InferenceResult,
    target: Position,
}

impl Message {
    /// Pair `result` with the `target` it was computed for.
    pub fn new(result: InferenceResult, target: Position) -> Self {
        Self { result, target }
    }

    /// The wrapped result.
    pub fn result(&self) -> InferenceResult {
        self.result
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            InferenceResult::Found(cmd) => write!(
                f,
                "The first instruction should be {cmd} to reach the target {}",
                self.target
            ),
            InferenceResult::NotFound => {
                f.write_str("No valid instruction found to reach the target.")
            }
        }
    }
}
