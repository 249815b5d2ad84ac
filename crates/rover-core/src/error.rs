//! Error types for token decoding.

use std::error::Error;
use std::fmt;

/// A token did not name any command in the closed vocabulary.
///
/// Matching is exact and case-sensitive, so `"forward"` and
/// `"TURN  LEFT"` are both rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCommandError {
    /// The offending token, verbatim.
    pub token: String,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized command token {:?}", self.token)
    }
}

impl Error for ParseCommandError {}
