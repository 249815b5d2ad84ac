//! The command vocabulary and its token encoding.

use crate::error::ParseCommandError;
use std::fmt;
use std::str::FromStr;

/// Token that marks the unknown slot in an instruction listing.
pub const PLACEHOLDER: &str = "???";

/// One instruction from the closed robot vocabulary.
///
/// `Forward` and `Back` move the robot; `TurnLeft` and `TurnRight`
/// rotate it in place. The textual form used for parsing and display
/// is the literal token (`"FORWARD"`, `"BACK"`, `"TURN LEFT"`,
/// `"TURN RIGHT"`).
///
/// # Examples
///
/// ```
/// use rover_core::Command;
///
/// let cmd: Command = "TURN LEFT".parse().unwrap();
/// assert_eq!(cmd, Command::TurnLeft);
/// assert_eq!(cmd.to_string(), "TURN LEFT");
/// assert!("turn left".parse::<Command>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// Move one unit along the current heading.
    Forward,
    /// Move one unit against the current heading.
    Back,
    /// Rotate 90° counter-clockwise.
    TurnLeft,
    /// Rotate 90° clockwise.
    TurnRight,
}

impl Command {
    /// The reference candidate order used when a caller does not
    /// supply one.
    pub const DEFAULT_ORDER: [Command; 4] = [
        Command::Forward,
        Command::Back,
        Command::TurnLeft,
        Command::TurnRight,
    ];

    /// The literal token for this command.
    pub fn token(self) -> &'static str {
        match self {
            Command::Forward => "FORWARD",
            Command::Back => "BACK",
            Command::TurnLeft => "TURN LEFT",
            Command::TurnRight => "TURN RIGHT",
        }
    }

    /// Decode a literal token, returning `None` for anything outside
    /// the vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "FORWARD" => Some(Command::Forward),
            "BACK" => Some(Command::Back),
            "TURN LEFT" => Some(Command::TurnLeft),
            "TURN RIGHT" => Some(Command::TurnRight),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseCommandError {
            token: s.to_owned(),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One slot of a decoded instruction listing.
///
/// Decoding never fails: tokens outside the vocabulary are kept as
/// [`Instruction::Unrecognized`] so that the caller's token policy can
/// decide later whether they poison the whole listing or just the
/// trials that reach them.
///
/// # Examples
///
/// ```
/// use rover_core::{Command, Instruction};
///
/// assert_eq!(Instruction::parse("BACK"), Instruction::Known(Command::Back));
/// assert_eq!(Instruction::parse("???"), Instruction::Placeholder);
/// assert_eq!(
///     Instruction::parse("JUMP"),
///     Instruction::Unrecognized("JUMP".into()),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// A command from the vocabulary.
    Known(Command),
    /// The [`PLACEHOLDER`] token.
    Placeholder,
    /// Any other token, verbatim.
    Unrecognized(String),
}

impl Instruction {
    /// Decode one token.
    pub fn parse(token: &str) -> Self {
        if token == PLACEHOLDER {
            return Instruction::Placeholder;
        }
        match Command::from_token(token) {
            Some(cmd) => Instruction::Known(cmd),
            None => Instruction::Unrecognized(token.to_owned()),
        }
    }

    /// The command in this slot, if it holds one.
    pub fn command(&self) -> Option<Command> {
        match self {
            Instruction::Known(cmd) => Some(*cmd),
            _ => None,
        }
    }
}

impl From<Command> for Instruction {
    fn from(cmd: Command) -> Self {
        Instruction::Known(cmd)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Known(cmd) => f.write_str(cmd.token()),
            Instruction::Placeholder => f.write_str(PLACEHOLDER),
            Instruction::Unrecognized(token) => f.write_str(token),
        }
    }
}
