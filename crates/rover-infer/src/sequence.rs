//! Instruction sequences and trial construction.

use std::fmt;

use rover_core::{Command, Instruction};
use smallvec::SmallVec;

use crate::config::SlotMode;
use crate::error::InferError;

/// Inline storage for a decoded instruction listing.
///
/// Listings are short in practice; up to eight instructions stay on the
/// stack and longer ones spill to the heap transparently.
pub type Instructions = SmallVec<[Instruction; 8]>;

/// An ordered instruction listing with one slot to be inferred.
///
/// The sequence itself does not record which slot is unknown; the slot
/// index is passed to every inference call so the same listing can be
/// tried at different positions. Trials never mutate the sequence:
/// [`with_slot`](Self::with_slot) returns a fresh copy.
///
/// # Examples
///
/// ```
/// use rover_core::{Command, Instruction};
/// use rover_infer::{InstructionSequence, SlotMode};
///
/// let seq = InstructionSequence::parse(["???", "FORWARD"]);
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.get(0), Some(&Instruction::Placeholder));
///
/// let trial = seq.with_slot(0, Command::Back, SlotMode::Replace).unwrap();
/// assert_eq!(trial[0], Instruction::Known(Command::Back));
/// assert_eq!(seq.to_string(), "[???, FORWARD]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionSequence {
    instructions: Instructions,
}

impl InstructionSequence {
    /// Build a sequence from decoded instructions.
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            instructions: instructions.into_iter().collect(),
        }
    }

    /// Decode a sequence from literal tokens. Never fails; see
    /// [`Instruction::parse`].
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(tokens.into_iter().map(|t| Instruction::parse(t.as_ref())))
    }

    /// Build a sequence containing only known commands.
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        Self::new(commands.into_iter().map(Instruction::Known))
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the sequence has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// All instructions in order.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Check that `index` names a valid slot under `mode`.
    ///
    /// [`SlotMode::Replace`] needs `index < len`; [`SlotMode::Insert`]
    /// also accepts `index == len` (append).
    pub fn check_slot(&self, index: usize, mode: SlotMode) -> Result<(), InferError> {
        let limit = match mode {
            SlotMode::Replace => self.len(),
            SlotMode::Insert => self.len() + 1,
        };
        if index < limit {
            Ok(())
        } else {
            Err(InferError::InvalidSlot {
                index,
                len: self.len(),
            })
        }
    }

    /// First position outside the unknown slot that does not hold a
    /// known command, with its token.
    ///
    /// Under [`SlotMode::Replace`] the slot's own content is ignored
    /// because every trial overwrites it. A stray placeholder anywhere
    /// else counts as unrecognized.
    pub fn first_unrecognized(&self, slot: usize, mode: SlotMode) -> Option<(usize, String)> {
        self.instructions
            .iter()
            .enumerate()
            .filter(|&(i, _)| !(mode == SlotMode::Replace && i == slot))
            .find(|(_, instr)| instr.command().is_none())
            .map(|(i, instr)| (i, instr.to_string()))
    }

    /// A trial copy with `candidate` placed at `slot`.
    pub fn with_slot(
        &self,
        slot: usize,
        candidate: Command,
        mode: SlotMode,
    ) -> Result<Instructions, InferError> {
        self.check_slot(slot, mode)?;
        let mut trial = self.instructions.clone();
        match mode {
            SlotMode::Replace => trial[slot] = Instruction::Known(candidate),
            SlotMode::Insert => trial.insert(slot, Instruction::Known(candidate)),
        }
        Ok(trial)
    }
}

impl FromIterator<Command> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::from_commands(iter)
    }
}

impl FromIterator<Instruction> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{instr}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(tokens: &[&str]) -> InstructionSequence {
        InstructionSequence::parse(tokens.iter().copied())
    }

    #[test]
    fn replace_keeps_length_and_other_slots() {
        let s = seq(&["FORWARD", "???", "TURN LEFT"]);
        let trial = s.with_slot(1, Command::TurnRight, SlotMode::Replace).unwrap();
        assert_eq!(trial.len(), 3);
        assert_eq!(trial[0], Instruction::Known(Command::Forward));
        assert_eq!(trial[1], Instruction::Known(Command::TurnRight));
        assert_eq!(trial[2], Instruction::Known(Command::TurnLeft));
        // The source sequence is untouched.
        assert_eq!(s.get(1), Some(&Instruction::Placeholder));
    }

    #[test]
    fn insert_shifts_the_tail() {
        let s = seq(&["TURN LEFT", "FORWARD"]);
        let trial = s.with_slot(0, Command::Back, SlotMode::Insert).unwrap();
        assert_eq!(trial.len(), 3);
        assert_eq!(trial[0], Instruction::Known(Command::Back));
        assert_eq!(trial[1], Instruction::Known(Command::TurnLeft));
    }

    #[test]
    fn insert_accepts_append_position() {
        let s = seq(&["FORWARD"]);
        let trial = s.with_slot(1, Command::TurnLeft, SlotMode::Insert).unwrap();
        assert_eq!(trial[1], Instruction::Known(Command::TurnLeft));
    }

    #[test]
    fn slot_bounds_depend_on_mode() {
        let s = seq(&["???", "FORWARD", "BACK", "FORWARD"]);
        assert!(s.check_slot(3, SlotMode::Replace).is_ok());
        assert_eq!(
            s.check_slot(4, SlotMode::Replace),
            Err(InferError::InvalidSlot { index: 4, len: 4 })
        );
        assert!(s.check_slot(4, SlotMode::Insert).is_ok());
        assert_eq!(
            s.check_slot(5, SlotMode::Insert),
            Err(InferError::InvalidSlot { index: 5, len: 4 })
        );
    }

    #[test]
    fn empty_sequence_has_no_replace_slot() {
        let s = InstructionSequence::default();
        assert!(s.check_slot(0, SlotMode::Replace).is_err());
        assert!(s.check_slot(0, SlotMode::Insert).is_ok());
    }

    #[test]
    fn first_unrecognized_skips_replaced_slot_only() {
        let s = seq(&["JUMP", "FORWARD", "???"]);
        assert_eq!(
            s.first_unrecognized(0, SlotMode::Replace),
            Some((2, "???".to_string()))
        );
        assert_eq!(
            s.first_unrecognized(2, SlotMode::Replace),
            Some((0, "JUMP".to_string()))
        );
        assert_eq!(
            s.first_unrecognized(0, SlotMode::Insert),
            Some((0, "JUMP".to_string()))
        );
        assert_eq!(seq(&["???", "BACK"]).first_unrecognized(0, SlotMode::Replace), None);
    }

    #[test]
    fn collects_from_commands() {
        let s: InstructionSequence = [Command::Forward, Command::TurnLeft].into_iter().collect();
        assert_eq!(s.to_string(), "[FORWARD, TURN LEFT]");
    }
}
