//! Ordered candidate sets.

use indexmap::IndexSet;
use rover_core::Command;

/// An ordered, duplicate-free list of commands to try in the unknown slot.
///
/// Insertion order is priority order: when several candidates reproduce
/// the target, the one inserted first is the answer. Re-inserting a
/// command that is already present keeps its original rank, since a
/// later duplicate could never win the tie-break.
///
/// # Examples
///
/// ```
/// use rover_core::Command;
/// use rover_infer::CandidateSet;
///
/// let set: CandidateSet = [Command::TurnRight, Command::Forward, Command::TurnRight]
///     .into_iter()
///     .collect();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(0), Some(Command::TurnRight));
/// assert_eq!(set.rank(Command::Forward), Some(1));
///
/// assert_eq!(
///     CandidateSet::default().iter().collect::<Vec<_>>(),
///     Command::DEFAULT_ORDER.to_vec(),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    commands: IndexSet<Command>,
}

impl CandidateSet {
    /// Create an empty candidate set.
    ///
    /// An empty set is representable so callers can build one
    /// incrementally, but inference rejects it with
    /// [`InferError::EmptyCandidateSet`](crate::InferError::EmptyCandidateSet).
    pub fn empty() -> Self {
        Self {
            commands: IndexSet::new(),
        }
    }

    /// Append `command` at the lowest priority. Returns `false` if it
    /// was already present (its rank is unchanged).
    pub fn insert(&mut self, command: Command) -> bool {
        self.commands.insert(command)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The candidate at priority `rank` (0 is tried first).
    pub fn get(&self, rank: usize) -> Option<Command> {
        self.commands.get_index(rank).copied()
    }

    /// Priority rank of `command`, if present.
    pub fn rank(&self, command: Command) -> Option<usize> {
        self.commands.get_index_of(&command)
    }

    /// Iterate candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Command::DEFAULT_ORDER.into_iter().collect()
    }
}

impl FromIterator<Command> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut set = Self::empty();
        for command in iter {
            set.insert(command);
        }
        set
    }
}

impl From<&[Command]> for CandidateSet {
    fn from(commands: &[Command]) -> Self {
        commands.iter().copied().collect()
    }
}

impl<const N: usize> From<[Command; N]> for CandidateSet {
    fn from(commands: [Command; N]) -> Self {
        commands.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::Forward),
            Just(Command::Back),
            Just(Command::TurnLeft),
            Just(Command::TurnRight),
        ]
    }

    #[test]
    fn empty_set_is_empty() {
        let set = CandidateSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = CandidateSet::empty();
        assert!(set.insert(Command::Back));
        assert!(!set.insert(Command::Back));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_slice_and_array_agree() {
        let order = [Command::TurnLeft, Command::Forward];
        assert_eq!(CandidateSet::from(&order[..]), CandidateSet::from(order));
    }

    proptest! {
        #[test]
        fn first_occurrence_fixes_rank(cmds in prop::collection::vec(arb_command(), 0..16)) {
            let set: CandidateSet = cmds.iter().copied().collect();
            let mut expected: Vec<Command> = Vec::new();
            for c in &cmds {
                if !expected.contains(c) {
                    expected.push(*c);
                }
            }
            prop_assert_eq!(set.iter().collect::<Vec<_>>(), expected.clone());
            for (rank, c) in expected.iter().enumerate() {
                prop_assert_eq!(set.rank(*c), Some(rank));
            }
        }
    }
}
