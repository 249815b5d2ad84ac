//! Cardinal headings and the transforms that act on them.
//!
//! The four headings form a cyclic group of order 4 in the fixed order
//! `East → South → West → North`. A right turn is `+1` step, a left turn
//! is `-1` step, and turning around is `+2` steps (equivalently `-2`).

use crate::position::Position;
use std::fmt;

/// One of the four cardinal directions a robot can face.
///
/// Displacement deltas follow a y-up convention:
///
/// | Heading | Delta |
/// |---------|-------|
/// | `East`  | `(+1, 0)` |
/// | `South` | `(0, -1)` |
/// | `West`  | `(-1, 0)` |
/// | `North` | `(0, +1)` |
///
/// # Examples
///
/// ```
/// use rover_core::{Heading, Position};
///
/// let h = Heading::East.turn_left();
/// assert_eq!(h, Heading::North);
/// assert_eq!(h.advance(Position::ORIGIN, true), Position::new(0, 1));
/// assert_eq!(h.advance(Position::ORIGIN, false), Position::new(0, -1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Heading {
    /// Facing `+x`. The reference heading every simulation starts from.
    #[default]
    East = 0,
    /// Facing `-y`.
    South = 1,
    /// Facing `-x`.
    West = 2,
    /// Facing `+y`.
    North = 3,
}

impl Heading {
    /// All headings in cyclic (clockwise) order, starting from `East`.
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// Position of this heading in [`Heading::ALL`].
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The heading at `n` steps clockwise from `East`, modulo 4.
    ///
    /// Negative values rotate counter-clockwise.
    pub fn from_ordinal(n: i32) -> Self {
        Self::ALL[n.rem_euclid(4) as usize]
    }

    fn rotate(self, steps: i32) -> Self {
        Self::from_ordinal(i32::from(self.ordinal()) + steps)
    }

    /// Rotate one step counter-clockwise.
    pub fn turn_left(self) -> Self {
        self.rotate(-1)
    }

    /// Rotate one step clockwise.
    pub fn turn_right(self) -> Self {
        self.rotate(1)
    }

    /// Rotate 180°.
    pub fn turn_back(self) -> Self {
        self.rotate(2)
    }

    /// Unit `(dx, dy)` for one step forward along this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
            Heading::North => (0, 1),
        }
    }

    /// Shift `pos` one unit along this heading, or against it when
    /// `forward` is false.
    pub fn advance(self, pos: Position, forward: bool) -> Position {
        let (dx, dy) = self.delta();
        if forward {
            pos.offset(dx, dy)
        } else {
            pos.offset(-dx, -dy)
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
            Heading::North => "NORTH",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![
            Just(Heading::East),
            Just(Heading::South),
            Just(Heading::West),
            Just(Heading::North),
        ]
    }

    // ── Fixed tables ────────────────────────────────────────────

    #[test]
    fn right_turns_follow_cyclic_order() {
        assert_eq!(Heading::East.turn_right(), Heading::South);
        assert_eq!(Heading::South.turn_right(), Heading::West);
        assert_eq!(Heading::West.turn_right(), Heading::North);
        assert_eq!(Heading::North.turn_right(), Heading::East);
    }

    #[test]
    fn left_turns_follow_reverse_order() {
        assert_eq!(Heading::East.turn_left(), Heading::North);
        assert_eq!(Heading::North.turn_left(), Heading::West);
        assert_eq!(Heading::West.turn_left(), Heading::South);
        assert_eq!(Heading::South.turn_left(), Heading::East);
    }

    #[test]
    fn deltas_are_unit_and_opposite_pairs_cancel() {
        for h in Heading::ALL {
            let (dx, dy) = h.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{h} delta is not a unit step");
            let (bx, by) = h.turn_back().delta();
            assert_eq!((dx + bx, dy + by), (0, 0));
        }
    }

    #[test]
    fn from_ordinal_wraps_both_ways() {
        assert_eq!(Heading::from_ordinal(4), Heading::East);
        assert_eq!(Heading::from_ordinal(-1), Heading::North);
        assert_eq!(Heading::from_ordinal(-6), Heading::West);
        for h in Heading::ALL {
            assert_eq!(Heading::from_ordinal(i32::from(h.ordinal())), h);
        }
    }

    #[test]
    fn default_is_east() {
        assert_eq!(Heading::default(), Heading::East);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn left_and_right_are_inverse(h in arb_heading()) {
            prop_assert_eq!(h.turn_right().turn_left(), h);
            prop_assert_eq!(h.turn_left().turn_right(), h);
        }

        #[test]
        fn turn_back_is_two_turns_either_way(h in arb_heading()) {
            prop_assert_eq!(h.turn_back(), h.turn_left().turn_left());
            prop_assert_eq!(h.turn_back(), h.turn_right().turn_right());
        }

        #[test]
        fn four_right_turns_close_the_cycle(h in arb_heading()) {
            prop_assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
        }

        #[test]
        fn forward_then_back_returns_home(
            h in arb_heading(),
            x in -1000i32..1000,
            y in -1000i32..1000,
        ) {
            let start = Position::new(x, y);
            prop_assert_eq!(h.advance(h.advance(start, true), false), start);
            prop_assert_eq!(h.advance(h.advance(start, false), true), start);
        }

        #[test]
        fn backward_equals_forward_after_turning_around(
            h in arb_heading(),
            x in -1000i32..1000,
            y in -1000i32..1000,
        ) {
            let start = Position::new(x, y);
            prop_assert_eq!(h.advance(start, false), h.turn_back().advance(start, true));
        }
    }
}
