//! Integer lattice positions.

use std::fmt;

/// A point on the unbounded integer plane.
///
/// `x` grows eastward and `y` grows northward. Coordinates may go
/// negative; there are no bounds.
///
/// # Examples
///
/// ```
/// use rover_core::Position;
///
/// let p = Position::new(2, -3);
/// assert_eq!(p.offset(-2, 3), Position::ORIGIN);
/// assert_eq!(Position::from((2, -3)), p);
/// assert_eq!(p.to_string(), "2,-3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// East-west coordinate.
    pub x: i32,
    /// North-south coordinate.
    pub y: i32,
}

impl Position {
    /// The starting point of every simulation.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Widened to `u64`: opposite corners of the `i32` plane are
    /// `2 * (2^32 - 1)` apart.
    pub fn manhattan(self, other: Position) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
