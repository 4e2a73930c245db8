//! Board geometry: cells and axes.
//!
//! The board is implicit.  A cell is valid when both coordinates lie in
//! `0..=field_size`, so a `field_size` of 8 yields 9 cells per axis.

use std::fmt;

/// One of the two board axes.  A rook only ever changes one per move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// A grid cell.  Coordinates are signed so neighbour arithmetic at the board
/// edge never wraps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of `self` with the `axis` coordinate replaced by `value`.
    #[inline]
    pub fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Y => Self { y: value, ..self },
        }
    }

    /// `true` if both coordinates lie in `0..=field_size`.
    #[inline]
    pub fn within(self, field_size: i32) -> bool {
        (0..=field_size).contains(&self.x) && (0..=field_size).contains(&self.y)
    }

    /// The four orthogonal neighbours: +x, -x, +y, -y.  Some may lie off the
    /// board.
    pub fn neighbours(self) -> [Cell; 4] {
        [
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x, self.y - 1),
        ]
    }

    /// The axis along which a move from `self` to `target` travels.
    ///
    /// A differing x wins; otherwise the move is treated as vertical, which
    /// also covers the zero-displacement case.  Callers only ever build
    /// targets that differ in at most one axis.
    #[inline]
    pub fn travel_axis(self, target: Cell) -> Axis {
        if self.x != target.x { Axis::X } else { Axis::Y }
    }

    /// `true` if `other` lies on the segment travelled from `self` to
    /// `target`: start cell excluded, target cell included.
    pub fn segment_contains(self, target: Cell, other: Cell) -> bool {
        let axis = self.travel_axis(target);
        let fixed = match axis {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        };
        if other.get(fixed) != self.get(fixed) {
            return false;
        }
        let (from, to, at) = (self.get(axis), target.get(axis), other.get(axis));
        if from < to {
            from < at && at <= to
        } else {
            from > at && at >= to
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
