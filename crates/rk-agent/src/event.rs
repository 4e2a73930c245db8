//! What a single step can produce.

use rk_board::Blocker;
use rk_core::{Cell, RookId};

/// A committed move.  `step` is the 0-based index of this move within the
/// rook's quota and only ever advances on commit.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveEvent {
    pub rook: RookId,
    pub step: u32,
    pub from: Cell,
    pub to:   Cell,
}

/// A rejected move: something stood on the path to `to`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BlockedEvent {
    pub rook:    RookId,
    pub from:    Cell,
    pub to:      Cell,
    pub blocker: Blocker,
}

/// A rook gave up its quota because finished rooks (or board edges) box it
/// in on all four sides.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SurroundedEvent {
    pub rook: RookId,
    pub at:   Cell,
}

/// Why a rook stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Finish {
    /// Reached its move quota.
    Completed,
    /// Exited early, boxed in by finished rooks.
    Surrounded,
}

/// Result of one [`Rook::step`][crate::Rook::step].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Moved(MoveEvent),
    Blocked(BlockedEvent),
    /// The step was blocked and the rook turned out to be boxed in.
    Surrounded(BlockedEvent, SurroundedEvent),
    /// The rook had already finished; nothing happened.
    Done,
}

impl StepOutcome {
    /// `true` if the rook's position changed.
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, StepOutcome::Moved(_))
    }
}
