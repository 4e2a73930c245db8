//! End-of-run summary.

use std::time::Duration;

use rk_agent::{Finish, Rook};
use rk_board::Board;
use rk_core::{Cell, RookId};

/// Final state of one rook.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RookSummary {
    pub rook:     RookId,
    pub position: Cell,
    pub moves:    u32,
    /// `None` if the rook never started (the run was aborted before the
    /// gate opened).
    pub finish:   Option<Finish>,
}

impl RookSummary {
    pub fn of(rook: &Rook, board: &Board) -> Self {
        Self {
            rook:     rook.id(),
            position: board.position(rook.id()),
            moves:    rook.moves(),
            finish:   rook.finish(),
        }
    }
}

/// Result of [`Sim::run`][crate::Sim::run], one summary per rook in
/// `RookId` order.
#[derive(Clone, Debug)]
pub struct SimReport {
    pub rooks:   Vec<RookSummary>,
    pub elapsed: Duration,
}

impl SimReport {
    pub fn final_positions(&self) -> Vec<Cell> {
        self.rooks.iter().map(|r| r.position).collect()
    }

    /// `true` if no two rooks ended on the same cell.
    pub fn all_distinct(&self) -> bool {
        let mut cells = self.final_positions();
        cells.sort_unstable();
        cells.windows(2).all(|w| w[0] != w[1])
    }

    pub fn all_within(&self, field_size: i32) -> bool {
        self.rooks.iter().all(|r| r.position.within(field_size))
    }

    pub fn total_moves(&self) -> u64 {
        self.rooks.iter().map(|r| r.moves as u64).sum()
    }

    pub fn count(&self, finish: Finish) -> usize {
        self.rooks.iter().filter(|r| r.finish == Some(finish)).count()
    }
}
