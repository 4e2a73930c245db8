//! Placement bootstrap: build a `Board` with pairwise-distinct start cells.
//!
//! # Usage
//!
//! ```rust
//! use rk_board::BoardBuilder;
//! use rk_core::{Cell, Consistency, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let mut builder = BoardBuilder::new(8, Consistency::Strict);
//! builder.place_at(Cell::new(0, 0)).unwrap();
//! builder.place_random(&mut rng);
//! let (board, keys) = builder.build();
//!
//! assert_eq!(board.len(), 2);
//! assert_eq!(keys.len(), 2);
//! ```

use rk_core::{Cell, Consistency, RandomInt, RkError, RkResult, RookId, SimConfig};
use tracing::trace;

use crate::{Board, SlotKey};

/// Append-only placement of rooks, in creation order.
///
/// Placement happens before any rook thread exists, so uniqueness is checked
/// against a plain `Vec` and needs no synchronisation.
pub struct BoardBuilder {
    field_size:  i32,
    consistency: Consistency,
    cells:       Vec<Cell>,
}

impl BoardBuilder {
    pub fn new(field_size: i32, consistency: Consistency) -> Self {
        Self { field_size, consistency, cells: Vec::new() }
    }

    /// Builder using the board shape and consistency mode of `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.field_size, config.consistency)
    }

    /// Cells placed so far, indexed by `RookId`.
    pub fn placed(&self) -> &[Cell] {
        &self.cells
    }

    /// Place the next rook on a uniformly random free cell.
    ///
    /// Redraws until the cell is free.  Terminates as long as the board has
    /// a free cell, which [`SimConfig::validate`] guarantees for every
    /// accepted rook count.
    pub fn place_random<R: RandomInt>(&mut self, rng: &mut R) -> RookId {
        let cell = loop {
            let candidate = Cell::new(
                rng.random_int(0, self.field_size),
                rng.random_int(0, self.field_size),
            );
            if !self.cells.contains(&candidate) {
                break candidate;
            }
        };
        self.push(cell)
    }

    /// Place the next rook on `cell`.
    pub fn place_at(&mut self, cell: Cell) -> RkResult<RookId> {
        if !cell.within(self.field_size) {
            return Err(RkError::OutOfBounds { cell, field_size: self.field_size });
        }
        if self.cells.contains(&cell) {
            return Err(RkError::CellOccupied(cell));
        }
        Ok(self.push(cell))
    }

    /// Freeze the registry.  Returns the board and one write key per rook,
    /// in `RookId` order.
    pub fn build(self) -> (Board, Vec<SlotKey>) {
        let keys = (0..self.cells.len() as u32)
            .map(|i| SlotKey::new(RookId(i)))
            .collect();
        let board = Board::new(self.field_size, self.consistency, &self.cells);
        (board, keys)
    }

    fn push(&mut self, cell: Cell) -> RookId {
        let id = RookId(self.cells.len() as u32);
        trace!(rook = id.0, %cell, "placed");
        self.cells.push(cell);
        id
    }
}
