//! Framework error type.
//!
//! Move rejection (a blocked path) is ordinary control flow and never shows
//! up here.  These variants only cover invalid configuration and invalid
//! explicit placement.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `rk-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cell {cell} lies outside the board (0..={field_size})")]
    OutOfBounds { cell: Cell, field_size: i32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Cell),
}

/// Shorthand result type for all `rk-*` crates.
pub type RkResult<T> = Result<T, RkError>;
