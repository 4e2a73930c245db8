use rk_core::{RkError, RookId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] RkError),

    #[error("{what} length {got} does not match rook count {expected}")]
    RookCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("failed to spawn rook thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("rook {0} panicked")]
    RookPanicked(RookId),
}

pub type SimResult<T> = Result<T, SimError>;
