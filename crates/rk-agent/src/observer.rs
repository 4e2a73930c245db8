//! Per-step observer hooks.

use crate::{BlockedEvent, MoveEvent, SurroundedEvent};

/// Callbacks fired by [`Rook::step`][crate::Rook::step] as a step resolves.
///
/// Called from every rook thread concurrently, so implementations must be
/// `Sync`.  Under strict consistency the hooks run inside the board's
/// critical section, which makes the observed order of moves equal to the
/// commit order.  Keep them short.
///
/// All methods default to no-ops.
pub trait RookObserver: Sync {
    fn on_move(&self, _event: &MoveEvent) {}

    fn on_blocked(&self, _event: &BlockedEvent) {}

    fn on_surrounded(&self, _event: &SurroundedEvent) {}
}
