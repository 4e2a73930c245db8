//! The `Board` slot registry and its queries.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rk_core::{Cell, Consistency, RookId};

// ── Slot ──────────────────────────────────────────────────────────────────────

/// One rook's live state.  Every field is independently atomic.
#[derive(Debug)]
struct Slot {
    x:        AtomicI32,
    y:        AtomicI32,
    finished: AtomicBool,
}

impl Slot {
    fn new(cell: Cell) -> Self {
        Self {
            x:        AtomicI32::new(cell.x),
            y:        AtomicI32::new(cell.y),
            finished: AtomicBool::new(false),
        }
    }

    #[inline]
    fn load(&self) -> Cell {
        Cell::new(self.x.load(Ordering::Acquire), self.y.load(Ordering::Acquire))
    }

    #[inline]
    fn store(&self, cell: Cell) {
        self.x.store(cell.x, Ordering::Release);
        self.y.store(cell.y, Ordering::Release);
    }
}

// ── SlotKey ───────────────────────────────────────────────────────────────────

/// Exclusive write capability for one board slot.
///
/// Issued once per rook by [`BoardBuilder::build`][crate::BoardBuilder::build].
/// Not `Clone`, so exactly one owner can ever commit to a given slot.
#[derive(Debug)]
pub struct SlotKey {
    rook: RookId,
}

impl SlotKey {
    pub(crate) fn new(rook: RookId) -> Self {
        Self { rook }
    }

    /// The rook whose slot this key writes.
    #[inline]
    pub fn rook(&self) -> RookId {
        self.rook
    }
}

// ── Blocker ───────────────────────────────────────────────────────────────────

/// The first rook found on a travel segment, and where it was seen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Blocker {
    pub rook: RookId,
    pub at:   Cell,
}

// ── Board ─────────────────────────────────────────────────────────────────────

/// Concurrently readable registry of every rook's position.
///
/// Built by [`BoardBuilder`][crate::BoardBuilder]; fixed-size from then on.
/// Queries read live positions at call time and are not linearizable with
/// respect to concurrent commits unless the caller holds
/// [`critical_section`](Self::critical_section) in strict mode.
#[derive(Debug)]
pub struct Board {
    field_size:  i32,
    consistency: Consistency,
    slots:       Vec<Slot>,
    section:     Mutex<()>,
}

impl Board {
    pub(crate) fn new(field_size: i32, consistency: Consistency, cells: &[Cell]) -> Self {
        Self {
            field_size,
            consistency,
            slots: cells.iter().copied().map(Slot::new).collect(),
            section: Mutex::new(()),
        }
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    /// Largest valid coordinate on either axis.
    #[inline]
    pub fn field_size(&self) -> i32 {
        self.field_size
    }

    /// Number of rooks on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterator over all `RookId`s in ascending order.
    pub fn rook_ids(&self) -> impl Iterator<Item = RookId> + '_ {
        (0..self.slots.len() as u32).map(RookId)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.within(self.field_size)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Current position of `rook`.
    ///
    /// # Panics
    /// Panics if `rook` is not on this board.
    #[inline]
    pub fn position(&self, rook: RookId) -> Cell {
        self.slots[rook.index()].load()
    }

    /// Snapshot of every position, indexed by `RookId`.
    pub fn positions(&self) -> Vec<Cell> {
        self.slots.iter().map(Slot::load).collect()
    }

    #[inline]
    pub fn is_finished(&self, rook: RookId) -> bool {
        self.slots[rook.index()].finished.load(Ordering::Acquire)
    }

    /// `true` iff some rook currently stands on `cell`, including the caller.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.slots.iter().any(|s| s.load() == cell)
    }

    /// First other rook standing on the segment from `rook`'s position to
    /// `target`, start excluded and target included.
    pub fn path_blocker(&self, rook: RookId, target: Cell) -> Option<Blocker> {
        let from = self.position(rook);
        self.slots
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != rook.index())
            .map(|(i, s)| (RookId(i as u32), s.load()))
            .find(|&(_, at)| from.segment_contains(target, at))
            .map(|(rook, at)| Blocker { rook, at })
    }

    #[inline]
    pub fn is_path_obstructed(&self, rook: RookId, target: Cell) -> bool {
        self.path_blocker(rook, target).is_some()
    }

    /// `true` if all four orthogonal neighbours of `rook` are held by
    /// finished rooks.
    ///
    /// With `edges_as_walls` a neighbour cell off the board counts as held,
    /// so a corner rook needs two finished neighbours and an edge rook three.
    /// Without it a rook on the edge is never surrounded.
    pub fn is_surrounded(&self, rook: RookId, edges_as_walls: bool) -> bool {
        let here = self.position(rook);
        here.neighbours().iter().all(|&cell| {
            if !self.contains(cell) {
                return edges_as_walls;
            }
            self.slots.iter().enumerate().any(|(i, s)| {
                i != rook.index() && s.finished.load(Ordering::Acquire) && s.load() == cell
            })
        })
    }

    // ── Writes (owner only) ───────────────────────────────────────────────

    /// Move the key's rook to `to`.
    ///
    /// Performs no occupancy or path check.  Under strict consistency the
    /// caller must hold [`critical_section`](Self::critical_section).
    pub fn commit(&self, key: &SlotKey, to: Cell) {
        debug_assert!(self.contains(to), "commit outside the board: {to}");
        self.slots[key.rook.index()].store(to);
    }

    /// Flag the key's rook as finished.  Finished rooks never move again and
    /// count as held neighbours for [`is_surrounded`](Self::is_surrounded).
    pub fn mark_finished(&self, key: &SlotKey) {
        self.slots[key.rook.index()].finished.store(true, Ordering::Release);
    }

    // ── Synchronisation ───────────────────────────────────────────────────

    /// Enter the board-wide exclusive section if the board is strict.
    ///
    /// Returns `None` under relaxed consistency.  Hold the guard for the
    /// whole read-check-commit sequence.  A poisoned lock is recovered: the
    /// guarded data is `()` and slots stay valid after any panic.
    pub fn critical_section(&self) -> Option<MutexGuard<'_, ()>> {
        match self.consistency {
            Consistency::Relaxed => None,
            Consistency::Strict  => Some(
                self.section.lock().unwrap_or_else(PoisonError::into_inner),
            ),
        }
    }
}
