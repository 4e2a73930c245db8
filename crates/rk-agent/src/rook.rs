//! The `Rook` state machine.

use std::time::{Duration, Instant};

use rk_board::{Board, SlotKey};
use rk_core::{Axis, Cell, RandomInt, RookId, SimConfig};
use tracing::{debug, trace};

use crate::{BlockedEvent, Finish, MoveEvent, RookObserver, StepOutcome, SurroundedEvent};

// ── RookParams ────────────────────────────────────────────────────────────────

/// The slice of [`SimConfig`] a rook needs while stepping.
#[derive(Copy, Clone, Debug)]
pub struct RookParams {
    pub step_max_count:    u32,
    pub collision_timeout: Duration,
    pub detect_surrounded: bool,
    pub edges_as_walls:    bool,
}

impl From<&SimConfig> for RookParams {
    fn from(config: &SimConfig) -> Self {
        Self {
            step_max_count:    config.step_max_count,
            collision_timeout: config.collision_timeout,
            detect_surrounded: config.detect_surrounded,
            edges_as_walls:    config.edges_as_walls,
        }
    }
}

// ── RookState ─────────────────────────────────────────────────────────────────

/// State carried between steps.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RookState {
    /// Next step draws a fresh target.
    Idle,
    /// The last check on `target` failed.  `since` is when blocking on this
    /// target began; it is not refreshed by later failed re-checks.
    Blocked { target: Cell, since: Instant },
    Finished(Finish),
}

// ── Rook ──────────────────────────────────────────────────────────────────────

/// One rook: owns the write key to its board slot and its move counter.
///
/// Drive it by calling [`step`](Self::step) until
/// [`is_finished`](Self::is_finished).  Each call resolves exactly one
/// proposal: a commit, a rejection, or a surrounded exit.
#[derive(Debug)]
pub struct Rook {
    key:    SlotKey,
    params: RookParams,
    moves:  u32,
    state:  RookState,
}

impl Rook {
    pub fn new(key: SlotKey, params: RookParams) -> Self {
        Self { key, params, moves: 0, state: RookState::Idle }
    }

    #[inline]
    pub fn id(&self) -> RookId {
        self.key.rook()
    }

    /// Successful moves so far.
    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn state(&self) -> RookState {
        self.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, RookState::Finished(_))
    }

    /// How the rook stopped, once it has.
    pub fn finish(&self) -> Option<Finish> {
        match self.state {
            RookState::Finished(f) => Some(f),
            _ => None,
        }
    }

    /// Resolve one proposal at time `now`.
    ///
    /// Under strict consistency the whole propose, check and commit sequence
    /// (observer hooks included) runs inside the board's critical section.
    /// Under relaxed consistency the board may change between the check and
    /// the commit; no second check is made.
    pub fn step<R, O>(&mut self, board: &Board, rng: &mut R, now: Instant, observer: &O) -> StepOutcome
    where
        R: RandomInt + ?Sized,
        O: RookObserver + ?Sized,
    {
        if self.is_finished() {
            return StepOutcome::Done;
        }
        if self.moves >= self.params.step_max_count {
            self.stop(board, Finish::Completed);
            return StepOutcome::Done;
        }

        let _section = board.critical_section();

        let (target, blocked_since) = match self.state {
            RookState::Blocked { target, since }
                if now.saturating_duration_since(since) < self.params.collision_timeout =>
            {
                (target, Some(since))
            }
            RookState::Blocked { target, .. } => {
                debug!(rook = self.id().0, %target, "collision timeout, drawing a fresh target");
                (self.propose(board, rng), None)
            }
            _ => (self.propose(board, rng), None),
        };

        let from = board.position(self.id());

        if let Some(blocker) = board.path_blocker(self.id(), target) {
            let blocked = BlockedEvent { rook: self.id(), from, to: target, blocker };
            observer.on_blocked(&blocked);

            // A fresh block is where a boxed-in rook is recognised.  Re-checks
            // of a stale target skip it: nothing finished can have moved.
            if blocked_since.is_none()
                && self.params.detect_surrounded
                && board.is_surrounded(self.id(), self.params.edges_as_walls)
            {
                let surrounded = SurroundedEvent { rook: self.id(), at: from };
                observer.on_surrounded(&surrounded);
                self.stop(board, Finish::Surrounded);
                return StepOutcome::Surrounded(blocked, surrounded);
            }

            self.state = RookState::Blocked { target, since: blocked_since.unwrap_or(now) };
            return StepOutcome::Blocked(blocked);
        }

        board.commit(&self.key, target);
        let event = MoveEvent { rook: self.id(), step: self.moves, from, to: target };
        self.moves += 1;
        observer.on_move(&event);

        if self.moves >= self.params.step_max_count {
            self.stop(board, Finish::Completed);
        } else {
            self.state = RookState::Idle;
        }
        StepOutcome::Moved(event)
    }

    /// Draw a target along the rook's row or column that no rook occupies.
    ///
    /// The axis is a coin flip (1 → x, 0 → y); the other coordinate is kept.
    /// Redraws until the cell is free.  The rook's own cell counts as
    /// occupied, so a draw that reproduces the current coordinate is redrawn
    /// as well.
    fn propose<R: RandomInt + ?Sized>(&self, board: &Board, rng: &mut R) -> Cell {
        let here = board.position(self.id());
        let max = board.field_size();
        loop {
            let axis = if rng.random_int(0, 1) == 1 { Axis::X } else { Axis::Y };
            let candidate = here.with(axis, rng.random_int(0, max));
            if !board.is_occupied(candidate) {
                trace!(rook = self.id().0, %here, %candidate, "proposed");
                return candidate;
            }
        }
    }

    fn stop(&mut self, board: &Board, finish: Finish) {
        board.mark_finished(&self.key);
        self.state = RookState::Finished(finish);
    }
}
