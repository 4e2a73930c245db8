//! Simulation configuration.
//!
//! `SimConfig::default()` carries the fixed run parameters.  Tests build
//! their own values (zero delay, zero timeout, small quotas) through struct
//! update syntax.

use std::time::Duration;

use crate::{RkError, RkResult};

// ── Fixed run parameters ──────────────────────────────────────────────────────

pub const FIELD_SIZE:          i32      = 8;
pub const ROOK_COUNT_MIN:      usize    = 4;
pub const ROOK_COUNT_MAX:      usize    = 6;
pub const STEP_MAX_COUNT:      u32      = 50;
pub const STEP_DELAY_MIN_MS:   u32      = 200;
pub const STEP_DELAY_MAX_MS:   u32      = 300;
pub const COLLISION_TIMEOUT:   Duration = Duration::from_secs(5);
pub const WARMUP:              Duration = Duration::from_secs(1);

// ── Consistency ───────────────────────────────────────────────────────────────

/// How rooks synchronise access to the shared board.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consistency {
    /// Each coordinate is an independent atomic.  A path check that spans
    /// several rooks may observe some of them before and some after a
    /// concurrent move, so two rooks can briefly resolve to the same cell.
    #[default]
    Relaxed,

    /// One exclusive section guards every rook's propose, check and commit
    /// sequence.  Positions are always pairwise distinct.
    Strict,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Largest valid coordinate on either axis.  Cells span `0..=field_size`.
    pub field_size: i32,

    /// Inclusive range the rook count is drawn from when the builder is not
    /// given an explicit count.
    pub rook_count_min: usize,
    pub rook_count_max: usize,

    /// Successful moves each rook must make before it finishes.
    pub step_max_count: u32,

    /// Inclusive think-time range slept before every step, in milliseconds.
    pub step_delay_min_ms: u32,
    pub step_delay_max_ms: u32,

    /// Continuous blocking on one target for at least this long forces a
    /// freshly drawn target on the next step.
    pub collision_timeout: Duration,

    /// Coordinator pause between placement and opening the start gate.
    pub warmup: Duration,

    pub consistency: Consistency,

    /// Let a rook boxed in by finished rooks exit before reaching its quota.
    pub detect_surrounded: bool,

    /// Count off-board neighbours as held when checking for a surrounded
    /// rook.  Off by default: a rook is only surrounded by four finished
    /// rooks.
    pub edges_as_walls: bool,

    /// Master RNG seed.  `None` seeds every RNG from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_size:        FIELD_SIZE,
            rook_count_min:    ROOK_COUNT_MIN,
            rook_count_max:    ROOK_COUNT_MAX,
            step_max_count:    STEP_MAX_COUNT,
            step_delay_min_ms: STEP_DELAY_MIN_MS,
            step_delay_max_ms: STEP_DELAY_MAX_MS,
            collision_timeout: COLLISION_TIMEOUT,
            warmup:            WARMUP,
            consistency:       Consistency::Relaxed,
            detect_surrounded: true,
            edges_as_walls:    false,
            seed:              None,
        }
    }
}

impl SimConfig {
    /// Number of cells along one axis.
    #[inline]
    pub fn cells_per_axis(&self) -> i32 {
        self.field_size + 1
    }

    /// Largest rook count for which every rook is guaranteed a free cell in
    /// its own row or column, so target selection always terminates.
    #[inline]
    pub fn max_rooks(&self) -> usize {
        (2 * self.field_size.max(0)) as usize
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> RkResult<()> {
        if self.field_size < 1 {
            return Err(RkError::Config(format!(
                "field_size must be at least 1, got {}",
                self.field_size
            )));
        }
        if self.rook_count_min == 0 {
            return Err(RkError::Config("rook_count_min must be at least 1".into()));
        }
        if self.rook_count_min > self.rook_count_max {
            return Err(RkError::Config(format!(
                "rook_count_min {} exceeds rook_count_max {}",
                self.rook_count_min, self.rook_count_max
            )));
        }
        self.check_rook_count(self.rook_count_max)?;
        if self.step_max_count == 0 {
            return Err(RkError::Config("step_max_count must be at least 1".into()));
        }
        if self.step_delay_min_ms > self.step_delay_max_ms {
            return Err(RkError::Config(format!(
                "step_delay_min_ms {} exceeds step_delay_max_ms {}",
                self.step_delay_min_ms, self.step_delay_max_ms
            )));
        }
        if self.step_delay_max_ms > i32::MAX as u32 {
            return Err(RkError::Config("step_delay_max_ms is too large".into()));
        }
        Ok(())
    }

    /// Reject a rook count the board cannot host.
    pub fn check_rook_count(&self, count: usize) -> RkResult<()> {
        if count == 0 {
            return Err(RkError::Config("at least one rook is required".into()));
        }
        if count > self.max_rooks() {
            return Err(RkError::Config(format!(
                "{count} rooks do not fit a board with field_size {} (max {})",
                self.field_size,
                self.max_rooks()
            )));
        }
        Ok(())
    }
}
