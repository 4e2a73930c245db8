//! Fluent builder for constructing a [`Sim`].

use rk_agent::{Rook, RookParams};
use rk_board::BoardBuilder;
use rk_core::{Cell, RookRng, SimConfig, SimRng};
use tracing::debug;

use crate::{Sim, SimError, SimResult, StartGate};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                           |
/// |--------------------------|---------------------------------------------------|
/// | `.rook_count(n)`         | drawn uniformly from `rook_count_min..=max`       |
/// | `.initial_positions(v)`  | random distinct cells                             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .rook_count(4)
///     .build()?;
/// sim.run(&NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    count:     Option<usize>,
    positions: Option<Vec<Cell>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, count: None, positions: None }
    }

    /// Fix the number of rooks instead of drawing it.
    pub fn rook_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Place rooks on these cells, in `RookId` order, instead of drawing
    /// them.  Cells must be distinct and on the board.
    pub fn initial_positions(mut self, positions: Vec<Cell>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place every rook, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut rng = SimRng::from_seed(self.config.seed);

        let count = match (&self.positions, self.count) {
            (Some(p), Some(n)) if p.len() != n => {
                return Err(SimError::RookCountMismatch {
                    expected: n,
                    got:      p.len(),
                    what:     "initial positions",
                });
            }
            (Some(p), _) => p.len(),
            (None, Some(n)) => n,
            (None, None) => rng.gen_count(self.config.rook_count_min, self.config.rook_count_max),
        };
        self.config.check_rook_count(count)?;

        // ── Placement ─────────────────────────────────────────────────────
        let mut placement = BoardBuilder::from_config(&self.config);
        match self.positions {
            Some(cells) => {
                for cell in cells {
                    placement.place_at(cell)?;
                }
            }
            None => {
                for _ in 0..count {
                    placement.place_random(&mut rng);
                }
            }
        }
        let (board, keys) = placement.build();
        debug!(rooks = count, consistency = ?self.config.consistency, "board built");

        // ── Rooks and their RNGs ──────────────────────────────────────────
        let params = RookParams::from(&self.config);
        let rooks: Vec<Rook> = keys.into_iter().map(|key| Rook::new(key, params)).collect();
        let rngs = rooks
            .iter()
            .map(|r| RookRng::for_rook(self.config.seed, r.id()))
            .collect();

        Ok(Sim {
            config: self.config,
            board,
            rooks,
            rngs,
            gate: StartGate::new(),
        })
    }
}
