//! The `Sim` struct: thread-per-rook run with a one-shot start gate.

use std::thread;
use std::time::{Duration, Instant};

use rk_agent::Rook;
use rk_board::Board;
use rk_core::{RandomInt, RookRng, SimConfig};
use tracing::{debug, trace, warn};

use crate::{RookSummary, SimError, SimObserver, SimReport, SimResult, StartGate};

/// The main simulation runner.
///
/// Holds the shared board, every rook and every rook's RNG.  Create via
/// [`SimBuilder`][crate::SimBuilder], then call [`run`](Self::run).
pub struct Sim {
    pub config: SimConfig,

    /// Shared board, read by every rook thread.
    pub board: Board,

    /// One state machine per rook, indexed by `RookId`.
    pub rooks: Vec<Rook>,

    /// Per-rook RNGs, separated so each thread gets a disjoint `&mut`.
    pub rngs: Vec<RookRng>,

    pub(crate) gate: StartGate,
}

impl Sim {
    /// Run every rook to completion and report the final state.
    ///
    /// Spawns one scoped thread per rook, waits the configured warm-up,
    /// opens the start gate and joins every thread.  Returns once all rooks
    /// have finished (quota reached or surrounded).
    pub fn run<O: SimObserver>(&mut self, observer: &O) -> SimResult<SimReport> {
        let started = Instant::now();
        let Sim { config, board, rooks, rngs, gate } = self;
        let (config, board, gate) = (&*config, &*board, &*gate);

        observer.on_init(board.len());
        for id in board.rook_ids() {
            observer.on_placed(id, board.position(id));
        }

        let summaries = thread::scope(|s| -> SimResult<Vec<RookSummary>> {
            let mut handles = Vec::with_capacity(rooks.len());
            for (rook, rng) in rooks.iter_mut().zip(rngs.iter_mut()) {
                let id = rook.id();
                let spawned = thread::Builder::new()
                    .name(format!("rook-{}", id.0))
                    .spawn_scoped(s, move || drive(rook, rng, board, gate, config, observer));
                match spawned {
                    Ok(handle) => handles.push((id, handle)),
                    Err(e) => {
                        // Release the rooks already parked so the scope can join them.
                        warn!(rook = id.0, error = %e, "spawn failed, aborting run");
                        gate.abort();
                        return Err(SimError::Spawn(e));
                    }
                }
            }
            debug!(rooks = handles.len(), "rook threads parked on the start gate");

            observer.on_warmup(config.warmup);
            if !config.warmup.is_zero() {
                thread::sleep(config.warmup);
            }
            observer.on_start();
            gate.open();
            debug!("start gate opened");

            // Join every handle before looking at any result.
            let joined: Vec<SimResult<RookSummary>> = handles
                .into_iter()
                .map(|(id, h)| h.join().map_err(|_| SimError::RookPanicked(id)))
                .collect();
            joined.into_iter().collect()
        })?;

        let report = SimReport { rooks: summaries, elapsed: started.elapsed() };
        debug!(moves = report.total_moves(), elapsed = ?report.elapsed, "all rooks joined");
        observer.on_sim_end(&report);
        Ok(report)
    }
}

/// Body of one rook thread.
fn drive<O: SimObserver>(
    rook:     &mut Rook,
    rng:      &mut RookRng,
    board:    &Board,
    gate:     &StartGate,
    config:   &SimConfig,
    observer: &O,
) -> RookSummary {
    if gate.wait() {
        trace!(rook = rook.id().0, "released");
        while !rook.is_finished() {
            let delay_ms = rng.random_int(
                config.step_delay_min_ms as i32,
                config.step_delay_max_ms as i32,
            );
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms as u64));
            }
            rook.step(board, rng, Instant::now(), observer);
        }
    }
    let summary = RookSummary::of(rook, board);
    observer.on_finished(&summary);
    summary
}
