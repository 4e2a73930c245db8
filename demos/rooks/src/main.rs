//! rooks — N rooks on a chessboard, moving concurrently.
//!
//! 4–6 rooks start on random distinct cells and are released together.
//! Each moves along its row or column to a random free cell, pausing
//! 200–300 ms between moves.  A rook whose path is blocked waits for it to
//! clear; after 5 s it picks a different target.  The run ends when every
//! rook has made 50 moves (or is boxed in by finished rooks).
//!
//! No arguments.  Set `RUST_LOG=rk_sim=debug` for coordinator diagnostics.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rk_core::SimConfig;
use rk_sim::{ConsoleObserver, SimBuilder};

fn main() -> Result<()> {
    init_logging();

    let config = SimConfig::default();
    debug!(config = %serde_json::to_string(&config)?, "starting");
    let mut sim = SimBuilder::new(config).build()?;

    let console = ConsoleObserver::stdout();
    let report = sim.run(&console)?;

    if let Some(e) = console.take_error() {
        eprintln!("output error: {e}");
    }
    info!(
        moves = report.total_moves(),
        distinct = report.all_distinct(),
        elapsed = ?report.elapsed,
        "run complete"
    );
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .init();
}
