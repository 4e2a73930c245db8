//! `rk-sim` — coordinator for the rooks simulation.
//!
//! # Run sequence
//!
//! ```text
//! SimBuilder::build
//!   ① validate SimConfig
//!   ② draw the rook count (unless given) and place rooks on distinct cells
//!   ③ hand each rook its SlotKey and RNG
//! Sim::run
//!   ④ spawn one OS thread per rook; each blocks on the StartGate
//!   ⑤ sleep the warm-up, then open the gate once — every rook is released
//!   ⑥ each rook loops: think-time sleep → Rook::step → until finished
//!   ⑦ join every thread and return a SimReport
//! ```
//!
//! The coordinator never mediates moves.  It only gates the start and
//! observes completion.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rk_core::SimConfig;
//! use rk_sim::{ConsoleObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let report = sim.run(&ConsoleObserver::stdout())?;
//! assert!(report.all_distinct());
//! ```

pub mod builder;
pub mod error;
pub mod gate;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use gate::StartGate;
pub use observer::{ConsoleObserver, NoopObserver, RecordingObserver, SimEvent, SimObserver};
pub use report::{RookSummary, SimReport};
pub use sim::Sim;
