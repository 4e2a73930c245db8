//! `rk-core` — foundational types for the rooks movement simulation.
//!
//! This crate is a dependency of every other `rk-*` crate.  It has no `rk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RookId`                                              |
//! | [`grid`]        | `Cell`, `Axis`                                        |
//! | [`config`]      | `SimConfig`, `Consistency`                            |
//! | [`rng`]         | `RandomInt` capability, `RookRng`, `SimRng`           |
//! | [`error`]       | `RkError`, `RkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, cells and config.   |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Consistency, SimConfig};
pub use error::{RkError, RkResult};
pub use grid::{Axis, Cell};
pub use ids::RookId;
pub use rng::{RandomInt, RookRng, SimRng};
