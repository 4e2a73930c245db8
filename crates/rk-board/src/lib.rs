//! `rk-board` — the shared board state every rook reads before it moves.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`board`]     | `Board` (slot registry + queries), `SlotKey`, `Blocker`       |
//! | [`builder`]   | `BoardBuilder` — unique initial placement                     |
//!
//! # Ownership model
//!
//! The board is a fixed-size registry of slots, one per rook, shared by
//! reference with every rook thread.  All slots are readable by everyone.
//! A slot is written only through its [`SlotKey`], which the builder hands
//! out exactly once per rook and which cannot be cloned, so "each rook
//! writes only its own position" is enforced by the type system rather than
//! by convention.
//!
//! # Consistency
//!
//! Each coordinate is stored in its own atomic.  Under
//! [`Consistency::Relaxed`][rk_core::Consistency::Relaxed] queries read
//! them without further coordination and may see a torn snapshot across
//! rooks (or even across the two fields of one rook mid-commit).  Under
//! [`Consistency::Strict`][rk_core::Consistency::Strict] callers hold
//! [`Board::critical_section`] around the whole read-check-commit sequence.

pub mod board;
pub mod builder;

#[cfg(test)]
mod tests;

pub use board::{Blocker, Board, SlotKey};
pub use builder::BoardBuilder;
