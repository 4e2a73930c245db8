//! `rk-agent` — the rook control loop.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`rook`]      | `Rook`, `RookParams`, `RookState` — the per-rook state machine  |
//! | [`event`]     | `MoveEvent`, `BlockedEvent`, `SurroundedEvent`, `StepOutcome`, `Finish` |
//! | [`observer`]  | `RookObserver` — hooks fired as steps resolve                   |
//!
//! # State machine
//!
//! ```text
//!   Idle ──► Proposing ──► Committing ──► Idle │ Finished(Completed)
//!              ▲   │
//!              │   └─────► Blocked{target, since}
//!              │                │  elapsed < timeout: re-check same target
//!              └────────────────┘  elapsed ≥ timeout: fresh target
//!                               └─► Finished(Surrounded)   (boxed in)
//! ```
//!
//! `Proposing` and `Committing` are transient within one [`Rook::step`]
//! call; only `Idle`, `Blocked` and `Finished` persist between steps.
//!
//! A `Rook` does no sleeping and spawns nothing.  The thread driver in
//! `rk-sim` owns pacing and the start gate.

pub mod event;
pub mod observer;
pub mod rook;


pub use event::{BlockedEvent, Finish, MoveEvent, StepOutcome, SurroundedEvent};
pub use observer::RookObserver;
pub use rook::{Rook, RookParams, RookState};
