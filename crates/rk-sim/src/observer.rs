//! Simulation observers: the console text stream and an in-memory recorder.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rk_agent::{BlockedEvent, Finish, MoveEvent, RookObserver, SurroundedEvent};
use rk_core::{Cell, RookId};

use crate::{RookSummary, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of a run,
/// on top of the per-step hooks of [`RookObserver`].
///
/// Per-step and `on_finished` hooks are called from rook threads; the rest
/// from the coordinating thread.  All methods have default no-op
/// implementations so implementors only override what they care about.
///
/// # Example — move counter
///
/// ```rust,ignore
/// struct MoveCounter(AtomicUsize);
///
/// impl RookObserver for MoveCounter {
///     fn on_move(&self, _e: &MoveEvent) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// impl SimObserver for MoveCounter {}
/// ```
pub trait SimObserver: RookObserver {
    /// Rooks have been created and placed.
    fn on_init(&self, _rooks: usize) {}

    /// Called once per rook, in `RookId` order, with its start cell.
    fn on_placed(&self, _rook: RookId, _at: Cell) {}

    /// Rook threads are parked on the gate; the coordinator is about to
    /// sleep for `warmup`.
    fn on_warmup(&self, _warmup: Duration) {}

    /// Called right before the start gate opens.
    fn on_start(&self) {}

    /// Called from the rook's own thread as it exits.
    fn on_finished(&self, _summary: &RookSummary) {}

    /// Called once after every rook thread has been joined.
    fn on_sim_end(&self, _report: &SimReport) {}
}

// ── NoopObserver ──────────────────────────────────────────────────────────────

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl RookObserver for NoopObserver {}
impl SimObserver for NoopObserver {}

// ── ConsoleObserver ───────────────────────────────────────────────────────────

/// Writes the human-readable run log to any `Write` sink, one whole line per
/// event, under one mutex so lines from different rooks never interleave.
///
/// Write errors are stored internally because observer hooks have no return
/// value.  Check with [`take_error`](Self::take_error) after the run.
pub struct ConsoleObserver<W: Write + Send> {
    out:        Mutex<W>,
    last_error: Mutex<Option<io::Error>>,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out), last_error: Mutex::new(None) }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&self) -> Option<io::Error> {
        self.last_error.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        let result = {
            let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
            write_line(&mut *out, args)
        };
        if let Err(e) = result {
            let mut slot = self.last_error.lock().unwrap_or_else(PoisonError::into_inner);
            // Keep only the first error.
            if slot.is_none() {
                *slot = Some(e);
            }
        }
    }
}

impl<W: Write + Send> RookObserver for ConsoleObserver<W> {
    fn on_move(&self, e: &MoveEvent) {
        self.line(format_args!(
            "+\trook[{}]: move{{{}}} from {} to {}",
            e.rook.0, e.step, e.from, e.to
        ));
    }

    fn on_blocked(&self, e: &BlockedEvent) {
        self.line(format_args!(
            "-\trook[{}]: failed to move from {} to {} - collides rook[{}] at {}",
            e.rook.0, e.from, e.to, e.blocker.rook.0, e.blocker.at
        ));
    }

    fn on_surrounded(&self, e: &SurroundedEvent) {
        self.line(format_args!(
            "+\trook[{}]: at {} is surrounded by finished rooks",
            e.rook.0, e.at
        ));
    }
}

impl<W: Write + Send> SimObserver for ConsoleObserver<W> {
    fn on_init(&self, rooks: usize) {
        self.line(format_args!("====\tInit {rooks} rooks on the field\t===="));
    }

    fn on_placed(&self, rook: RookId, at: Cell) {
        self.line(format_args!("rook[{}]: emplaced {}", rook.0, at));
    }

    fn on_warmup(&self, warmup: Duration) {
        self.line(format_args!(
            "====\tWait {} seconds for start\t====",
            warmup.as_secs_f64()
        ));
    }

    fn on_finished(&self, s: &RookSummary) {
        match s.finish {
            Some(Finish::Completed) => self.line(format_args!(
                "rook[{}]: finished at {} after {} moves",
                s.rook.0, s.position, s.moves
            )),
            Some(Finish::Surrounded) => self.line(format_args!(
                "rook[{}]: stopped at {} after {} moves (surrounded)",
                s.rook.0, s.position, s.moves
            )),
            None => self.line(format_args!("rook[{}]: never started", s.rook.0)),
        }
    }

    fn on_sim_end(&self, report: &SimReport) {
        self.line(format_args!(
            "====\tAll rooks finished: {} moves in {:.3} s\t====",
            report.total_moves(),
            report.elapsed.as_secs_f64()
        ));
    }
}

fn write_line<W: Write>(out: &mut W, args: fmt::Arguments<'_>) -> io::Result<()> {
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    out.flush()
}

// ── RecordingObserver ─────────────────────────────────────────────────────────

/// One observed event, as captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    Init(usize),
    Placed(RookId, Cell),
    Warmup(Duration),
    Start,
    Moved(MoveEvent),
    Blocked(BlockedEvent),
    Surrounded(SurroundedEvent),
    Finished(RookSummary),
    End,
}

/// Keeps every event in arrival order.  Under strict consistency the order
/// of `Moved` events equals the commit order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SimEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<SimEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Only the committed moves, in arrival order.
    pub fn moves(&self) -> Vec<MoveEvent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::Moved(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: SimEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

impl RookObserver for RecordingObserver {
    fn on_move(&self, e: &MoveEvent) {
        self.push(SimEvent::Moved(*e));
    }

    fn on_blocked(&self, e: &BlockedEvent) {
        self.push(SimEvent::Blocked(*e));
    }

    fn on_surrounded(&self, e: &SurroundedEvent) {
        self.push(SimEvent::Surrounded(*e));
    }
}

impl SimObserver for RecordingObserver {
    fn on_init(&self, rooks: usize) {
        self.push(SimEvent::Init(rooks));
    }

    fn on_placed(&self, rook: RookId, at: Cell) {
        self.push(SimEvent::Placed(rook, at));
    }

    fn on_warmup(&self, warmup: Duration) {
        self.push(SimEvent::Warmup(warmup));
    }

    fn on_start(&self) {
        self.push(SimEvent::Start);
    }

    fn on_finished(&self, summary: &RookSummary) {
        self.push(SimEvent::Finished(*summary));
    }

    fn on_sim_end(&self, _report: &SimReport) {
        self.push(SimEvent::End);
    }
}
