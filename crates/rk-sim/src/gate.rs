//! One-shot start gate.

use std::sync::{Condvar, Mutex, PoisonError};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum GateState {
    Closed,
    Open,
    Aborted,
}

/// Broadcast gate that every rook thread waits on before its first step.
///
/// The state lives under the mutex, so a waiter that arrives after the gate
/// opened returns immediately: there is no missed-wakeup window.  The first
/// transition out of `Closed` wins; later `open`/`abort` calls are no-ops.
#[derive(Debug)]
pub struct StartGate {
    state: Mutex<GateState>,
    cv:    Condvar,
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}

impl StartGate {
    pub fn new() -> Self {
        Self { state: Mutex::new(GateState::Closed), cv: Condvar::new() }
    }

    /// Block until the gate leaves `Closed`.  Returns `true` if it opened,
    /// `false` if the run was aborted before it started.
    pub fn wait(&self) -> bool {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .cv
            .wait_while(guard, |s| *s == GateState::Closed)
            .unwrap_or_else(PoisonError::into_inner);
        *guard == GateState::Open
    }

    /// Release every current and future waiter.
    pub fn open(&self) {
        self.transition(GateState::Open);
    }

    /// Release every waiter with "do not start".
    pub fn abort(&self) {
        self.transition(GateState::Aborted);
    }

    pub fn is_open(&self) -> bool {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) == GateState::Open
    }

    fn transition(&self, to: GateState) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == GateState::Closed {
            *state = to;
            self.cv.notify_all();
        }
    }
}
