//! Rate-limited invocation wrappers
//!
//! `Debouncer` defers a callback until calls stop arriving; `Throttler` runs
//! it at most once per window on the leading edge. Each instance owns its
//! timer state; nothing is shared between wrappers.

pub mod debounce;
pub mod throttle;

pub use debounce::{debounce, Debouncer};
pub use throttle::{throttle, Throttler};

use std::sync::atomic::{AtomicU64, Ordering};

/// Call counters of one wrapper instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingStats {
    /// Invocations of the wrapper
    pub calls: u64,

    /// Times the wrapped callback actually ran
    pub executions: u64,

    /// Calls replaced (debounce) or dropped (throttle)
    pub suppressed: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    calls: AtomicU64,
    executions: AtomicU64,
    suppressed: AtomicU64,
}

impl Counters {
    pub(crate) fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_execution(&self) {
        self.executions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> TimingStats {
        TimingStats {
            calls: self.calls.load(Ordering::Relaxed),
            executions: self.executions.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
        }
    }
}
