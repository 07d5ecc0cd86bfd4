//! Leading-edge throttle
//!
//! The first call runs immediately and opens a window of `limit`; calls
//! inside the window are dropped, not queued. Uses the tokio clock, so it
//! follows paused time in tests, but needs no running runtime.

use super::{Counters, TimingStats};
use log::debug;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Throttled wrapper around a callback taking `A`
pub struct Throttler<A> {
    callback: Box<dyn Fn(A) + Send + Sync>,
    limit: Duration,
    last_run: Mutex<Option<Instant>>,
    counters: Counters,
}

impl<A> Throttler<A> {
    pub fn new<F>(callback: F, limit: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            limit,
            last_run: Mutex::new(None),
            counters: Counters::default(),
        }
    }

    /// Run the callback unless the window is still open
    ///
    /// Returns whether the callback ran.
    pub fn call(&self, args: A) -> bool {
        self.counters.record_call();
        let now = Instant::now();

        {
            let mut last_run = self
                .last_run
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            if let Some(previous) = *last_run {
                let elapsed = now.saturating_duration_since(previous);
                if elapsed < self.limit {
                    self.counters.record_suppressed();
                    debug!(
                        "throttle: dropped call, {}ms left in window",
                        (self.limit - elapsed).as_millis()
                    );
                    return false;
                }
            }

            // Claim the window before running so concurrent callers see it
            *last_run = Some(now);
        }

        (self.callback)(args);
        self.counters.record_execution();
        true
    }

    /// Window length
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Counters for this instance
    pub fn stats(&self) -> TimingStats {
        self.counters.snapshot()
    }
}

impl<A> fmt::Debug for Throttler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttler")
            .field("limit", &self.limit)
            .field("stats", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}

/// Build a [`Throttler`] for `callback`
pub fn throttle<A, F>(callback: F, limit: Duration) -> Throttler<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttler::new(callback, limit)
}
