//! Trailing-edge debounce on the tokio timer
//!
//! Each call cancels the pending call of the same instance and schedules the
//! callback `wait` after the newest call, with the newest arguments.

use super::{Counters, TimingStats};
use crate::errors::{Result, UtilError};
use log::debug;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Deadline used when `now + wait` does not fit in an `Instant` (~30 years)
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Debounced wrapper around a callback taking `A`
///
/// Dropping the wrapper leaves an already scheduled call in place.
pub struct Debouncer<A> {
    callback: Callback<A>,
    wait: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
    counters: Arc<Counters>,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    /// Wrap `callback`; must be called from inside a tokio runtime
    pub fn new<F>(callback: F, wait: Duration) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime =
            Handle::try_current().map_err(|e| UtilError::NoRuntime(e.to_string()))?;

        Ok(Self {
            callback: Arc::new(callback),
            wait,
            runtime,
            pending: Mutex::new(None),
            counters: Arc::new(Counters::default()),
        })
    }

    /// Schedule the callback with `args`, replacing any pending call
    pub fn call(&self, args: A) {
        self.counters.record_call();

        // Deadline is fixed now, not when the task is first polled
        let now = Instant::now();
        let deadline = now
            .checked_add(self.wait)
            .unwrap_or_else(|| now + FAR_FUTURE);

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                previous.abort();
                self.counters.record_suppressed();
                debug!("debounce: replaced pending call, wait={}ms", self.wait.as_millis());
            }
        }

        let callback = Arc::clone(&self.callback);
        let counters = Arc::clone(&self.counters);
        *pending = Some(self.runtime.spawn(async move {
            sleep_until(deadline).await;
            counters.record_execution();
            callback(args);
        }));
    }

    /// Whether a call is scheduled and has not run yet
    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Quiet period before the callback runs
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Counters for this instance
    pub fn stats(&self) -> TimingStats {
        self.counters.snapshot()
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The slot holds at most a handle; a poisoned lock is still usable
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.wait)
            .field("stats", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}

/// Build a [`Debouncer`] for `callback`
pub fn debounce<A, F>(callback: F, wait: Duration) -> Result<Debouncer<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::new(callback, wait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |n: u32| sink.lock().unwrap().push(n))
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_runs() {
        let (seen, callback) = recorder();
        let debounced = debounce(callback, Duration::from_millis(100)).unwrap();

        debounced.call(1);
        sleep(Duration::from_millis(20)).await;
        debounced.call(2);
        sleep(Duration::from_millis(20)).await;
        debounced.call(3);
        assert!(debounced.is_pending());

        // 99ms after the third call: nothing yet
        sleep(Duration::from_millis(99)).await;
        assert!(seen.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*seen.lock().unwrap(), vec![3]);
        assert!(!debounced.is_pending());

        let stats = debounced.stats();
        assert_eq!(stats.calls, 3);
        assert_eq!(stats.executions, 1);
        assert_eq!(stats.suppressed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_run() {
        let (seen, callback) = recorder();
        let debounced = debounce(callback, Duration::from_millis(50)).unwrap();

        debounced.call(1);
        sleep(Duration::from_millis(60)).await;
        debounced.call(2);
        sleep(Duration::from_millis(60)).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert_eq!(debounced.stats().suppressed, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_are_independent() {
        let (seen_a, callback_a) = recorder();
        let (seen_b, callback_b) = recorder();
        let a = debounce(callback_a, Duration::from_millis(100)).unwrap();
        let b = debounce(callback_b, Duration::from_millis(100)).unwrap();

        a.call(1);
        b.call(2);
        a.call(3);
        sleep(Duration::from_millis(150)).await;

        assert_eq!(*seen_a.lock().unwrap(), vec![3]);
        assert_eq!(*seen_b.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_wait_stays_pending() {
        let (seen, callback) = recorder();
        let debounced = debounce(callback, Duration::MAX).unwrap();

        debounced.call(1);
        debounced.call(2);
        sleep(Duration::from_secs(3600)).await;

        assert!(debounced.is_pending());
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(debounced.stats().suppressed, 1);
    }

    #[test]
    fn test_requires_runtime() {
        let result = debounce(|_: u32| {}, Duration::from_millis(10));
        assert!(matches!(result, Err(UtilError::NoRuntime(_))));
    }
}
