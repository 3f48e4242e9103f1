//! Timer scheduling behind a trait, with cancel-on-drop handles

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::{RefreshError, Result};

/// Work run once when a timer fires
pub type OnceTask = Box<dyn FnOnce() + Send + 'static>;

/// Work run on every tick of a repeating timer
pub type RepeatingTask = Box<dyn FnMut() + Send + 'static>;

/// Source of timers and of the current time
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`
    fn schedule_once(&self, delay: Duration, task: OnceTask) -> TimerHandle;

    /// Run `task` every `period`, first after one full period
    fn schedule_repeating(&self, period: Duration, task: RepeatingTask) -> TimerHandle;

    /// Current time according to this scheduler's clock
    fn now(&self) -> DateTime<Utc>;
}

/// Handle to a scheduled timer; the timer is cancelled when the handle drops
#[derive(Debug)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    /// Wrap a cancellation token
    #[must_use]
    pub const fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Cancel the timer; a task that already started is not interrupted
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the timer was cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// [`Scheduler`] on a tokio runtime
///
/// The clock pairs a wall-clock reading with a [`tokio::time::Instant`] taken
/// at construction, so it follows tokio's clock, including paused time in
/// tests.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Handle,
    wall_anchor: DateTime<Utc>,
    instant_anchor: Instant,
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("wall_anchor", &self.wall_anchor)
            .finish_non_exhaustive()
    }
}

impl TokioScheduler {
    /// Scheduler on the runtime of the calling context
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::Runtime`] when called outside a tokio runtime.
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| RefreshError::runtime(e.to_string()))?;
        Ok(Self::with_handle(handle))
    }

    /// Scheduler on an explicit runtime handle
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            wall_anchor: Utc::now(),
            instant_anchor: Instant::now(),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, task: OnceTask) -> TimerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let deadline = Instant::now() + delay;

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => trace!("One-shot timer cancelled"),
                () = sleep_until(deadline) => task(),
            }
        });

        TimerHandle::new(token)
    }

    fn schedule_repeating(&self, period: Duration, mut task: RepeatingTask) -> TimerHandle {
        // tokio intervals reject a zero period
        let period = period.max(Duration::from_millis(1));
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let start = Instant::now() + period;

        self.handle.spawn(async move {
            let mut ticker = interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => {
                        trace!("Repeating timer cancelled");
                        break;
                    }
                    _ = ticker.tick() => task(),
                }
            }
        });

        TimerHandle::new(token)
    }

    fn now(&self) -> DateTime<Utc> {
        TimeDelta::from_std(self.instant_anchor.elapsed())
            .ok()
            .and_then(|elapsed| self.wall_anchor.checked_add_signed(elapsed))
            .unwrap_or(self.wall_anchor)
    }
}
