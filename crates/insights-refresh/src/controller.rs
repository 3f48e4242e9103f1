//! Refresh controller state machine
//!
//! Drives the dashboard through `Loading → Idle ⇄ Refreshing` on timers
//! from a [`Scheduler`], with a background timer that silently replaces the
//! snapshot while idle. The background timer is re-armed after every
//! replacement, so its period always counts from the last update.

use crate::scheduler::{Scheduler, TimerHandle};
use crate::store::{DashboardView, RefreshOutcome, RefreshPhase, SnapshotStore};
use crate::{RefreshError, Result};
use insights_core::RefreshConfig;
use insights_data::SnapshotSource;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// What triggered a snapshot replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateReason {
    InitialLoad,
    Manual,
    Background,
}

impl UpdateReason {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InitialLoad => "initial_load",
            Self::Manual => "manual",
            Self::Background => "background",
        }
    }
}

#[derive(Debug, Default)]
struct Timers {
    started: bool,
    pending: Option<TimerHandle>,
    background: Option<TimerHandle>,
}

/// The pieces a timer callback needs
#[derive(Clone)]
struct Updater {
    store: Arc<SnapshotStore>,
    source: Arc<dyn SnapshotSource>,
    scheduler: Arc<dyn Scheduler>,
    timers: Arc<Mutex<Timers>>,
    /// Background period, `None` when auto refresh is disabled
    background_period: Option<Duration>,
}

impl Updater {
    /// Schedule a fresh background timer, or nothing when disabled
    fn background_timer(&self) -> Option<TimerHandle> {
        self.background_period.map(|period| {
            let updater = self.clone();
            self.scheduler
                .schedule_repeating(period, Box::new(move || updater.tick()))
        })
    }

    /// Restart the background period from now, replacing the old timer
    fn rearm_background(&self) {
        let mut timers = self.timers.lock();
        if self.store.is_disposed() {
            return;
        }
        if let Some(handle) = self.background_timer() {
            let previous = timers.background.replace(handle);
            drop(timers);
            drop(previous);
        }
    }

    /// Finish an in-flight load or refresh
    fn finish(&self, reason: UpdateReason) {
        match self.source.snapshot() {
            Ok(snapshot) => {
                let at = self.scheduler.now();
                match self.store.complete(Arc::new(snapshot), at) {
                    Some(generation) => {
                        info!(
                            generation,
                            reason = reason.as_str(),
                            source = self.source.name(),
                            "Snapshot replaced"
                        );
                        self.rearm_background();
                    }
                    None => debug!(reason = reason.as_str(), "Discarding snapshot after shutdown"),
                }
            }
            Err(e) => {
                warn!(error = %e, reason = reason.as_str(), "Snapshot source failed");
                self.store.abort();
            }
        }
    }

    /// Background tick: replace silently, only while idle with a snapshot
    fn tick(&self) {
        if !self.store.accepts_background() {
            debug!(phase = %self.store.view().phase, "Skipping background refresh");
            return;
        }

        match self.source.snapshot() {
            Ok(snapshot) => {
                let at = self.scheduler.now();
                if let Some(generation) = self.store.replace_if_idle(Arc::new(snapshot), at) {
                    info!(
                        generation,
                        reason = UpdateReason::Background.as_str(),
                        source = self.source.name(),
                        "Snapshot replaced"
                    );
                    self.rearm_background();
                }
            }
            Err(e) => warn!(error = %e, "Background snapshot failed"),
        }
    }
}

/// Timer-driven refresh controller
///
/// Owns the [`SnapshotStore`] and every timer it arms. Dropping the
/// controller shuts it down.
pub struct RefreshController {
    config: RefreshConfig,
    updater: Updater,
}

impl fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshController")
            .field("config", &self.config)
            .field("source", &self.updater.source.name())
            .field("store", &self.updater.store)
            .finish_non_exhaustive()
    }
}

impl RefreshController {
    /// Create a controller; nothing runs until [`Self::start`]
    #[must_use]
    pub fn new(
        config: RefreshConfig,
        source: Arc<dyn SnapshotSource>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let background_period = config
            .auto_refresh_enabled
            .then(|| config.auto_refresh_interval());
        Self {
            config,
            updater: Updater {
                store: Arc::new(SnapshotStore::new()),
                source,
                scheduler,
                timers: Arc::new(Mutex::new(Timers::default())),
                background_period,
            },
        }
    }

    /// Begin the initial load and arm the background timer
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::AlreadyStarted`] on a second call and
    /// [`RefreshError::ShutDown`] after [`Self::shutdown`].
    #[instrument(skip(self))]
    pub fn start(&self) -> Result<()> {
        let mut timers = self.updater.timers.lock();
        if timers.started {
            return Err(RefreshError::AlreadyStarted);
        }
        if !self.updater.store.begin_loading() {
            return Err(RefreshError::ShutDown);
        }
        timers.started = true;

        let updater = self.updater.clone();
        timers.pending = Some(self.updater.scheduler.schedule_once(
            self.config.initial_load_delay(),
            Box::new(move || updater.finish(UpdateReason::InitialLoad)),
        ));

        timers.background = self.updater.background_timer();
        drop(timers);

        info!(
            delay_ms = self.config.initial_load_delay_ms,
            auto_refresh = self.config.auto_refresh_enabled,
            interval_secs = self.config.auto_refresh_interval_secs,
            source = self.updater.source.name(),
            "Refresh controller started"
        );
        Ok(())
    }

    /// Manual refresh
    ///
    /// Only an idle controller with a snapshot starts a refresh; at most one
    /// refresh timer is ever in flight.
    #[instrument(skip(self))]
    pub fn request_refresh(&self) -> RefreshOutcome {
        let outcome = self.updater.store.begin_refresh();
        if outcome != RefreshOutcome::Started {
            debug!(?outcome, "Refresh request ignored");
            return outcome;
        }

        let updater = self.updater.clone();
        let handle = self.updater.scheduler.schedule_once(
            self.config.refresh_delay(),
            Box::new(move || updater.finish(UpdateReason::Manual)),
        );

        let mut timers = self.updater.timers.lock();
        if self.updater.store.is_disposed() {
            return RefreshOutcome::ShutDown;
        }
        timers.pending = Some(handle);
        drop(timers);

        info!(delay_ms = self.config.refresh_delay_ms, "Manual refresh started");
        outcome
    }

    /// Current dashboard state
    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.updater.store.view()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> RefreshPhase {
        self.view().phase
    }

    /// Receiver notified after every phase change or snapshot replacement
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.updater.store.subscribe()
    }

    /// Cancel every timer and reject all further writes; idempotent
    #[instrument(skip(self))]
    pub fn shutdown(&self) {
        self.updater.store.dispose();

        let mut timers = self.updater.timers.lock();
        let pending = timers.pending.take();
        let background = timers.background.take();
        drop(timers);

        if pending.is_some() || background.is_some() {
            info!(generation = self.view().generation, "Refresh controller shut down");
        }
        drop((pending, background));
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
