//! Snapshot store guarded by a single lock
//!
//! Every phase transition and snapshot replacement happens under one
//! [`parking_lot::Mutex`], so a timer callback never observes a transition
//! half done. Once disposed the store rejects all writes.

use chrono::{DateTime, Utc};
use insights_core::AnalyticsSnapshot;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Loading state of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Initial load in flight, no snapshot yet
    Loading,
    /// Manual refresh in flight, the previous snapshot stays visible
    Refreshing,
}

impl RefreshPhase {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Refreshing => "refreshing",
        }
    }
}

impl fmt::Display for RefreshPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a manual refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshOutcome {
    /// A refresh was scheduled
    Started,
    /// A refresh is already in flight; nothing was scheduled
    AlreadyInFlight,
    /// The initial load has not finished; nothing was scheduled
    NotReady,
    /// The controller was shut down
    ShutDown,
}

/// Read-only view of the dashboard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    /// Current phase
    pub phase: RefreshPhase,
    /// Latest snapshot, if any load has completed
    pub snapshot: Option<Arc<AnalyticsSnapshot>>,
    /// When the latest snapshot was produced
    pub last_updated: Option<DateTime<Utc>>,
    /// Number of snapshot replacements so far
    pub generation: u64,
}

#[derive(Debug, Default)]
struct StoreState {
    view: DashboardView,
    disposed: bool,
}

/// Owner of the current snapshot and phase
#[derive(Debug)]
pub struct SnapshotStore {
    state: Mutex<StoreState>,
    updates: watch::Sender<DashboardView>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// Create an empty, idle store
    #[must_use]
    pub fn new() -> Self {
        let (updates, _) = watch::channel(DashboardView::default());
        Self {
            state: Mutex::new(StoreState::default()),
            updates,
        }
    }

    /// Current view
    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.state.lock().view.clone()
    }

    /// Receiver notified after every transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.updates.subscribe()
    }

    /// Whether [`Self::dispose`] was called
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    /// Enter `Loading`; returns `false` if disposed
    pub fn begin_loading(&self) -> bool {
        self.transition(|view| {
            view.phase = RefreshPhase::Loading;
            true
        })
        .unwrap_or(false)
    }

    /// Enter `Refreshing` if idle with a snapshot
    pub fn begin_refresh(&self) -> RefreshOutcome {
        self.transition(|view| match (view.phase, &view.snapshot) {
            (RefreshPhase::Idle, Some(_)) => {
                view.phase = RefreshPhase::Refreshing;
                RefreshOutcome::Started
            }
            (RefreshPhase::Refreshing, _) => RefreshOutcome::AlreadyInFlight,
            (RefreshPhase::Loading | RefreshPhase::Idle, _) => RefreshOutcome::NotReady,
        })
        .unwrap_or(RefreshOutcome::ShutDown)
    }

    /// Finish a load or refresh with a new snapshot and return to `Idle`
    ///
    /// Returns the new generation, or `None` if the store was disposed.
    pub fn complete(&self, snapshot: Arc<AnalyticsSnapshot>, at: DateTime<Utc>) -> Option<u64> {
        self.transition(|view| {
            view.phase = RefreshPhase::Idle;
            Self::replace(view, snapshot, at)
        })
    }

    /// Finish a load or refresh without a new snapshot
    pub fn abort(&self) {
        self.transition(|view| view.phase = RefreshPhase::Idle);
    }

    /// Whether a background replacement would currently be accepted
    #[must_use]
    pub fn accepts_background(&self) -> bool {
        let state = self.state.lock();
        !state.disposed && Self::is_quiet(&state.view)
    }

    /// Replace the snapshot in place, only when idle with a snapshot
    ///
    /// Returns the new generation, or `None` if the replacement was refused.
    pub fn replace_if_idle(
        &self,
        snapshot: Arc<AnalyticsSnapshot>,
        at: DateTime<Utc>,
    ) -> Option<u64> {
        self.transition(|view| Self::is_quiet(view).then(|| Self::replace(view, snapshot, at)))
            .flatten()
    }

    /// Reject all further writes
    pub fn dispose(&self) {
        self.state.lock().disposed = true;
    }

    const fn is_quiet(view: &DashboardView) -> bool {
        matches!(view.phase, RefreshPhase::Idle) && view.snapshot.is_some()
    }

    fn replace(view: &mut DashboardView, snapshot: Arc<AnalyticsSnapshot>, at: DateTime<Utc>) -> u64 {
        view.snapshot = Some(snapshot);
        view.last_updated = Some(at);
        view.generation += 1;
        view.generation
    }

    /// Apply `change` under the lock and publish the result; `None` if disposed
    fn transition<T>(&self, change: impl FnOnce(&mut DashboardView) -> T) -> Option<T> {
        let mut state = self.state.lock();
        if state.disposed {
            return None;
        }

        let before = (state.view.phase, state.view.generation);
        let result = change(&mut state.view);
        if (state.view.phase, state.view.generation) != before {
            self.updates.send_replace(state.view.clone());
        }
        drop(state);

        Some(result)
    }
}
