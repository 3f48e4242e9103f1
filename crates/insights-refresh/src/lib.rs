//! Refresh controller for the campaign insights dashboard
//!
//! A [`RefreshController`] owns the current [`AnalyticsSnapshot`] and
//! replaces it on a simulated initial load, on manual refresh requests and on
//! a background timer. Timers come from a [`Scheduler`]; [`TokioScheduler`]
//! runs them on the tokio runtime.
//!
//! [`AnalyticsSnapshot`]: insights_core::AnalyticsSnapshot

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod controller;
pub mod error;
pub mod scheduler;
pub mod store;

pub use controller::RefreshController;
pub use error::{RefreshError, Result};
pub use scheduler::{OnceTask, RepeatingTask, Scheduler, TimerHandle, TokioScheduler};
pub use store::{DashboardView, RefreshOutcome, RefreshPhase, SnapshotStore};
