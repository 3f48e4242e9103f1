//! Mock analytics data for the campaign insights dashboard
//!
//! Everything here is deterministic: two calls to [`generate`] return
//! bit-identical snapshots on every platform.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod fixture;
pub mod generator;
pub mod summary;
pub mod trig;

pub use fixture::campaign_fixture;
pub use generator::{
    CHANNEL_LABELS, CHANNEL_SHARES, MONTHS, MULTIPLIERS, MockSnapshotSource, SnapshotSource,
    generate,
};
pub use summary::CampaignSummary;
