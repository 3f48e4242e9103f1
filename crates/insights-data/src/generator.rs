//! Mock snapshot generation
//!
//! The generator is total and side-effect free. The monthly series combine a
//! sinusoid with a fixed multiplier sequence so that a chart looks organic
//! while staying reproducible.

use crate::fixture::campaign_fixture;
use crate::trig::sine;
use insights_core::{AnalyticsSnapshot, ChartSeries, Icon, MetricCard, Result, Trend};
use tracing::debug;

/// Month labels for the monthly series
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-month multipliers standing in for random noise
pub const MULTIPLIERS: [f64; 12] = [0.3, 0.7, 0.2, 0.8, 0.5, 0.9, 0.1, 0.6, 0.4, 0.75, 0.25, 0.85];

/// Traffic channel labels, best performing first
pub const CHANNEL_LABELS: [&str; 7] = [
    "Organic Search",
    "Paid Search",
    "Social Media",
    "Email",
    "Direct",
    "Referral",
    "Display",
];

/// Traffic share per channel in percent
pub const CHANNEL_SHARES: [f64; 7] = [32.0, 24.0, 18.0, 12.0, 8.0, 4.0, 2.0];

/// Shape of one sinusoidal monthly series
struct MonthlyCurve {
    base: f64,
    frequency: f64,
    amplitude: f64,
    noise: f64,
    floor: f64,
}

const REVENUE_CURVE: MonthlyCurve = MonthlyCurve {
    base: 65_000.0,
    frequency: 0.5,
    amplitude: 15_000.0,
    noise: 10_000.0,
    floor: 40_000.0,
};

const CONVERSION_CURVE: MonthlyCurve = MonthlyCurve {
    base: 1_200.0,
    frequency: 0.7,
    amplitude: 300.0,
    noise: 200.0,
    floor: 800.0,
};

impl MonthlyCurve {
    #[allow(clippy::cast_precision_loss)]
    fn values(&self) -> [f64; 12] {
        let mut values = MULTIPLIERS;
        for (index, value) in values.iter_mut().enumerate() {
            let trend = sine(index as f64 * self.frequency) * self.amplitude + *value * self.noise;
            *value = (self.base + trend).max(self.floor);
        }
        values
    }
}

/// Source of complete analytics snapshots
///
/// The refresh controller only talks to this trait, so a real backend can
/// replace the mock without touching the state machine.
pub trait SnapshotSource: Send + Sync {
    /// Produce a complete snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a snapshot.
    fn snapshot(&self) -> Result<AnalyticsSnapshot>;

    /// Human-readable name for logs
    fn name(&self) -> &'static str;
}

/// [`SnapshotSource`] backed by [`generate`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSnapshotSource;

impl MockSnapshotSource {
    /// Create a new mock source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn snapshot(&self) -> Result<AnalyticsSnapshot> {
        Ok(generate())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn card(title: &str, value: &str, change: f64, icon: Icon, trend: Trend) -> MetricCard {
    MetricCard {
        title: title.to_string(),
        value: value.to_string(),
        change,
        icon,
        trend,
    }
}

fn overview_cards() -> Vec<MetricCard> {
    vec![
        card("Total Revenue", "$2,847,532", 15.7, Icon::DollarSign, Trend::Up),
        card("Active Users", "156,789", 12.3, Icon::Users, Trend::Up),
        card("Conversions", "8,456", 8.9, Icon::Target, Trend::Up),
        card("Growth Rate", "23.4%", 4.2, Icon::TrendingUp, Trend::Up),
        card("Click Rate", "3.2%", 1.8, Icon::MousePointer, Trend::Up),
        card("Cost per Click", "$2.45", -6.3, Icon::CreditCard, Trend::Down),
    ]
}

/// Build one complete mock snapshot
#[must_use]
pub fn generate() -> AnalyticsSnapshot {
    let snapshot = AnalyticsSnapshot {
        overview: overview_cards(),
        revenue_series: ChartSeries::from_arrays("Revenue", MONTHS, REVENUE_CURVE.values()),
        conversion_series: ChartSeries::from_arrays(
            "Conversions",
            MONTHS,
            CONVERSION_CURVE.values(),
        ),
        channel_series: ChartSeries::from_arrays("Traffic Sources", CHANNEL_LABELS, CHANNEL_SHARES),
        campaigns: campaign_fixture(),
    };

    debug!(
        cards = snapshot.overview.len(),
        campaigns = snapshot.campaigns.len(),
        "Generated mock snapshot"
    );
    snapshot
}
