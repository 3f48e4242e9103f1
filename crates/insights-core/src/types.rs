//! Core data types for the campaign insights dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of overview cards shown in the headline row
pub const HEADLINE_CARD_COUNT: usize = 4;

/// Icon identifiers known to the card renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    /// Currency figures
    DollarSign,
    /// User counts
    Users,
    /// Conversion goals
    Target,
    /// Upward trend, also used for growth figures
    TrendingUp,
    /// Downward trend
    TrendingDown,
    /// Click-through figures
    MousePointer,
    /// Cost figures
    CreditCard,
}

impl Icon {
    /// All known icons
    pub const ALL: [Self; 7] = [
        Self::DollarSign,
        Self::Users,
        Self::Target,
        Self::TrendingUp,
        Self::TrendingDown,
        Self::MousePointer,
        Self::CreditCard,
    ];

    /// Stable renderer handle for this icon
    #[must_use]
    pub const fn handle(self) -> &'static str {
        match self {
            Self::DollarSign => "dollar-sign",
            Self::Users => "users",
            Self::Target => "target",
            Self::TrendingUp => "trending-up",
            Self::TrendingDown => "trending-down",
            Self::MousePointer => "mouse-pointer",
            Self::CreditCard => "credit-card",
        }
    }

    /// Text glyph used by terminal renderers
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::DollarSign => "$",
            Self::Users => "@",
            Self::Target => "◎",
            Self::TrendingUp => "↗",
            Self::TrendingDown => "↘",
            Self::MousePointer => "➚",
            Self::CreditCard => "▭",
        }
    }
}

/// Direction of a metric's change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Metric went up
    Up,
    /// Metric went down
    Down,
}

impl Trend {
    /// Indicator icon for the trend badge
    #[must_use]
    pub const fn indicator(self) -> Icon {
        match self {
            Self::Up => Icon::TrendingUp,
            Self::Down => Icon::TrendingDown,
        }
    }
}

/// One overview metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Card title
    pub title: String,
    /// Pre-formatted display value
    pub value: String,
    /// Signed change in percent from last month
    pub change: f64,
    /// Card icon
    pub icon: Icon,
    /// Trend direction
    pub trend: Trend,
}

/// A labelled data point handed to chart renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category name
    pub name: String,
    /// Value for the category
    pub value: f64,
}

/// Index-aligned category labels and values for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChartSeries")]
pub struct ChartSeries {
    label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawChartSeries {
    label: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawChartSeries> for ChartSeries {
    type Error = crate::Error;

    fn try_from(raw: RawChartSeries) -> crate::Result<Self> {
        Self::new(raw.label, raw.labels, raw.values)
    }
}

impl ChartSeries {
    /// Create a series, rejecting labels and values of different lengths
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SeriesLength`] when the two sequences are not
    /// the same length.
    pub fn new<S: Into<String>>(
        label: S,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> crate::Result<Self> {
        if labels.len() != values.len() {
            return Err(crate::Error::SeriesLength {
                labels: labels.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            label: label.into(),
            labels,
            values,
        })
    }

    /// Create a series from fixed-size arrays, which are aligned by type
    #[must_use]
    pub fn from_arrays<const N: usize>(label: &str, labels: [&str; N], values: [f64; N]) -> Self {
        Self {
            label: label.to_string(),
            labels: labels.iter().map(|name| (*name).to_string()).collect(),
            values: values.to_vec(),
        }
    }

    /// Dataset label, e.g. "Revenue"
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Category labels
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Values, index-aligned with [`Self::labels`]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Zip labels and values into name/value pairs
    #[must_use]
    pub fn points(&self) -> Vec<ChartPoint> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(name, value)| ChartPoint {
                name: name.clone(),
                value: *value,
            })
            .collect()
    }
}

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Currently running
    Active,
    /// Temporarily stopped
    Paused,
    /// Finished
    Completed,
}

impl CampaignStatus {
    /// All statuses in display order
    pub const ALL: [Self; 3] = [Self::Active, Self::Paused, Self::Completed];

    /// Lowercase label, as matched by search and collated by status sort
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            other => Err(crate::Error::validation(
                "status",
                format!("unknown campaign status '{other}'"),
            )),
        }
    }
}

/// One row of the campaign table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    /// Identifier, unique within a snapshot
    pub id: String,
    /// Campaign name
    pub campaign: String,
    /// Ad impressions
    pub impressions: u64,
    /// Ad clicks
    pub clicks: u64,
    /// Conversions attributed to the campaign
    pub conversions: u64,
    /// Spend in dollars
    pub spend: f64,
    /// Click-through rate in percent
    pub ctr: f64,
    /// Cost per acquisition in dollars
    pub cpa: f64,
    /// Lifecycle status
    pub status: CampaignStatus,
}

/// One complete generated data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Overview metric cards in display order
    pub overview: Vec<MetricCard>,
    /// Monthly revenue
    pub revenue_series: ChartSeries,
    /// Monthly conversions
    pub conversion_series: ChartSeries,
    /// Traffic share by channel
    pub channel_series: ChartSeries,
    /// Campaign table rows
    pub campaigns: Vec<CampaignRow>,
}

impl AnalyticsSnapshot {
    /// Cards shown in the headline row
    #[must_use]
    pub fn headline_cards(&self) -> &[MetricCard] {
        self.overview
            .get(..HEADLINE_CARD_COUNT)
            .unwrap_or(&self.overview)
    }

    /// Look up a campaign row by id
    #[must_use]
    pub fn campaign(&self, id: &str) -> Option<&CampaignRow> {
        self.campaigns.iter().find(|row| row.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_series_rejects_misaligned_lengths() {
        let result = ChartSeries::new("Revenue", labels(&["Jan", "Feb"]), vec![1.0]);

        match result {
            Err(crate::Error::SeriesLength { labels, values }) => {
                assert_eq!(labels, 2);
                assert_eq!(values, 1);
            }
            other => panic!("Expected SeriesLength error, got {other:?}"),
        }
    }

    #[test]
    fn test_series_points_zip_labels_and_values() {
        let series =
            ChartSeries::new("Traffic", labels(&["Email", "Direct"]), vec![12.0, 8.0]).unwrap();

        assert_eq!(
            series.points(),
            vec![
                ChartPoint { name: "Email".to_string(), value: 12.0 },
                ChartPoint { name: "Direct".to_string(), value: 8.0 },
            ]
        );
        assert_eq!(series.label(), "Traffic");
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_from_arrays() {
        let series = ChartSeries::from_arrays("Revenue", ["Jan", "Feb"], [1.0, 2.0]);

        assert_eq!(series.labels(), &["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_series_deserialization_enforces_alignment() {
        let bad = r#"{"label":"Revenue","labels":["Jan","Feb"],"values":[1.0]}"#;
        assert!(serde_json::from_str::<ChartSeries>(bad).is_err());

        let good = r#"{"label":"Revenue","labels":["Jan"],"values":[1.0]}"#;
        let series: ChartSeries = serde_json::from_str(good).unwrap();
        assert_eq!(series.values(), &[1.0]);
    }

    #[test]
    fn test_status_labels_and_parsing() {
        for status in CampaignStatus::ALL {
            assert_eq!(status.as_str().parse::<CampaignStatus>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(" Paused ".parse::<CampaignStatus>().unwrap(), CampaignStatus::Paused);
        assert!("archived".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&CampaignStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_icon_handles_are_unique() {
        let mut handles: Vec<&str> = Icon::ALL.iter().map(|icon| icon.handle()).collect();
        handles.sort_unstable();
        handles.dedup();
        assert_eq!(handles.len(), Icon::ALL.len());
    }

    fn snapshot_with_cards(count: usize) -> AnalyticsSnapshot {
        let card = MetricCard {
            title: "Conversions".to_string(),
            value: "8,456".to_string(),
            change: 8.9,
            icon: Icon::Target,
            trend: Trend::Up,
        };
        AnalyticsSnapshot {
            overview: vec![card; count],
            revenue_series: ChartSeries::from_arrays("Revenue", [], []),
            conversion_series: ChartSeries::from_arrays("Conversions", [], []),
            channel_series: ChartSeries::from_arrays("Traffic Sources", [], []),
            campaigns: Vec::new(),
        }
    }

    #[test]
    fn test_headline_cards_cap_at_four() {
        assert_eq!(snapshot_with_cards(6).headline_cards().len(), HEADLINE_CARD_COUNT);
        assert_eq!(snapshot_with_cards(4).headline_cards().len(), 4);
        assert_eq!(snapshot_with_cards(2).headline_cards().len(), 2);
        assert!(snapshot_with_cards(0).headline_cards().is_empty());
    }

    #[test]
    fn test_trend_indicator() {
        assert_eq!(Trend::Up.indicator(), Icon::TrendingUp);
        assert_eq!(Trend::Down.indicator(), Icon::TrendingDown);
    }

    proptest! {
        #[test]
        fn test_series_construction_matches_length_equality(
            names in proptest::collection::vec("[A-Za-z]{1,8}", 0..20),
            values in proptest::collection::vec(0.0f64..1e6, 0..20),
        ) {
            let aligned = names.len() == values.len();
            let result = ChartSeries::new("series", names, values);
            prop_assert_eq!(result.is_ok(), aligned);
            if let Ok(series) = result {
                prop_assert_eq!(series.points().len(), series.len());
            }
        }
    }
}
