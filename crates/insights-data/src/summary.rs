//! Aggregate figures for the campaign overview panel

use insights_core::{AnalyticsSnapshot, CampaignRow, CampaignStatus};
use serde::{Deserialize, Serialize};

/// Campaign-level summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    /// Number of campaigns
    pub total_campaigns: usize,
    /// Number of campaigns with status active
    pub active_campaigns: usize,
    /// Sum of spend across all campaigns
    pub total_spend: f64,
    /// Mean click-through rate in percent, 0 when there are no campaigns
    pub avg_ctr: f64,
    /// Mean cost per acquisition, 0 when there are no campaigns
    pub avg_cpa: f64,
    /// Share of campaigns that are active, in percent
    pub active_rate: f64,
    /// Best performing traffic channel, if known
    pub top_channel: Option<String>,
}

impl CampaignSummary {
    /// Summarize campaign rows; `top_channel` is left empty
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_rows(rows: &[CampaignRow]) -> Self {
        let total_campaigns = rows.len();
        let active_campaigns = rows
            .iter()
            .filter(|row| row.status == CampaignStatus::Active)
            .count();
        let total_spend: f64 = rows.iter().map(|row| row.spend).sum();

        let mean = |sum: f64| {
            if total_campaigns == 0 {
                0.0
            } else {
                sum / total_campaigns as f64
            }
        };

        Self {
            total_campaigns,
            active_campaigns,
            total_spend,
            avg_ctr: mean(rows.iter().map(|row| row.ctr).sum()),
            avg_cpa: mean(rows.iter().map(|row| row.cpa).sum()),
            active_rate: mean(active_campaigns as f64 * 100.0),
            top_channel: None,
        }
    }

    /// Summarize a snapshot, taking the top channel from its channel series
    #[must_use]
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            top_channel: snapshot.channel_series.labels().first().cloned(),
            ..Self::from_rows(&snapshot.campaigns)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::{campaign_fixture, generate};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixture_summary() {
        let summary = CampaignSummary::from_rows(&campaign_fixture());

        assert_eq!(summary.total_campaigns, 50);
        assert_eq!(summary.active_campaigns, 39);
        assert_eq!(summary.total_spend, 711_900.0);
        assert!((summary.avg_ctr - 2.694).abs() < 1e-9);
        assert!((summary.avg_cpa - 30.8628).abs() < 1e-9);
        assert!((summary.active_rate - 78.0).abs() < 1e-9);
        assert_eq!(summary.top_channel, None);
    }

    #[test]
    fn test_snapshot_summary_has_top_channel() {
        let summary = CampaignSummary::from_snapshot(&generate());

        assert_eq!(summary.top_channel.as_deref(), Some("Organic Search"));
        assert_eq!(summary.total_campaigns, 50);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = CampaignSummary::from_rows(&[]);

        assert_eq!(summary.total_campaigns, 0);
        assert_eq!(summary.total_spend, 0.0);
        assert_eq!(summary.avg_ctr, 0.0);
        assert_eq!(summary.avg_cpa, 0.0);
        assert_eq!(summary.active_rate, 0.0);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = CampaignSummary::from_snapshot(&generate());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["active_campaigns"], 39);
        assert_eq!(json["top_channel"], "Organic Search");
    }
}
