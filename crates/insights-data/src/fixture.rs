//! The fixed 50-row campaign table

use insights_core::{CampaignRow, CampaignStatus};

use CampaignStatus::{Active, Completed, Paused};

type RawRow = (&'static str, &'static str, u64, u64, u64, f64, f64, f64, CampaignStatus);

#[rustfmt::skip]
const CAMPAIGNS: [RawRow; 50] = [
    ("1", "Summer Sale 2024", 125_000, 3500, 280, 8500.0, 2.8, 30.36, Active),
    ("2", "Brand Awareness Q3", 98_000, 2100, 145, 6200.0, 2.1, 42.76, Active),
    ("3", "Holiday Promotion", 156_000, 4200, 380, 12_000.0, 2.7, 31.58, Paused),
    ("4", "Product Launch", 87_000, 1800, 95, 4500.0, 2.1, 47.37, Completed),
    ("5", "Retargeting Campaign", 45_000, 1200, 150, 3200.0, 2.7, 21.33, Active),
    ("6", "Mobile App Install", 234_000, 6800, 520, 15_600.0, 2.9, 30.0, Active),
    ("7", "Video Marketing Q3", 189_000, 5200, 415, 11_800.0, 2.8, 28.43, Active),
    ("8", "Black Friday 2024", 512_000, 18_900, 1250, 28_500.0, 3.7, 22.8, Completed),
    ("9", "Newsletter Signup", 67_000, 1850, 285, 4200.0, 2.8, 14.74, Active),
    ("10", "Influencer Partnership", 145_000, 4100, 320, 9200.0, 2.8, 28.75, Paused),
    ("11", "Google Ads Campaign", 298_000, 8900, 670, 18_700.0, 3.0, 27.91, Active),
    ("12", "Facebook Ads Q4", 178_000, 4950, 385, 12_100.0, 2.8, 31.43, Active),
    ("13", "Instagram Stories Ads", 203_000, 5800, 420, 13_200.0, 2.9, 31.43, Active),
    ("14", "LinkedIn B2B Campaign", 89_000, 2100, 180, 7800.0, 2.4, 43.33, Active),
    ("15", "YouTube Video Ads", 456_000, 12_400, 890, 22_100.0, 2.7, 24.83, Active),
    ("16", "Twitter Promoted Tweets", 134_000, 3200, 240, 8600.0, 2.4, 35.83, Paused),
    ("17", "TikTok Brand Takeover", 678_000, 15_600, 1120, 31_200.0, 2.3, 27.86, Active),
    ("18", "Pinterest Shopping Ads", 167_000, 4100, 310, 9800.0, 2.5, 31.61, Active),
    ("19", "Snapchat Discover", 289_000, 7200, 520, 16_400.0, 2.5, 31.54, Active),
    ("20", "Amazon DSP Campaign", 345_000, 8900, 650, 19_800.0, 2.6, 30.46, Active),
    ("21", "Email Marketing Blast", 78_000, 2800, 420, 5600.0, 3.6, 13.33, Completed),
    ("22", "SEO Content Campaign", 234_000, 8900, 780, 12_300.0, 3.8, 15.77, Active),
    ("23", "Affiliate Marketing", 156_000, 4200, 340, 11_200.0, 2.7, 32.94, Active),
    ("24", "Podcast Sponsorship", 89_000, 1900, 145, 6800.0, 2.1, 46.9, Paused),
    ("25", "Webinar Promotion", 123_000, 3100, 280, 8900.0, 2.5, 31.79, Active),
    ("26", "Display Network Q4", 445_000, 11_200, 820, 24_600.0, 2.5, 30.0, Active),
    ("27", "Native Advertising", 267_000, 6400, 480, 15_800.0, 2.4, 32.92, Active),
    ("28", "Programmatic Buying", 378_000, 9800, 720, 22_100.0, 2.6, 30.69, Active),
    ("29", "Local Search Ads", 134_000, 4200, 380, 11_600.0, 3.1, 30.53, Active),
    ("30", "Connected TV Ads", 556_000, 12_800, 920, 28_400.0, 2.3, 30.87, Active),
    ("31", "Audio Streaming Ads", 234_000, 5600, 410, 14_200.0, 2.4, 34.63, Active),
    ("32", "Remarketing Display", 89_000, 2800, 320, 7800.0, 3.1, 24.38, Active),
    ("33", "Social Commerce Ads", 178_000, 4900, 380, 12_800.0, 2.8, 33.68, Paused),
    ("34", "Influencer Micro Campaign", 156_000, 3800, 290, 9600.0, 2.4, 33.1, Active),
    ("35", "AR Filter Marketing", 345_000, 8200, 580, 18_600.0, 2.4, 32.07, Active),
    ("36", "Gaming Platform Ads", 467_000, 11_400, 820, 25_200.0, 2.4, 30.73, Active),
    ("37", "Voice Search Optimization", 123_000, 3600, 310, 9200.0, 2.9, 29.68, Active),
    ("38", "Chatbot Engagement", 89_000, 2400, 220, 6800.0, 2.7, 30.91, Active),
    ("39", "QR Code Campaign", 67_000, 1800, 160, 4900.0, 2.7, 30.63, Completed),
    ("40", "Virtual Event Promotion", 178_000, 4200, 320, 11_600.0, 2.4, 36.25, Active),
    ("41", "Community Building", 234_000, 6800, 520, 15_800.0, 2.9, 30.38, Active),
    ("42", "User Generated Content", 145_000, 4100, 340, 10_200.0, 2.8, 30.0, Active),
    ("43", "Geofencing Campaign", 267_000, 6200, 460, 16_400.0, 2.3, 35.65, Active),
    ("44", "Cross-Platform Retargeting", 189_000, 5400, 420, 13_800.0, 2.9, 32.86, Active),
    ("45", "Seasonal Flash Sale", 345_000, 9800, 780, 22_600.0, 2.8, 28.97, Completed),
    ("46", "Brand Partnership Collab", 156_000, 3900, 290, 11_200.0, 2.5, 38.62, Paused),
    ("47", "AI-Powered Personalization", 278_000, 7800, 620, 18_900.0, 2.8, 30.48, Active),
    ("48", "Interactive Content Hub", 123_000, 3400, 280, 8600.0, 2.8, 30.71, Active),
    ("49", "Omnichannel Integration", 445_000, 12_600, 950, 28_800.0, 2.8, 30.32, Active),
    ("50", "Performance Max Campaign", 567_000, 15_800, 1180, 34_200.0, 2.8, 29.0, Active),
];

/// Number of rows in [`campaign_fixture`]
pub const FIXTURE_LEN: usize = CAMPAIGNS.len();

/// The campaign rows shipped with every mock snapshot, in id order
#[must_use]
pub fn campaign_fixture() -> Vec<CampaignRow> {
    CAMPAIGNS
        .iter()
        .map(
            |&(id, campaign, impressions, clicks, conversions, spend, ctr, cpa, status)| {
                CampaignRow {
                    id: id.to_string(),
                    campaign: campaign.to_string(),
                    impressions,
                    clicks,
                    conversions,
                    spend,
                    ctr,
                    cpa,
                    status,
                }
            },
        )
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique_and_ordered() {
        let rows = campaign_fixture();
        let ids: HashSet<&str> = rows.iter().map(|row| row.id.as_str()).collect();

        assert_eq!(rows.len(), FIXTURE_LEN);
        assert_eq!(ids.len(), rows.len());
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.id, (index + 1).to_string());
        }
    }

    #[test]
    fn test_fixture_status_counts() {
        let rows = campaign_fixture();
        let count = |status| rows.iter().filter(|row| row.status == status).count();

        assert_eq!(count(Active), 39);
        assert_eq!(count(Paused), 6);
        assert_eq!(count(Completed), 5);
    }

    #[test]
    fn test_fixture_numerics_are_non_negative() {
        for row in campaign_fixture() {
            assert!(row.spend >= 0.0, "row {} spend", row.id);
            assert!(row.ctr >= 0.0, "row {} ctr", row.id);
            assert!(row.cpa >= 0.0, "row {} cpa", row.id);
            assert!(row.clicks <= row.impressions, "row {} clicks", row.id);
        }
    }

    #[test]
    fn test_fixture_spot_checks() {
        let rows = campaign_fixture();

        assert_eq!(rows[0].campaign, "Summer Sale 2024");
        assert_eq!(rows[7].campaign, "Black Friday 2024");
        assert_eq!(rows[7].impressions, 512_000);
        assert_eq!(rows[49].spend, 34_200.0);
        assert_eq!(rows[49].cpa, 29.0);
    }
}
