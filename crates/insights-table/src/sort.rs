//! Single-key stable sorting of campaign rows

use insights_core::{CampaignRow, Error};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Campaign name
    #[default]
    Campaign,
    /// Impressions
    Impressions,
    /// Clicks
    Clicks,
    /// Conversions
    Conversions,
    /// Spend
    Spend,
    /// Click-through rate
    Ctr,
    /// Cost per acquisition
    Cpa,
    /// Status label
    Status,
}

impl SortField {
    /// All columns in display order
    pub const ALL: [Self; 8] = [
        Self::Campaign,
        Self::Impressions,
        Self::Clicks,
        Self::Conversions,
        Self::Spend,
        Self::Ctr,
        Self::Cpa,
        Self::Status,
    ];

    /// Column key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Campaign => "campaign",
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::Conversions => "conversions",
            Self::Spend => "spend",
            Self::Ctr => "ctr",
            Self::Cpa => "cpa",
            Self::Status => "status",
        }
    }

    /// Whether the column holds text rather than numbers
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Campaign | Self::Status)
    }

    /// Text value of this column, if it is a text column
    fn text(self, row: &CampaignRow) -> Option<&str> {
        match self {
            Self::Campaign => Some(&row.campaign),
            Self::Status => Some(row.status.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation("sort", format!("unknown sort field '{wanted}'")))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Accent- and case-insensitive sort key with the raw text as tiebreak
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: String,
    raw: String,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        Self {
            primary: text
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            raw: text.to_string(),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Ascending comparison of two rows on `field`
#[must_use]
pub fn compare_rows(a: &CampaignRow, b: &CampaignRow, field: SortField) -> Ordering {
    match field {
        SortField::Campaign => compare_text(&a.campaign, &b.campaign),
        SortField::Impressions => a.impressions.cmp(&b.impressions),
        SortField::Clicks => a.clicks.cmp(&b.clicks),
        SortField::Conversions => a.conversions.cmp(&b.conversions),
        SortField::Spend => a.spend.total_cmp(&b.spend),
        SortField::Ctr => a.ctr.total_cmp(&b.ctr),
        SortField::Cpa => a.cpa.total_cmp(&b.cpa),
        SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
    }
}

/// Sort rows in place by one column
///
/// The sort is stable in both directions: rows with equal keys keep their
/// relative input order.
pub fn sort_rows(rows: &mut [&CampaignRow], field: SortField, direction: SortDirection) {
    let text_key = |row: &&CampaignRow| field.text(row).map(CollationKey::new);

    match (field.is_text(), direction) {
        (true, SortDirection::Ascending) => rows.sort_by_cached_key(text_key),
        (true, SortDirection::Descending) => rows.sort_by_cached_key(|row| Reverse(text_key(row))),
        (false, _) => rows.sort_by(|a, b| direction.apply(compare_rows(a, b, field))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use insights_core::CampaignStatus;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn row(id: &str, campaign: &str, spend: f64, status: CampaignStatus) -> CampaignRow {
        CampaignRow {
            id: id.to_string(),
            campaign: campaign.to_string(),
            impressions: 10_000,
            clicks: 250,
            conversions: 20,
            spend,
            ctr: 2.5,
            cpa: spend / 20.0,
            status,
        }
    }

    fn ids(rows: &[&CampaignRow]) -> Vec<String> {
        rows.iter().map(|row| row.id.clone()).collect()
    }

    #[rstest]
    #[case("campaign", SortField::Campaign)]
    #[case("CTR", SortField::Ctr)]
    #[case(" spend ", SortField::Spend)]
    fn test_sort_field_parsing(#[case] input: &str, #[case] expected: SortField) {
        assert_eq!(input.parse::<SortField>().unwrap(), expected);
    }

    #[test]
    fn test_sort_field_rejects_unknown() {
        assert!("budget".parse::<SortField>().is_err());
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
    }

    #[test]
    fn test_text_collation_ignores_case_and_accents() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Émail", "Email"), Ordering::Greater);
        assert_eq!(compare_text("émail", "Fax"), Ordering::Less);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_campaign() {
        let data = vec![
            row("1", "zeta", 1.0, CampaignStatus::Active),
            row("2", "Alpha", 2.0, CampaignStatus::Active),
            row("3", "beta", 3.0, CampaignStatus::Active),
        ];
        let mut rows: Vec<&CampaignRow> = data.iter().collect();

        sort_rows(&mut rows, SortField::Campaign, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);

        sort_rows(&mut rows, SortField::Campaign, SortDirection::Descending);
        assert_eq!(ids(&rows), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let data = vec![
            row("1", "a", 5.0, CampaignStatus::Paused),
            row("2", "b", 1.0, CampaignStatus::Active),
            row("3", "c", 5.0, CampaignStatus::Paused),
            row("4", "d", 1.0, CampaignStatus::Active),
        ];

        let mut rows: Vec<&CampaignRow> = data.iter().collect();
        sort_rows(&mut rows, SortField::Spend, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3"]);

        let mut rows: Vec<&CampaignRow> = data.iter().collect();
        sort_rows(&mut rows, SortField::Spend, SortDirection::Descending);
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);

        let mut rows: Vec<&CampaignRow> = data.iter().collect();
        sort_rows(&mut rows, SortField::Status, SortDirection::Descending);
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_status_sorts_by_label() {
        let data = vec![
            row("1", "a", 1.0, CampaignStatus::Paused),
            row("2", "b", 1.0, CampaignStatus::Completed),
            row("3", "c", 1.0, CampaignStatus::Active),
        ];
        let mut rows: Vec<&CampaignRow> = data.iter().collect();

        sort_rows(&mut rows, SortField::Status, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec!["3", "2", "1"]);
    }

    proptest! {
        #[test]
        fn test_sort_is_idempotent(
            spends in proptest::collection::vec(0.0f64..1000.0, 0..40),
            field_index in 0usize..SortField::ALL.len(),
            descending in any::<bool>(),
        ) {
            let data: Vec<CampaignRow> = spends
                .iter()
                .enumerate()
                .map(|(i, spend)| row(&i.to_string(), &format!("c{}", i % 7), *spend, CampaignStatus::ALL[i % 3]))
                .collect();
            let field = SortField::ALL[field_index];
            let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };

            let mut once: Vec<&CampaignRow> = data.iter().collect();
            sort_rows(&mut once, field, direction);
            let mut twice = once.clone();
            sort_rows(&mut twice, field, direction);

            prop_assert_eq!(ids(&once), ids(&twice));
            for pair in once.windows(2) {
                prop_assert_ne!(direction.apply(compare_rows(pair[0], pair[1], field)), Ordering::Greater);
            }
        }
    }
}
