//! Search and status filtering

use insights_core::{CampaignRow, CampaignStatus, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status selection of the table's filter dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// No status restriction
    #[default]
    All,
    /// Only rows with this status
    Only(CampaignStatus),
}

impl StatusFilter {
    /// Whether a row with `status` passes the filter
    #[must_use]
    pub fn matches(self, status: CampaignStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Rows matching `query` and `status`, in input order
///
/// The query matches case-insensitively as a substring of either the
/// campaign name or the status label. An empty query matches every row.
#[must_use]
pub fn filter_rows<'a>(
    rows: &'a [CampaignRow],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a CampaignRow> {
    let needle = query.to_lowercase();

    rows.iter()
        .filter(|row| status.matches(row.status))
        .filter(|row| {
            needle.is_empty()
                || row.campaign.to_lowercase().contains(&needle)
                || row.status.as_str().contains(&needle)
        })
        .collect()
}
