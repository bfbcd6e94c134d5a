//! Import staging models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle states of a staged import row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StagingStatus {
    #[default]
    Pending,
    Processing,
    Imported,
    Failed,
}

impl StagingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Imported => "imported",
            Self::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "imported" => Some(Self::Imported),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for StagingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of the most recent import batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Batch identifier shared by all rows ingested together
    pub batch_id: Uuid,
    /// Status of the newest row in the batch
    pub status: String,
    /// Timestamp of the newest row in the batch
    pub created_at: DateTime<Utc>,
    /// Number of staged rows sharing this batch id
    pub row_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            StagingStatus::Pending,
            StagingStatus::Processing,
            StagingStatus::Imported,
            StagingStatus::Failed,
        ] {
            assert_eq!(StagingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert_eq!(StagingStatus::parse("archived"), None);
    }
}
