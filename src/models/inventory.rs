//! Row-count models for the database inventory tools.

use serde::Serialize;

/// Row counts across the tables the dashboard reads.
#[derive(Debug, Clone, Serialize)]
pub struct TableCounts {
    pub users: u64,
    pub import_staging: u64,
    pub drilling_entries: u64,
    pub financial_params: u64,
    /// Drilling entries created inside the recency window
    pub recent_drilling_entries: u64,
}

impl TableCounts {
    /// True when every tracked table is empty.
    pub fn is_empty(&self) -> bool {
        self.users == 0
            && self.import_staging == 0
            && self.drilling_entries == 0
            && self.financial_params == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        let counts = TableCounts {
            users: 0,
            import_staging: 0,
            drilling_entries: 0,
            financial_params: 0,
            recent_drilling_entries: 0,
        };
        assert!(counts.is_empty());

        let counts = TableCounts {
            users: 3,
            ..counts
        };
        assert!(!counts.is_empty());
    }
}
