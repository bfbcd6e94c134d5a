//! Database inventory service: row counts and import batch inspection.

use chrono::{Duration, Utc};

use crate::db::{DbPool, drilling_entries, financial_params, import_staging, users};
use crate::error::AppResult;
use crate::models::{BatchSummary, TableCounts};

/// Window for the "recent drilling entries" count, in days.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Collect row counts across the tables the dashboard reads.
///
/// Empty tables count as zero; an empty database is a valid answer, not an
/// error.
pub async fn collect_table_counts(pool: &DbPool) -> AppResult<TableCounts> {
    let conn = pool.connection();
    let cutoff = Utc::now() - Duration::days(RECENT_WINDOW_DAYS);

    Ok(TableCounts {
        users: users::count(conn).await?,
        import_staging: import_staging::count(conn).await?,
        drilling_entries: drilling_entries::count(conn).await?,
        financial_params: financial_params::count(conn).await?,
        recent_drilling_entries: drilling_entries::count_since(conn, cutoff).await?,
    })
}

/// Summarize the most recent import batch, if any rows are staged.
///
/// The newest staged row (by `created_at`) names the batch; the summary
/// carries that row's status and timestamp plus the batch's row count.
pub async fn latest_batch(pool: &DbPool) -> AppResult<Option<BatchSummary>> {
    let conn = pool.connection();

    let Some(newest) = import_staging::latest(conn).await? else {
        return Ok(None);
    };

    let row_count = import_staging::count_in_batch(conn, newest.batch_id).await?;

    Ok(Some(BatchSummary {
        batch_id: newest.batch_id,
        status: newest.status,
        created_at: newest.created_at,
        row_count,
    }))
}
