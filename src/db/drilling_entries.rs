//! Database operations for drilling log entries.

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::error::AppResult;

/// Count all drilling entries.
pub async fn count(db: &DatabaseConnection) -> AppResult<u64> {
    let total = crate::entity::drilling_entry::Entity::find()
        .count(db)
        .await?;
    Ok(total)
}

/// Count drilling entries created at or after the cutoff.
pub async fn count_since(db: &DatabaseConnection, cutoff: DateTime<Utc>) -> AppResult<u64> {
    let total = crate::entity::drilling_entry::Entity::find()
        .filter(crate::entity::drilling_entry::Column::CreatedAt.gte(cutoff))
        .count(db)
        .await?;

    Ok(total)
}
