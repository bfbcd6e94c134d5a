//! Database operations for the import staging table.

use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;

/// Count all staged rows.
pub async fn count(db: &DatabaseConnection) -> AppResult<u64> {
    let total = crate::entity::import_staging::Entity::find()
        .count(db)
        .await?;
    Ok(total)
}

/// Fetch the newest staged row by creation time.
pub async fn latest(
    db: &DatabaseConnection,
) -> AppResult<Option<crate::entity::import_staging::Model>> {
    let result = crate::entity::import_staging::Entity::find()
        .order_by_desc(crate::entity::import_staging::Column::CreatedAt)
        .one(db)
        .await?;

    Ok(result)
}

/// Count staged rows belonging to one batch.
pub async fn count_in_batch(db: &DatabaseConnection, batch_id: Uuid) -> AppResult<u64> {
    let total = crate::entity::import_staging::Entity::find()
        .filter(crate::entity::import_staging::Column::BatchId.eq(batch_id))
        .count(db)
        .await?;

    Ok(total)
}
