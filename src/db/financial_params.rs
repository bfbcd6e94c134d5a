//! Database operations for financial parameters.

use sea_orm::*;

use crate::error::AppResult;

/// Count all financial parameters.
pub async fn count(db: &DatabaseConnection) -> AppResult<u64> {
    let total = crate::entity::financial_param::Entity::find()
        .count(db)
        .await?;
    Ok(total)
}
