//! Migration: Create drilling entries table.
//!
//! Daily drilling log rows; the dashboard's recency widget filters on
//! created_at.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE drilling_entries (
                    id BIGSERIAL PRIMARY KEY,
                    well_name VARCHAR(120) NOT NULL,
                    depth_m DOUBLE PRECISION,
                    entered_on DATE NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Index for recency filtering
                CREATE INDEX idx_drilling_entries_created_at ON drilling_entries(created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS drilling_entries CASCADE;")
            .await?;

        Ok(())
    }
}
