//! Migration: Create import staging table.
//!
//! Holding table for freshly ingested records pending validation. Rows
//! ingested together share a batch_id.

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
                CREATE TABLE import_staging (
                    id BIGSERIAL PRIMARY KEY,
                    batch_id UUID NOT NULL,
                    status VARCHAR(20) NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'processing', 'imported', 'failed')),

                    -- Raw ingested record, schema validated downstream
                    payload JSONB NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Index for batch membership counts
                CREATE INDEX idx_import_staging_batch_id ON import_staging(batch_id);

                -- Index for newest-batch lookups
                CREATE INDEX idx_import_staging_created_at ON import_staging(created_at DESC);

                -- Trigger to update updated_at
                CREATE TRIGGER update_import_staging_updated_at
                    BEFORE UPDATE ON import_staging
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_import_staging_updated_at ON import_staging;
                DROP TABLE IF EXISTS import_staging CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
