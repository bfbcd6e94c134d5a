//! Migration: Create financial parameters table.

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
                CREATE TABLE financial_params (
                    id BIGSERIAL PRIMARY KEY,
                    name VARCHAR(120) NOT NULL UNIQUE,
                    value DOUBLE PRECISION NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS financial_params CASCADE;")
            .await?;

        Ok(())
    }
}
