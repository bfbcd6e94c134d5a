//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_users;
mod m20260302_000002_create_import_staging;
mod m20260302_000003_create_drilling_entries;
mod m20260302_000004_create_financial_params;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_users::Migration),
            Box::new(m20260302_000002_create_import_staging::Migration),
            Box::new(m20260302_000003_create_drilling_entries::Migration),
            Box::new(m20260302_000004_create_financial_params::Migration),
        ]
    }
}
