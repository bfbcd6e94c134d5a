//! SeaORM entity definitions for PostgreSQL database.

pub mod drilling_entry;
pub mod financial_param;
pub mod import_staging;
pub mod user;
