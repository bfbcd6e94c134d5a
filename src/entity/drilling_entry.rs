//! Drilling log entry entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "drilling_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub well_name: String,
    pub depth_m: Option<f64>,
    pub entered_on: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
