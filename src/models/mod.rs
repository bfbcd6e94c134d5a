//! Domain models for the RigOps backend.

pub mod inventory;
pub mod staging;
pub mod user;

// Re-export commonly used types
pub use inventory::TableCounts;
pub use staging::{BatchSummary, StagingStatus};
pub use user::{User, UserRole};
