//! Business logic services.

pub mod accounts;
pub mod embedding;
pub mod inventory;

pub use accounts::{LoginCheck, ResetOutcome, SeedReport, SeedUser};
pub use embedding::EmbeddingEngine;
