//! Password hashing for dashboard accounts.

pub mod password;

pub use password::{hash_password, verify_password};
