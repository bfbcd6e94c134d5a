//! RigOps server library.
//!
//! This library provides the core functionality for the fleet-maintenance and
//! drilling-operations backend, including database operations, account
//! management, and the HTTP API surface used by the dashboard.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
