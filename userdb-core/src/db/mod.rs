//! Database layer for userdb
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations tracked via PRAGMA user_version
//! - Repository pattern for the user CRUD surface

pub mod repo;
pub mod schema;

pub use repo::Database;
pub use schema::SCHEMA_VERSION;
