//! Core domain types for userdb
//!
//! The store manages a single entity: the [`User`] record. The sibling
//! tables created by later schema versions (vehicles, jobs, housing,
//! medical) are schema-only and have no domain type.

use serde::{Deserialize, Serialize};

/// Timestamp format used for `created_at`, matching the wall-clock stamps
/// the original callers wrote (`2024-01-01 10:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A user record in the `usuario` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key, assigned by the store on insert. Never reused within
    /// a store lifetime (AUTOINCREMENT).
    pub id: i64,
    /// Display name, mutable, not unique
    pub name: String,
    /// Age in years, mutable
    pub age: i64,
    /// Creation timestamp, set once at insert and never modified
    pub created_at: String,
}

/// Returns the current local time formatted as a `created_at` stamp.
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
