//! # userdb-core
//!
//! A versioned embedded-schema migration and CRUD-access layer over SQLite.
//!
//! This library provides:
//! - A sequential, forward-only schema migration chain tracked via
//!   `PRAGMA user_version`
//! - A repository over the `usuario` table (create, list, get, update,
//!   delete)
//! - Configuration management and logging infrastructure
//!
//! Every operation is synchronous and returns an explicit [`Result`]:
//! a failed read is an `Err`, never a silently empty list. There is no
//! hidden shared instance; construct one [`Database`] per process or per
//! test and pass it to consumers explicitly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use userdb_core::{Config, Database};
//!
//! # fn main() -> userdb_core::Result<()> {
//! let config = Config::load()?;
//!
//! let db = Database::open(&config.resolved_database_path())?;
//! db.migrate()?;
//!
//! let id = db.insert_user("Micilini", 25, &userdb_core::types::now_timestamp())?;
//! let users = db.list_users()?;
//! db.update_user(id, "Micilini Roll", 28)?;
//! db.delete_user(id)?;
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::{Database, SCHEMA_VERSION};
pub use error::{Error, Result};
pub use types::User;

// Public modules
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod types;
