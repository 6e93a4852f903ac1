//! Error types for userdb-core

use thiserror::Error;

/// Main error type for the userdb-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database file or its parent directory could not be created or opened
    #[error("storage init error: {0}")]
    Init(String),

    /// A schema migration step failed; carries the version the step
    /// upgrades to
    #[error("migration to version {version} failed: {source}")]
    Migration {
        version: i32,
        #[source]
        source: rusqlite::Error,
    },

    /// A CRUD statement failed
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for userdb-core
pub type Result<T> = std::result::Result<T, Error>;
