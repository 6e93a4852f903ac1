//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via PRAGMA user_version.
//! Each step is keyed by the version it upgrades *to* and only ever adds
//! new tables, so re-running a step is harmless and the chain can resume
//! from whatever version a database file was left at.

use crate::error::{Error, Result};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 3;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: Initial schema - the primary entity table
    r#"
    CREATE TABLE IF NOT EXISTS usuario (
        id_usuario   INTEGER PRIMARY KEY AUTOINCREMENT,
        nome         TEXT,
        idade        INTEGER,
        data_criacao DATETIME
    );
    "#,
    // Version 2: Vehicle and job tables (schema-only, no CRUD surface)
    r#"
    CREATE TABLE IF NOT EXISTS carros_usuario (
        id_carro     INTEGER PRIMARY KEY AUTOINCREMENT,
        id_usuario   INTEGER REFERENCES usuario(id_usuario),
        marca        TEXT,
        modelo       TEXT,
        data_criacao DATETIME
    );

    CREATE TABLE IF NOT EXISTS empregos_usuario (
        id_emprego   INTEGER PRIMARY KEY AUTOINCREMENT,
        id_usuario   INTEGER REFERENCES usuario(id_usuario),
        tipo_emprego TEXT
    );
    "#,
    // Version 3: Housing and medical tables (schema-only, no CRUD surface)
    r#"
    CREATE TABLE IF NOT EXISTS casa_usuario (
        id_casa      INTEGER PRIMARY KEY AUTOINCREMENT,
        id_usuario   INTEGER REFERENCES usuario(id_usuario),
        tipo_casa    TEXT
    );

    CREATE TABLE IF NOT EXISTS medico_usuario (
        id_medico    INTEGER PRIMARY KEY AUTOINCREMENT,
        id_usuario   INTEGER REFERENCES usuario(id_usuario),
        tipo_medico  TEXT
    );
    "#,
];

/// Run all pending migrations up to [`SCHEMA_VERSION`]
pub fn run_migrations(conn: &Connection) -> Result<()> {
    upgrade(conn, SCHEMA_VERSION)
}

/// Apply migration steps from the persisted version up to `to_version`,
/// in strictly ascending order.
///
/// The persisted version advances after each successful step, so a failure
/// at step N leaves the database at N-1 and later chains resume there. A
/// `to_version` at or below the persisted version is a no-op; downgrade is
/// never performed. Targets beyond the highest known step apply every
/// known step and stop.
pub fn upgrade(conn: &Connection, to_version: i32) -> Result<()> {
    let current_version = schema_version(conn).unwrap_or(0);

    tracing::info!(
        current_version,
        to_version,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version && version <= to_version {
            tracing::info!(version, "Running migration");
            conn.execute_batch(migration)
                .map_err(|source| Error::Migration { version, source })?;
            conn.execute(&format!("PRAGMA user_version = {}", version), [])
                .map_err(|source| Error::Migration { version, source })?;
        }
    }

    let applied_to = schema_version(conn)?;
    if current_version < applied_to {
        tracing::info!(from = current_version, to = applied_to, "Migrations complete");
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn schema_version(conn: &Connection) -> Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}
