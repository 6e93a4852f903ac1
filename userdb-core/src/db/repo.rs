//! Database repository layer
//!
//! Provides the CRUD operations for the `usuario` table, isolating callers
//! from statement construction. All statements go through write-committing
//! execution; failures surface as [`Error`](crate::error::Error) values
//! rather than being swallowed, and a failed read is an `Err`, never an
//! empty list.

use crate::error::{Error, Result};
use crate::types::User;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Mutex;

/// Database handle owning a single connection
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path.
    ///
    /// Any failure on the open path, including creating the parent
    /// directory, surfaces as [`Error::Init`].
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Init(format!("cannot create {:?}: {}", parent, e)))?;
        }

        let conn = Connection::open(path).map_err(|e| Error::Init(e.to_string()))?;

        // Enable foreign keys and WAL mode for better concurrency
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(|e| Error::Init(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Init(e.to_string()))?;
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| Error::Init(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    /// Get the underlying connection (for advanced use)
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }

    // ============================================
    // User operations
    // ============================================

    /// Insert a new user, returning the auto-assigned id.
    ///
    /// `created_at` is stored verbatim and never touched again; callers
    /// that want "now" can pass [`now_timestamp`](crate::types::now_timestamp).
    pub fn insert_user(&self, name: &str, age: i64, created_at: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO usuario (nome, idade, data_criacao) VALUES (?1, ?2, ?3)",
            params![name, age, created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all users in insertion order
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id_usuario, nome, idade, data_criacao FROM usuario ORDER BY id_usuario ASC",
        )?;

        let users = stmt
            .query_map([], Self::row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Get a user by id
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT id_usuario, nome, idade, data_criacao FROM usuario WHERE id_usuario = ?",
            [id],
            Self::row_to_user,
        )
        .optional()
        .map_err(Error::from)
    }

    /// Overwrite name and age for the user matching `id`.
    ///
    /// `created_at` is never modified. No-op (not an error) when no row
    /// matches.
    pub fn update_user(&self, id: i64, name: &str, age: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE usuario SET nome = ?1, idade = ?2 WHERE id_usuario = ?3",
            params![name, age, id],
        )?;
        Ok(())
    }

    /// Delete the user matching `id`. No-op when no row matches.
    pub fn delete_user(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM usuario WHERE id_usuario = ?", [id])?;
        Ok(())
    }

    /// Count users
    pub fn count_users(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM usuario", [], |r| r.get(0))?;
        Ok(count)
    }

    fn row_to_user(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get("id_usuario")?,
            name: row.get("nome")?,
            age: row.get("idade")?,
            created_at: row.get("data_criacao")?,
        })
    }
}
