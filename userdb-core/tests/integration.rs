//! Integration tests for the userdb store
//!
//! These exercise the public surface end to end: migrations, the CRUD
//! operations, and persistence across close/reopen of an on-disk file.

use userdb_core::{Database, Error, SCHEMA_VERSION};
use tempfile::TempDir;

fn open_migrated() -> Database {
    let db = Database::open_in_memory().expect("open should succeed");
    db.migrate().expect("migrate should succeed");
    db
}

// ============================================
// CRUD round trips
// ============================================

#[test]
fn test_create_update_delete_scenario() {
    let db = open_migrated();

    let id = db
        .insert_user("Micilini", 25, "2024-01-01 10:00:00")
        .unwrap();
    assert_eq!(id, 1);

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Micilini");
    assert_eq!(users[0].age, 25);
    assert_eq!(users[0].created_at, "2024-01-01 10:00:00");

    // Update touches name and age only
    db.update_user(1, "Micilini Roll", 28).unwrap();
    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Micilini Roll");
    assert_eq!(users[0].age, 28);
    assert_eq!(users[0].created_at, "2024-01-01 10:00:00");

    db.delete_user(1).unwrap();
    assert!(db.list_users().unwrap().is_empty());
}

#[test]
fn test_insert_assigns_fresh_unique_ids() {
    let db = open_migrated();

    let a = db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();
    let b = db.insert_user("Bruno", 41, "2024-01-01 09:05:00").unwrap();
    assert_ne!(a, b);

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 2);
    // Insertion order
    assert_eq!(users[0].id, a);
    assert_eq!(users[1].id, b);
    assert_eq!(db.count_users().unwrap(), 2);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let db = open_migrated();

    let first = db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();
    db.delete_user(first).unwrap();

    let second = db.insert_user("Bruno", 41, "2024-01-01 09:05:00").unwrap();
    assert!(second > first, "AUTOINCREMENT must not reuse ids");
}

#[test]
fn test_get_user() {
    let db = open_migrated();

    let id = db.insert_user("Carla", 19, "2024-02-02 12:00:00").unwrap();

    let user = db.get_user(id).unwrap().expect("user should exist");
    assert_eq!(user.name, "Carla");
    assert_eq!(user.age, 19);

    assert!(db.get_user(id + 1).unwrap().is_none());
}

#[test]
fn test_update_missing_id_is_noop() {
    let db = open_migrated();
    db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();

    db.update_user(999, "Ghost", 0).unwrap();

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana");
    assert_eq!(users[0].age, 30);
}

#[test]
fn test_delete_missing_id_is_noop() {
    let db = open_migrated();
    db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();

    db.delete_user(999).unwrap();
    assert_eq!(db.count_users().unwrap(), 1);
}

#[test]
fn test_delete_removes_exactly_one() {
    let db = open_migrated();
    let a = db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();
    let b = db.insert_user("Bruno", 41, "2024-01-01 09:05:00").unwrap();

    db.delete_user(a).unwrap();

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, b);
}

#[test]
fn test_empty_table_lists_empty() {
    let db = open_migrated();
    assert!(db.list_users().unwrap().is_empty());
    assert_eq!(db.count_users().unwrap(), 0);
}

// ============================================
// Error surfacing
// ============================================

#[test]
fn test_unmigrated_database_surfaces_error() {
    // Reads against a database with no schema must fail loudly, not come
    // back as an empty list.
    let db = Database::open_in_memory().unwrap();

    let err = db.list_users().unwrap_err();
    assert!(matches!(err, Error::Store(_)));

    let err = db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap_err();
    assert!(matches!(err, Error::Store(_)));
}

// ============================================
// On-disk behavior
// ============================================

#[test]
fn test_persistence_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("userdb.sqlite");

    {
        let db = Database::open(&path).unwrap();
        db.migrate().unwrap();
        db.insert_user("Ana", 30, "2024-01-01 09:00:00").unwrap();
    }

    let db = Database::open(&path).unwrap();
    db.migrate().unwrap();

    let users = db.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ana");

    let version = userdb_core::db::schema::schema_version(&db.connection()).unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_open_failure_is_init_error() {
    let dir = TempDir::new().unwrap();

    // A file squatting where the parent directory should go makes
    // directory creation fail on the open path
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = Database::open(&blocker.join("userdb.sqlite")).unwrap_err();
    assert!(matches!(err, Error::Init(_)));
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/state/userdb.sqlite");

    let db = Database::open(&path).unwrap();
    db.migrate().unwrap();

    assert!(path.exists());
}
