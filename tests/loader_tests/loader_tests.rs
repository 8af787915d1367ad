//! Tests for the file loader
//!
//! These tests verify:
//! - Lines are stored in file order
//! - Malformed lines are skipped without losing the rest of the file
//! - Missing files are reported and leave the table empty
//! - Loading stops when the table is full
//! - CRLF line endings and non-UTF-8 bytes

use std::fs;
use std::path::{Path, PathBuf};

use flydb::loader::{load_file, LoadStats};
use flydb::{Database, FlyDbError, Record, TableKey};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_table(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn flight_origins(db: &Database) -> Vec<String> {
    let count = db.row_count(TableKey::Flight).unwrap();
    (0..count)
        .map(|i| match db.get_row(TableKey::Flight, i).unwrap() {
            Record::Flight(f) => f.flight_from,
            other => panic!("unexpected record {:?}", other),
        })
        .collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_preserves_file_order() {
    let temp = TempDir::new().unwrap();
    let path = write_table(
        temp.path(),
        "flights.fdb",
        "08:00,AAA,BBB,10:00\n09:00,BBB,CCC,11:00\n10:00,CCC,DDD,12:00\n",
    );
    let db = Database::new(100);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(
        stats,
        LoadStats {
            loaded: 3,
            skipped: 0,
            truncated: false,
        }
    );
    assert_eq!(flight_origins(&db), vec!["AAA", "BBB", "CCC"]);
}

#[test]
fn test_malformed_line_is_skipped() {
    let temp = TempDir::new().unwrap();
    let path = write_table(
        temp.path(),
        "flights.fdb",
        "08:00,AAA,BBB,10:00\n08:00,NYC100\n09:00,BBB,CCC,11:00\n10:00,CCC,DDD,12:00\n",
    );
    let db = Database::new(100);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(flight_origins(&db), vec!["AAA", "BBB", "CCC"]);
}

#[test]
fn test_last_line_without_newline_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "airports.fdb", "JFK,New York,Kennedy\nLHR,London,Heathrow");
    let db = Database::new(100);

    let stats = load_file(&db, TableKey::Airport, &path).unwrap();

    assert_eq!(stats.loaded, 2);
    assert_eq!(db.get_row(TableKey::Airport, 1).unwrap().fields()[2], "Heathrow");
}

#[test]
fn test_crlf_line_endings() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "prices.fdb", "NYC100,economy,420\r\nNYC100,business,1999\r\n");
    let db = Database::new(100);

    load_file(&db, TableKey::Price, &path).unwrap();

    assert_eq!(
        db.get_row(TableKey::Price, 0).unwrap().fields(),
        vec!["NYC100", "economy", "420"]
    );
    assert_eq!(
        db.get_row(TableKey::Price, 1).unwrap().fields(),
        vec!["NYC100", "business", "1999"]
    );
}

#[test]
fn test_invalid_utf8_line_does_not_stop_loading() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("flights.fdb");
    fs::write(
        &path,
        b"08:00,AAA,BBB,10:00\n09:00,M\xfcnchen,CCC,11:00\n10:00,CCC,DDD,12:00\n",
    )
    .unwrap();
    let db = Database::new(100);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 3);
    assert_eq!(stats.skipped, 0);
    assert_eq!(flight_origins(&db), vec!["AAA", "M\u{FFFD}nchen", "CCC"]);
}

#[test]
fn test_empty_file_loads_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "flights.fdb", "");
    let db = Database::new(100);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats, LoadStats::default());
    assert_eq!(db.row_count(TableKey::Flight).unwrap(), 0);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_missing_file_is_unavailable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.fdb");
    let db = Database::new(100);

    let result = load_file(&db, TableKey::Airport, &path);

    match result {
        Err(FlyDbError::FileUnavailable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FileUnavailable, got {:?}", other),
    }
    assert_eq!(db.row_count(TableKey::Airport).unwrap(), 0);
}

#[test]
fn test_unknown_key_fails_before_opening() {
    let temp = TempDir::new().unwrap();
    // Path does not exist: UnknownKey must win over FileUnavailable
    let path = temp.path().join("missing.fdb");
    let db = Database::new(100);

    let result = load_file(&db, 7usize, &path);
    assert!(matches!(result, Err(FlyDbError::UnknownKey(7))));
}

#[test]
fn test_load_stops_at_capacity() {
    let temp = TempDir::new().unwrap();
    let path = write_table(
        temp.path(),
        "flights.fdb",
        "08:00,AAA,BBB,10:00\n09:00,BBB,CCC,11:00\n10:00,CCC,DDD,12:00\n",
    );
    let db = Database::new(2);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 2);
    assert!(stats.truncated);
    assert_eq!(flight_origins(&db), vec!["AAA", "BBB"]);
}

#[test]
fn test_file_exactly_at_capacity_is_not_truncated() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "flights.fdb", "08:00,AAA,BBB,10:00\n09:00,BBB,CCC,11:00\n");
    let db = Database::new(2);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 2);
    assert!(!stats.truncated);
}

#[test]
fn test_trailing_blank_line_at_capacity_is_not_truncated() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "flights.fdb", "08:00,AAA,BBB,10:00\n09:00,BBB,CCC,11:00\n\n");
    let db = Database::new(2);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(
        stats,
        LoadStats {
            loaded: 2,
            skipped: 1,
            truncated: false,
        }
    );
}

#[test]
fn test_malformed_lines_after_full_table_are_not_truncation() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "flights.fdb", "08:00,AAA,BBB,10:00\nbroken\n09:00,BBB\n");
    let db = Database::new(1);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 1);
    assert_eq!(stats.skipped, 2);
    assert!(!stats.truncated);
}

#[test]
fn test_all_empty_fields_line_is_a_row() {
    let temp = TempDir::new().unwrap();
    let path = write_table(temp.path(), "flights.fdb", ",,,\n");
    let db = Database::new(10);

    let stats = load_file(&db, TableKey::Flight, &path).unwrap();

    assert_eq!(stats.loaded, 1);
    assert_eq!(db.get_row(TableKey::Flight, 0).unwrap(), Record::zero(TableKey::Flight));
}
