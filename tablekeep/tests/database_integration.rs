//! Integration tests for the reservation store over a real database file.

mod common;

use common::{open_database, open_store, temp_database_path, ReservationFixture};
use tablekeep::database::{Database, DatabaseConfig, ReservationStore, DEFAULT_STORAGE_KEY};
use tablekeep::{Error, ReservationDate};

#[test]
fn test_reservations_survive_reopen() {
    let (_dir, path) = temp_database_path();

    let saved = vec![
        ReservationFixture::new().with_name("Ada").build(),
        ReservationFixture::new()
            .with_name("Grace")
            .with_start("19:30")
            .with_phone("555-0101")
            .with_notes("window")
            .build(),
    ];
    open_store(&path).save(&saved).unwrap();

    let reopened = open_store(&path);
    assert_eq!(reopened.all().unwrap(), saved);
}

#[test]
fn test_missing_key_reads_as_empty() {
    let (_dir, path) = temp_database_path();
    let store = open_store(&path);

    assert!(store.all().unwrap().is_empty());
    assert!(store.database().keys().unwrap().is_empty());
}

#[test]
fn test_storage_keys_are_isolated() {
    let (_dir, path) = temp_database_path();

    let mut v1 = ReservationStore::new(open_database(&path), DEFAULT_STORAGE_KEY);
    v1.save(&[ReservationFixture::new().build()]).unwrap();

    let v2 = ReservationStore::new(open_database(&path), "reservations:v2");
    assert!(v2.all().unwrap().is_empty());

    let keys = v1.database().keys().unwrap();
    assert_eq!(keys, vec![DEFAULT_STORAGE_KEY.to_string()]);
}

#[test]
fn test_reads_list_written_by_browser_app() {
    let (_dir, path) = temp_database_path();
    let mut db = open_database(&path);

    // As written by the web front end, including its loose party sizes
    let raw = r#"[
        {"id":"k3j2h1","name":"Sample Customer","phone":"555-555-5555","email":"sample@email.com","partySize":2,"date":"2025-10-01","start":"18:00","notes":""},
        {"id":"9f8e7d","name":"Walk in","phone":"","email":"","partySize":"","date":"2025-10-01","start":"12:30","notes":"bar"}
    ]"#;
    db.set_item(DEFAULT_STORAGE_KEY, raw).unwrap();

    let store = ReservationStore::new(db, DEFAULT_STORAGE_KEY);
    let all = store.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id().as_str(), "k3j2h1");
    assert_eq!(all[1].party_size(), 1);

    let day: ReservationDate = "2025-10-01".parse().unwrap();
    let by_date = store.by_date(day).unwrap();
    assert_eq!(by_date[0].name(), "Walk in");
    assert_eq!(by_date[1].name(), "Sample Customer");
}

#[test]
fn test_corrupt_value_is_reported() {
    let (_dir, path) = temp_database_path();
    let mut db = open_database(&path);
    db.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();

    let mut store = ReservationStore::new(db, DEFAULT_STORAGE_KEY);
    assert!(matches!(store.all(), Err(Error::DatabaseCorruption { .. })));

    // modify refuses to overwrite what it cannot read
    let result = store.modify(|list| {
        list.clear();
        Ok(())
    });
    assert!(matches!(result, Err(Error::DatabaseCorruption { .. })));
    assert_eq!(
        store.database().get_item(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_open_without_auto_create_fails_for_missing_file() {
    let (_dir, path) = temp_database_path();
    let mut config = DatabaseConfig::new(&path);
    config.auto_create = false;

    match Database::open(config) {
        Err(Error::DataDirectoryNotFound { .. }) => {}
        other => panic!("expected DataDirectoryNotFound, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_newer_schema_is_rejected() {
    let (_dir, path) = temp_database_path();
    {
        let db = open_database(&path);
        db.connection()
            .execute(
                "UPDATE metadata SET value = '99' WHERE key = 'schema_version'",
                [],
            )
            .unwrap();
    }

    match Database::open(DatabaseConfig::new(&path)) {
        Err(Error::UnsupportedSchemaVersion { expected, found }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 99);
        }
        other => panic!("expected UnsupportedSchemaVersion, got {other:?}"),
    }
}
