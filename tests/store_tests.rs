mod common;
use common::{day, setup_test_db};

use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::path::Path;
use timekeeper::core::projects::ProjectLogic;
use timekeeper::db::initialize::bootstrap;
use timekeeper::db::{DailyLogStore, HistoryStore, ProjectStore, SqliteStore};
use timekeeper::errors::AppError;
use timekeeper::models::daily_log::DailyLog;
use timekeeper::models::history_data::HistoryData;
use timekeeper::models::project::Project;

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn test_bootstrap_creates_schema_once() {
    let db_path = setup_test_db("store_bootstrap");

    assert!(bootstrap(Path::new(&db_path)).unwrap());
    assert!(!bootstrap(Path::new(&db_path)).unwrap());

    let conn = Connection::open(&db_path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('projects', 'historydata', 'dailylog')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 3);
}

#[test]
fn test_project_insert_update_delete() {
    let db_path = setup_test_db("store_projects");
    let store = SqliteStore::open(&db_path, false).unwrap();

    let saved = store
        .save_project(&Project::new(-1, "Alpha", false, true, 0))
        .unwrap();
    assert!(saved.is_persisted());

    let mut renamed = saved.clone();
    renamed.name = "Omega".into();
    renamed.visible = false;
    store.save_project(&renamed).unwrap();

    let loaded = store.project_by_id(saved.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Omega");
    assert!(!loaded.visible);
    assert_eq!(store.all_projects().unwrap().len(), 1);

    assert!(store.delete_project(&loaded).unwrap());
    assert!(!store.delete_project(&loaded).unwrap());
    assert!(store.project_by_id(saved.id).unwrap().is_none());

    // never saved: nothing to delete
    assert!(!store
        .delete_project(&Project::new(-3, "ghost", false, true, 0))
        .unwrap());
}

#[test]
fn test_history_round_trip_by_date() {
    let db_path = setup_test_db("store_history");
    let store = SqliteStore::open(&db_path, false).unwrap();
    let p = ProjectLogic::add(&store, "Alpha", false, true).unwrap();

    let mut rec = store
        .save_history(&HistoryData::new(None, p.id, day("2025-03-10"), 120))
        .unwrap();
    assert!(rec.id.is_some());

    rec.set_time(300);
    store.save_history(&rec).unwrap();

    let on_day = store.history_for_date(day("2025-03-10")).unwrap();
    assert_eq!(on_day.get(&p.id).map(|d| d.time), Some(300));
    assert!(store.history_for_date(day("2025-03-11")).unwrap().is_empty());
    assert_eq!(store.all_history().unwrap().len(), 1);
}

#[test]
fn test_history_of_deleted_project_is_not_written() {
    let db_path = setup_test_db("store_orphan");
    let store = SqliteStore::open(&db_path, false).unwrap();

    let rec = store
        .save_history(&HistoryData::new(None, 77, day("2025-03-10"), 120))
        .unwrap();
    assert!(rec.id.is_none());
    assert!(store.all_history().unwrap().is_empty());
}

#[test]
fn test_dates_with_time_part_are_read() {
    let db_path = setup_test_db("store_datetime");
    let store = SqliteStore::open(&db_path, false).unwrap();
    let p = ProjectLogic::add(&store, "Alpha", false, true).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO historydata (project_id, date, time) VALUES (?1, '2025-03-10 00:00:00', 60)",
        [p.id],
    )
    .unwrap();

    let on_day = store.history_for_date(day("2025-03-10")).unwrap();
    assert_eq!(on_day.get(&p.id).map(|d| d.time), Some(60));
}

#[test]
fn test_malformed_date_is_a_db_error() {
    let db_path = setup_test_db("store_malformed");
    let store = SqliteStore::open(&db_path, false).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO historydata (project_id, date, time) VALUES (1, 'not a date', 60)",
        [],
    )
    .unwrap();

    assert!(matches!(store.all_history(), Err(AppError::Db(_))));
}

#[test]
fn test_daily_log_insert_then_update() {
    let db_path = setup_test_db("store_dailylog");
    let store = SqliteStore::open(&db_path, false).unwrap();

    let mut log = DailyLog::open_at(at("2025-03-10 08:30:00"));
    log = store.save_daily_log(&log).unwrap();
    log.end = at("2025-03-10 17:45:10");
    store.save_daily_log(&log).unwrap();

    let loaded = store.daily_log_for_date(day("2025-03-10")).unwrap().unwrap();
    assert_eq!(loaded.id, log.id);
    assert_eq!(loaded.start, at("2025-03-10 08:30:00"));
    assert_eq!(loaded.end, at("2025-03-10 17:45:10"));
    assert!(store.daily_log_for_date(day("2025-03-11")).unwrap().is_none());
}

#[test]
fn test_read_only_store_never_writes() {
    let db_path = setup_test_db("store_read_only");
    let writable = SqliteStore::open(&db_path, false).unwrap();
    let p = ProjectLogic::add(&writable, "Alpha", false, true).unwrap();

    let store = SqliteStore::open(&db_path, true).unwrap();
    assert!(store.is_read_only());

    let unsaved = store
        .save_project(&Project::new(-5, "Beta", false, true, 1))
        .unwrap();
    assert!(!unsaved.is_persisted());

    let rec = store
        .save_history(&HistoryData::new(None, p.id, day("2025-03-10"), 10))
        .unwrap();
    assert!(rec.id.is_none());

    assert!(!store.delete_project(&p).unwrap());
    assert!(!store.delete_history_for_project(&p).unwrap());

    assert_eq!(writable.all_projects().unwrap().len(), 1);
    assert!(writable.all_history().unwrap().is_empty());
}

#[test]
fn test_remove_project_cascades_to_history() {
    let db_path = setup_test_db("store_cascade");
    let store = SqliteStore::open(&db_path, false).unwrap();
    let a = ProjectLogic::add(&store, "Alpha", false, true).unwrap();
    let b = ProjectLogic::add(&store, "Beta", false, true).unwrap();

    for p in [&a, &b] {
        store
            .save_history(&HistoryData::new(None, p.id, day("2025-03-10"), 60))
            .unwrap();
    }

    assert!(ProjectLogic::remove(&store, a.id).unwrap());

    let left = store.all_history().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].project_id, b.id);
}

#[test]
fn test_read_only_open_of_missing_file_creates_nothing() {
    let db_path = setup_test_db("store_read_only_missing");

    assert!(matches!(
        SqliteStore::open(&db_path, true),
        Err(AppError::DatabaseMissing(_))
    ));
    assert!(!Path::new(&db_path).exists());

    // a later normal run still gets a usable schema
    let store = SqliteStore::open(&db_path, false).unwrap();
    assert!(store.all_projects().unwrap().is_empty());
}

#[test]
fn test_empty_file_is_bootstrapped() {
    let db_path = setup_test_db("store_empty_file");
    std::fs::write(&db_path, b"").unwrap();

    assert!(bootstrap(Path::new(&db_path)).unwrap());

    let store = SqliteStore::open(&db_path, false).unwrap();
    assert!(store.all_history().unwrap().is_empty());
}
