use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rusqlite::Connection;
use std::fs;

mod common;
use common::{init_db_with_projects, setup_test_db, temp_config, temp_out, tk_with};

/// Insert one history row for a past day straight into the database
fn seed_history(db_path: &str, project_id: i64, date: &str, seconds: i64) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO historydata (project_id, date, time) VALUES (?1, ?2, ?3)",
        rusqlite::params![project_id, date, seconds],
    )
    .expect("insert history");
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");
    let conf = temp_config("cli_init");

    tk_with(&db_path, &conf, &["init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_project_add_and_list() {
    let db_path = setup_test_db("cli_projects");
    let conf = temp_config("cli_projects");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["project", "add", "Gamma", "--hidden"])
        .assert()
        .success();

    tk_with(&db_path, &conf, &["project", "list"])
        .assert()
        .success()
        .stdout(contains("Alpha"))
        .stdout(contains("Beta"))
        .stdout(contains("Gamma").not());

    tk_with(&db_path, &conf, &["project", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Gamma"));
}

#[test]
fn test_project_rename_move_and_delete() {
    let db_path = setup_test_db("cli_project_edit");
    let conf = temp_config("cli_project_edit");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["project", "rename", "1", "Omega"])
        .assert()
        .success()
        .stdout(contains("renamed to Omega"));

    tk_with(&db_path, &conf, &["project", "move", "2", "up"])
        .assert()
        .success();

    let conn = Connection::open(&db_path).unwrap();
    let first: String = conn
        .query_row(
            "SELECT name FROM projects ORDER BY position, id LIMIT 1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(first, "Beta");

    tk_with(&db_path, &conf, &["project", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    tk_with(&db_path, &conf, &["project", "rename", "1", "Again"])
        .assert()
        .failure()
        .stderr(contains("Project not found: 1"));
}

#[test]
fn test_project_autostart() {
    let db_path = setup_test_db("cli_autostart");
    let conf = temp_config("cli_autostart");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["project", "autostart", "2"])
        .assert()
        .success()
        .stdout(contains("Beta starts automatically"));

    tk_with(&db_path, &conf, &["project", "autostart", "--none"])
        .assert()
        .success()
        .stdout(contains("Autostart cleared"));
}

#[test]
fn test_track_session_saves_on_quit() {
    let db_path = setup_test_db("cli_track");
    let conf = temp_config("cli_track");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["track"])
        .write_stdin("2\nbogus\nw\nq\n")
        .assert()
        .success()
        .stdout(contains("Started Beta"))
        .stdout(contains("Unknown command: bogus"))
        .stdout(contains("Session saved"));

    let conn = Connection::open(&db_path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM historydata", [], |r| r.get(0))
        .unwrap();
    let logs: i64 = conn
        .query_row("SELECT COUNT(*) FROM dailylog", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 2);
    assert_eq!(logs, 1);
}

#[test]
fn test_track_without_projects_fails() {
    let db_path = setup_test_db("cli_track_empty");
    let conf = temp_config("cli_track_empty");
    tk_with(&db_path, &conf, &["init"]).assert().success();

    tk_with(&db_path, &conf, &["track"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(contains("No visible projects"));
}

#[test]
fn test_history_empty() {
    let db_path = setup_test_db("cli_history_empty");
    let conf = temp_config("cli_history_empty");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["history"])
        .assert()
        .success()
        .stdout(contains("No history recorded yet"));
}

#[test]
fn test_history_table_and_json() {
    let db_path = setup_test_db("cli_history");
    let conf = temp_config("cli_history");
    init_db_with_projects(&db_path, &conf);
    seed_history(&db_path, 1, "2025-03-10", 3600);
    seed_history(&db_path, 2, "2025-03-10", 1800);
    seed_history(&db_path, 1, "2025-04-02", 60);

    tk_with(&db_path, &conf, &["history", "--no-color"])
        .assert()
        .success()
        .stdout(contains("2025-03-10 Mon"))
        .stdout(contains("01:30:00"))
        .stdout(contains("2025-04-02"));

    tk_with(&db_path, &conf, &["history", "--format", "json", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("\"date\": \"2025-03-10\""))
        .stdout(contains("\"total\": 5400"))
        .stdout(contains("2025-04-02").not());
}

#[test]
fn test_history_csv_to_file() {
    let db_path = setup_test_db("cli_history_csv");
    let conf = temp_config("cli_history_csv");
    let out = temp_out("cli_history_csv", "csv");
    init_db_with_projects(&db_path, &conf);
    seed_history(&db_path, 1, "2025-03-10", 3600);

    tk_with(&db_path, &conf, &["history", "--format", "csv", "--output", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("date,start,end,Alpha,Beta,sum"));
    assert!(content.contains("2025-03-10,,,01:00:00,00:00:00,01:00:00"));
}

#[test]
fn test_history_set_updates_a_past_day() {
    let db_path = setup_test_db("cli_history_set");
    let conf = temp_config("cli_history_set");
    init_db_with_projects(&db_path, &conf);
    seed_history(&db_path, 1, "2025-03-10", 3600);

    tk_with(&db_path, &conf, &["history", "set", "2025-03-10", "2", "00:45"])
        .assert()
        .success()
        .stdout(contains("set to 00:45:00"));

    let conn = Connection::open(&db_path).unwrap();
    let secs: i64 = conn
        .query_row(
            "SELECT time FROM historydata WHERE project_id = 2",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(secs, 2700);

    tk_with(&db_path, &conf, &["history", "set", "2025-03-10", "2", "00:45:00"])
        .assert()
        .success()
        .stdout(contains("unchanged (00:45:00)"))
        .stdout(contains("set to").not());

    tk_with(&db_path, &conf, &["history", "set", "2025-03-10", "2", "xx"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    tk_with(&db_path, &conf, &["history", "set", "2024-01-01", "1", "01:00:00"])
        .assert()
        .failure()
        .stderr(contains("No history recorded for 2024-01-01"));
}

#[test]
fn test_read_only_flag_blocks_writes() {
    let db_path = setup_test_db("cli_read_only");
    let conf = temp_config("cli_read_only");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["--read-only", "project", "add", "Gamma"])
        .assert()
        .success()
        .stdout(contains("was not saved"));

    tk_with(&db_path, &conf, &["project", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Gamma").not());
}

#[test]
fn test_config_set_and_print() {
    let db_path = setup_test_db("cli_config");
    let conf = temp_config("cli_config");

    tk_with(&db_path, &conf, &["config", "--opacity", "100", "--update-interval", "monthly"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    tk_with(&db_path, &conf, &["config", "--print"])
        .assert()
        .success()
        .stdout(contains("opacity: 100"))
        .stdout(contains("update_interval: MONTHLY"));

    tk_with(&db_path, &conf, &["config", "--opacity", "5"])
        .assert()
        .failure()
        .stderr(contains("opacity must be between 20 and 255"));
}

#[test]
fn test_init_in_read_only_mode_writes_nothing() {
    let db_path = setup_test_db("cli_init_read_only");
    let conf = temp_config("cli_init_read_only");

    tk_with(&db_path, &conf, &["--read-only", "init"])
        .assert()
        .success()
        .stdout(contains("Read-only mode: nothing initialized"));

    assert!(fs::metadata(&db_path).is_err());
    assert!(fs::metadata(&conf).is_err());
}

#[test]
fn test_read_only_commands_on_missing_database_fail_cleanly() {
    let db_path = setup_test_db("cli_read_only_missing");
    let conf = temp_config("cli_read_only_missing");

    tk_with(&db_path, &conf, &["--read-only", "project", "list"])
        .assert()
        .failure()
        .stderr(contains("Database not found"));

    assert!(fs::metadata(&db_path).is_err());
}

#[test]
fn test_track_session_time_correction() {
    let db_path = setup_test_db("cli_track_set_time");
    let conf = temp_config("cli_track_set_time");
    init_db_with_projects(&db_path, &conf);

    tk_with(&db_path, &conf, &["track"])
        .write_stdin("t 2 01:15\nt 9 00:10\nq\n")
        .assert()
        .success()
        .stdout(contains("Beta set to 01:15:00"))
        .stdout(contains("Session saved"));

    let conn = Connection::open(&db_path).unwrap();
    let secs: i64 = conn
        .query_row(
            "SELECT time FROM historydata WHERE project_id = 2",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(secs, 4500);
}
