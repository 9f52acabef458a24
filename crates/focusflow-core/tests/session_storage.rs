//! Integration tests for sessions backed by the SQLite store.
//!
//! These cover the round trip a process restart goes through: settings,
//! theme and engine records written by one session, read by the next.

use std::path::Path;

use focusflow_core::storage::{read_record, ENGINE_KEY, SETTINGS_KEY, THEME_KEY};
use focusflow_core::{
    AccentColor, FocusSession, FontFamily, KeyValueStore, Phase, SettingsStore, SilentOutput,
    SqliteStore, ThemeStore, TimerEngine, TimerSettings,
};
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("focusflow.db")
}

fn open_session(path: &Path) -> FocusSession<SqliteStore, SilentOutput> {
    FocusSession::new(SqliteStore::open_at(path).unwrap(), SilentOutput::default())
}

#[test]
fn test_settings_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let mut session = open_session(&path);
    session.set_field("shortBreakDuration", "10").unwrap();
    session.set_field("autoStartNextPhase", "false").unwrap();
    drop(session);

    let session = open_session(&path);
    assert_eq!(session.settings().short_break_duration, 10);
    assert!(!session.settings().auto_start_next_phase);
    assert_eq!(session.duration(Phase::ShortBreak), 10);
}

#[test]
fn test_partial_record_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    {
        let mut db = SqliteStore::open_at(&path).unwrap();
        db.set(SETTINGS_KEY, r#"{"workDuration": 50}"#).unwrap();
    }

    let session = open_session(&path);
    let expected = TimerSettings {
        work_duration: 50,
        ..TimerSettings::default()
    };
    assert_eq!(session.settings(), expected);
    assert_eq!(session.state().time_left_secs, 50 * 60);
}

#[test]
fn test_unreadable_records_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    {
        let mut db = SqliteStore::open_at(&path).unwrap();
        db.set(SETTINGS_KEY, "{not json").unwrap();
        db.set(THEME_KEY, "[]").unwrap();
    }

    let session = open_session(&path);
    assert_eq!(session.settings(), TimerSettings::default());

    let themes = ThemeStore::open(SqliteStore::open_at(&path).unwrap());
    assert_eq!(themes.theme().font, FontFamily::Inter);
}

#[test]
fn test_out_of_bounds_record_is_discarded() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    {
        let mut db = SqliteStore::open_at(&path).unwrap();
        db.set(SETTINGS_KEY, r#"{"workDuration": 500, "shortBreakDuration": 7}"#)
            .unwrap();
    }

    let store = SettingsStore::open(SqliteStore::open_at(&path).unwrap());
    assert_eq!(store.settings(), TimerSettings::default());
}

#[test]
fn test_engine_resumes_from_store() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let mut session = open_session(&path);
    session.skip();
    session.start();
    session.tick();
    let json = serde_json::to_string(session.engine()).unwrap();
    session.store_mut().set(ENGINE_KEY, &json).unwrap();
    let saved = session.state();
    drop(session);

    let db = SqliteStore::open_at(&path).unwrap();
    let engine: TimerEngine = read_record(&db, ENGINE_KEY).unwrap().unwrap();
    let resumed =
        FocusSession::with_engine(SettingsStore::open(db), engine, SilentOutput::default());

    let state = resumed.state();
    assert_eq!(state.phase, Phase::ShortBreak);
    assert_eq!(state.time_left_secs, saved.time_left_secs);
    assert_eq!(state.work_sessions_completed, 1);
    assert!(state.is_running);
    assert!(state.sessions_skipped);
}

#[test]
fn test_factory_reset_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);
    {
        let mut themes = ThemeStore::open(SqliteStore::open_at(&path).unwrap());
        themes.set_accent("purple").unwrap();
    }

    let mut session = open_session(&path);
    session.set_field("workDuration", "30").unwrap();
    session.factory_reset().unwrap();
    assert!(session.store().get(SETTINGS_KEY).unwrap().is_none());
    assert!(session.store().get(THEME_KEY).unwrap().is_none());
    drop(session);

    let themes = ThemeStore::open(SqliteStore::open_at(&path).unwrap());
    assert_eq!(themes.theme().accent_color, AccentColor::Blue);
    assert_eq!(open_session(&path).settings(), TimerSettings::default());
}
