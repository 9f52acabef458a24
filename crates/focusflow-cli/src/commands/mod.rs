pub mod config;
pub mod noise;
pub mod reset;
pub mod theme;
pub mod timer;

use chrono::{DateTime, Duration, Utc};
use focusflow_core::storage::{read_record, ENGINE_KEY, LAST_TICK_KEY};
use focusflow_core::{
    AudioOutput, Event, FocusSession, KeyValueStore, SettingsStore, SqliteStore, TimerEngine,
};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Timer state carried between CLI invocations.
///
/// The engine is stored under `ENGINE_KEY`; `LAST_TICK_KEY` records the
/// instant up to which ticks were applied, so the next invocation can
/// replay the seconds that passed in between.
pub struct PersistedTimer<O: AudioOutput> {
    session: FocusSession<SqliteStore, O>,
    last_tick: DateTime<Utc>,
}

impl<O: AudioOutput> PersistedTimer<O> {
    /// Open the database, restore the engine and catch up to now.
    ///
    /// Returns the events produced while catching up.
    pub fn open(noise_output: O) -> Result<(Self, Vec<Event>), Box<dyn std::error::Error>> {
        let db = SqliteStore::open()?;
        let engine = match read_record::<TimerEngine, _>(&db, ENGINE_KEY) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::warn!(key = ENGINE_KEY, error = %e, "discarding stored timer");
                None
            }
        };
        let last_tick = read_last_tick(&db);

        let settings = SettingsStore::open(db);
        let engine = engine.unwrap_or_else(|| TimerEngine::new(settings.settings()));
        let mut session = FocusSession::with_engine(settings, engine, noise_output);

        let now = Utc::now();
        let (events, last_tick) = match last_tick {
            Some(last) if session.state().is_running && last < now => {
                let elapsed = (now - last).num_seconds();
                let events = session.catch_up(elapsed as u64);
                let applied = if session.state().is_running {
                    last + Duration::seconds(elapsed)
                } else {
                    now
                };
                (events, applied)
            }
            _ => (Vec::new(), now),
        };

        Ok((Self { session, last_tick }, events))
    }

    pub fn session(&self) -> &FocusSession<SqliteStore, O> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FocusSession<SqliteStore, O> {
        &mut self.session
    }

    /// Restart tick accounting from `at`.
    pub fn mark(&mut self, at: DateTime<Utc>) {
        self.last_tick = at;
    }

    pub fn save(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let engine = serde_json::to_string(self.session.engine())?;
        let store = self.session.store_mut();
        store.set(ENGINE_KEY, &engine)?;
        store.set(LAST_TICK_KEY, &self.last_tick.to_rfc3339())?;
        Ok(())
    }
}

fn read_last_tick(db: &SqliteStore) -> Option<DateTime<Utc>> {
    let raw = match db.get(LAST_TICK_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key = LAST_TICK_KEY, error = %e, "ignoring last tick");
            return None;
        }
    };
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(key = LAST_TICK_KEY, error = %e, "ignoring last tick");
            None
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
