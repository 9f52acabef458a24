//! # FocusFlow Core Library
//!
//! Core logic for the FocusFlow Pomodoro timer. Every operation is reachable
//! from the standalone CLI binary; a graphical front end is expected to be a
//! thin layer over the same types.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a phase state machine that the caller advances with
//!   one `tick()` per second while running
//! - **Settings**: bounded, validated timer configuration
//! - **Storage**: key-value records in SQLite (or memory, for tests)
//! - **Audio**: brown noise and transition cues rendered as sample buffers,
//!   played through an [`AudioOutput`] backend
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`FocusSession`]: engine plus persisted settings plus ambient noise
//! - [`SettingsStore`] / [`ThemeStore`]: persisted user preferences
//! - [`SqliteStore`]: on-disk key-value storage

pub mod audio;
pub mod error;
pub mod events;
pub mod session;
pub mod settings;
pub mod storage;
pub mod theme;
pub mod timer;

pub use audio::{AudioOutput, NoisePlayer, SilentOutput, TransitionNotifier};
pub use error::{AudioError, CoreError, PersistenceError, ValidationError};
pub use events::Event;
pub use session::FocusSession;
pub use settings::TimerSettings;
pub use storage::{KeyValueStore, MemoryStore, SettingsStore, SqliteStore, ThemeStore};
pub use theme::{AccentColor, FontFamily, ThemeSettings, Wallpaper};
pub use timer::{Phase, Ticker, TimerEngine, TimerSnapshot, TimerState};
