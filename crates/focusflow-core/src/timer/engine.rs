//! Timer engine implementation.
//!
//! The engine is a phase state machine driven one second at a time. It does
//! not use internal threads - the caller is responsible for calling `tick()`
//! once per elapsed second while the timer runs (see [`super::Ticker`]).
//!
//! ## State Transitions
//!
//! ```text
//! Work -> (ShortBreak | LongBreak) -> Work
//!   x
//! Running <-> Paused
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(settings);
//! engine.register_phase_change_callback(|phase| println!("now: {phase}"));
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::PhaseCompleted) when a phase ends
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::error::ValidationError;
use crate::events::Event;
use crate::settings::TimerSettings;

/// Number of dots in the session indicator.
pub const SESSION_DOTS: u32 = 4;

/// Invoked synchronously with the new phase on every phase switch.
pub type PhaseChangeCallback = Box<dyn FnMut(Phase) + Send>;

/// Mutable run-time state, owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: Phase,
    pub time_left_secs: u32,
    pub is_running: bool,
    /// Incremented when a Work phase is exited, never on break exit.
    pub work_sessions_completed: u32,
    /// Wall-clock start of the current run segment.
    pub start_time: Option<DateTime<Utc>>,
    /// The current interval was reached via skip rather than expiry.
    pub sessions_skipped: bool,
}

impl TimerState {
    fn initial(settings: &TimerSettings) -> Self {
        Self {
            phase: Phase::Work,
            time_left_secs: settings.duration_secs(Phase::Work),
            is_running: false,
            work_sessions_completed: 0,
            start_time: None,
            sessions_skipped: false,
        }
    }
}

/// Read-only view of the engine for the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub time_left_secs: u32,
    pub is_running: bool,
    pub work_sessions_completed: u32,
    pub start_time: Option<DateTime<Utc>>,
    pub sessions_skipped: bool,
    pub total_secs: u32,
    /// 0.0 .. 1.0 elapsed fraction of the current phase.
    pub progress: f64,
    pub end_time: Option<DateTime<Utc>>,
    /// Filled dots in the session indicator.
    pub session_dots: u32,
}

/// Core timer engine.
#[derive(Serialize, Deserialize)]
pub struct TimerEngine {
    settings: TimerSettings,
    state: TimerState,
    #[serde(skip)]
    on_phase_change: Option<PhaseChangeCallback>,
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("on_phase_change", &self.on_phase_change.is_some())
            .finish()
    }
}

impl TimerEngine {
    /// Create an engine from already-accepted settings.
    ///
    /// Starts paused at the beginning of a Work phase.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            state: TimerState::initial(&settings),
            settings,
            on_phase_change: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn time_left_secs(&self) -> u32 {
        self.state.time_left_secs
    }

    pub fn work_sessions_completed(&self) -> u32 {
        self.state.work_sessions_completed
    }

    /// Duration of `phase` in minutes under the current settings.
    pub fn duration(&self, phase: Phase) -> u32 {
        self.settings.duration(phase)
    }

    /// Projected completion time of the current phase.
    ///
    /// Recomputed from `start_time + time_left` on every call, so it moves
    /// whenever the remaining time changes under a fixed start time.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        if !self.state.is_running {
            return None;
        }
        let start = self.state.start_time?;
        Some(start + Duration::seconds(i64::from(self.state.time_left_secs)))
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let total_secs = self.settings.duration_secs(self.state.phase);
        let progress = if total_secs == 0 {
            0.0
        } else {
            (1.0 - f64::from(self.state.time_left_secs) / f64::from(total_secs)).clamp(0.0, 1.0)
        };
        TimerSnapshot {
            phase: self.state.phase,
            time_left_secs: self.state.time_left_secs,
            is_running: self.state.is_running,
            work_sessions_completed: self.state.work_sessions_completed,
            start_time: self.state.start_time,
            sessions_skipped: self.state.sessions_skipped,
            total_secs,
            progress,
            end_time: self.end_time(),
            session_dots: self.state.work_sessions_completed % SESSION_DOTS,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            state: self.snapshot(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the phase-change callback. Only one is held at a time.
    pub fn register_phase_change_callback<F>(&mut self, callback: F)
    where
        F: FnMut(Phase) + Send + 'static,
    {
        self.on_phase_change = Some(Box::new(callback));
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_running {
            return None;
        }
        let now = Utc::now();
        self.state.is_running = true;
        if self.state.start_time.is_none() {
            self.state.start_time = Some(now);
        }
        Some(Event::TimerStarted {
            phase: self.state.phase,
            time_left_secs: self.state.time_left_secs,
            at: now,
        })
    }

    /// Stop the countdown. `start_time` is kept so the run can resume.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.is_running = false;
        Some(Event::TimerPaused {
            phase: self.state.phase,
            time_left_secs: self.state.time_left_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::initial(&self.settings);
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// End the current interval early. Never auto-starts the next phase.
    pub fn skip(&mut self) -> Option<Event> {
        self.state.sessions_skipped = true;
        let from = self.state.phase;
        let next = self.next_phase();
        self.switch_phase(next, false);
        Some(Event::PhaseSkipped {
            from,
            to: next,
            work_sessions_completed: self.state.work_sessions_completed,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::PhaseCompleted)` when the decrement reaches zero
    /// and the engine has switched to the next phase. No-op while paused.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.time_left_secs = self.state.time_left_secs.saturating_sub(1);
        if self.state.time_left_secs > 0 {
            return None;
        }

        let from = self.state.phase;
        let next = self.next_phase();
        self.switch_phase(next, true);
        Some(Event::PhaseCompleted {
            from,
            to: next,
            work_sessions_completed: self.state.work_sessions_completed,
            auto_started: self.state.is_running,
            at: Utc::now(),
        })
    }

    /// Replace the settings.
    ///
    /// While paused the current phase's remaining time is recomputed from
    /// the new durations; a running countdown is left untouched.
    ///
    /// # Errors
    /// Returns the validation error and keeps the previous settings if any
    /// field is out of bounds.
    pub fn update_settings(&mut self, settings: TimerSettings) -> Result<Event, ValidationError> {
        settings.validate()?;
        self.settings = settings;
        if !self.state.is_running {
            self.state.time_left_secs = self.settings.duration_secs(self.state.phase);
        }
        tracing::debug!(
            phase = %self.state.phase,
            time_left_secs = self.state.time_left_secs,
            "settings updated"
        );
        Ok(Event::SettingsUpdated {
            time_left_secs: self.state.time_left_secs,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn next_phase(&self) -> Phase {
        self.state.phase.next(
            self.state.work_sessions_completed,
            self.settings.work_sessions_before_long_break,
        )
    }

    fn switch_phase(&mut self, new_phase: Phase, auto_start: bool) {
        if self.state.phase == Phase::Work && new_phase != Phase::Work {
            self.state.work_sessions_completed += 1;
        }

        self.state.phase = new_phase;
        self.state.time_left_secs = self.settings.duration_secs(new_phase);

        if let Some(callback) = self.on_phase_change.as_mut() {
            callback(new_phase);
        }

        if auto_start && self.settings.auto_start_next_phase {
            self.state.is_running = true;
            self.state.start_time = Some(Utc::now());
        } else {
            self.state.is_running = false;
            self.state.start_time = None;
        }

        tracing::debug!(
            phase = %new_phase,
            work_sessions_completed = self.state.work_sessions_completed,
            running = self.state.is_running,
            "phase switched"
        );
    }
}
