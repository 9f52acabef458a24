use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, TimerSnapshot};

/// Every state change in the engine produces an Event.
/// The CLI prints them; the phase-change callback covers live consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and the engine moved to the next phase.
    PhaseCompleted {
        from: Phase,
        to: Phase,
        work_sessions_completed: u32,
        auto_started: bool,
        at: DateTime<Utc>,
    },
    PhaseSkipped {
        from: Phase,
        to: Phase,
        work_sessions_completed: u32,
        at: DateTime<Utc>,
    },
    SettingsUpdated {
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        #[serde(flatten)]
        state: TimerSnapshot,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Destination phase for events that switch phases.
    pub fn switched_to(&self) -> Option<Phase> {
        match self {
            Event::PhaseCompleted { to, .. } | Event::PhaseSkipped { to, .. } => Some(*to),
            _ => None,
        }
    }
}
