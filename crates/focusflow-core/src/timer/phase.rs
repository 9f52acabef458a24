use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }

    /// Phase that follows `self`.
    ///
    /// Leaving Work counts the just-finished session as completed, so the
    /// `completed + 1`-th session routes to a long break whenever it lands on
    /// a multiple of `sessions_before_long_break`. Breaks always lead back to
    /// Work.
    pub fn next(self, work_sessions_completed: u32, sessions_before_long_break: u32) -> Phase {
        match self {
            Phase::Work => {
                let n = work_sessions_completed.saturating_add(1);
                if sessions_before_long_break != 0 && n % sessions_before_long_break == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus Time",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
