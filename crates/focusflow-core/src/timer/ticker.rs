//! One-second scheduling for the engine.
//!
//! [`Ticker`] is the "invoke every second while armed" source used by a
//! long-running UI loop. [`catch_up`] covers short-lived callers that only
//! learn how much wall-clock time passed since they last looked.

use std::time::Duration;

use tokio::time::{interval, Instant, Interval, MissedTickBehavior};

use super::engine::TimerEngine;
use crate::events::Event;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Re-armable periodic timer.
///
/// Disarmed tickers never fire. Arming restarts the period, so the first
/// tick after a resume comes one full second later. Late ticks are delayed
/// rather than bursted, so a slow consumer never sees two ticks at once.
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
    armed: bool,
}

impl Ticker {
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let mut interval = interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn arm(&mut self) {
        if !self.armed {
            self.interval.reset_at(Instant::now() + TICK_PERIOD);
            self.armed = true;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Arm while the engine is running, disarm otherwise.
    pub fn sync(&mut self, running: bool) {
        if running {
            self.arm();
        } else {
            self.disarm();
        }
    }

    /// Wait for the next tick. Pends forever while disarmed.
    pub async fn tick(&mut self) {
        if self.armed {
            self.interval.tick().await;
        } else {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one `tick()` per whole elapsed second.
///
/// Stops early if the engine stops running (a phase completed without
/// auto-start). Returns the events produced, in order.
pub fn catch_up(engine: &mut TimerEngine, elapsed_secs: u64) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..elapsed_secs {
        if !engine.is_running() {
            break;
        }
        if let Some(event) = engine.tick() {
            events.push(event);
        }
    }
    events
}
