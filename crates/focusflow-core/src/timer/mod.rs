mod engine;
mod phase;
mod ticker;

pub use engine::{PhaseChangeCallback, TimerEngine, TimerSnapshot, TimerState, SESSION_DOTS};
pub use phase::Phase;
pub use ticker::{catch_up, Ticker, TICK_PERIOD};
