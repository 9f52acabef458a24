use focusflow_core::storage::{ENGINE_KEY, LAST_TICK_KEY};
use focusflow_core::{KeyValueStore, SilentOutput};

use super::{print_json, CliResult, PersistedTimer};

/// Factory reset: settings, theme and the saved timer all go back to defaults.
pub fn run() -> CliResult {
    let (mut timer, _) = PersistedTimer::open(SilentOutput::default())?;
    let session = timer.session_mut();
    let event = session.factory_reset()?;

    let store = session.store_mut();
    store.remove(ENGINE_KEY)?;
    store.remove(LAST_TICK_KEY)?;

    print_json(&event)
}
