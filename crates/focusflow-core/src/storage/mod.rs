mod database;
mod kv;
mod settings_store;

pub use database::SqliteStore;
pub use kv::{
    read_record, write_record, KeyValueStore, MemoryStore, ENGINE_KEY, LAST_TICK_KEY,
    SETTINGS_KEY, THEME_KEY,
};
pub use settings_store::{SettingsStore, ThemeStore};

use std::path::PathBuf;

use crate::error::PersistenceError;

/// Returns the data directory.
///
/// `FOCUSFLOW_DATA_DIR` wins if set; otherwise `~/.config/focusflow[-dev]/`
/// based on `FOCUSFLOW_ENV`. Set `FOCUSFLOW_ENV=dev` to use the development
/// directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = match std::env::var_os("FOCUSFLOW_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FOCUSFLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focusflow-dev")
            } else {
                base_dir.join("focusflow")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| PersistenceError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
