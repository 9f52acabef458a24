use clap::Subcommand;
use focusflow_core::settings::FIELDS;
use focusflow_core::{SettingsStore, SilentOutput, SqliteStore, TimerSettings};

use super::{print_json, CliResult, PersistedTimer};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a setting (e.g. "workDuration", "brownNoiseEnabled")
    Get {
        /// Setting name
        key: String,
    },
    /// Set a setting
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
    /// List all settings
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key } => {
            let settings = SettingsStore::open(SqliteStore::open()?).settings();
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    let known: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
                    return Err(format!(
                        "unknown key: {key} (expected one of {})",
                        known.join(", ")
                    )
                    .into());
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let (mut timer, _) = PersistedTimer::open(SilentOutput::default())?;
            timer.session_mut().set_field(&key, &value)?;
            timer.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let settings = SettingsStore::open(SqliteStore::open()?).settings();
            print_json(&settings)?;
        }
        ConfigAction::Reset => {
            let (mut timer, _) = PersistedTimer::open(SilentOutput::default())?;
            timer.session_mut().update_settings(TimerSettings::default())?;
            timer.save()?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
