//! Persisted settings and theme records.
//!
//! Both stores read their record once at construction and keep the most
//! recently accepted copy in memory. Unreadable or invalid records fall back
//! to defaults and are logged, never surfaced.

use serde::de::DeserializeOwned;

use super::kv::{read_record, write_record, KeyValueStore, SETTINGS_KEY, THEME_KEY};
use crate::error::{PersistenceError, Result};
use crate::settings::TimerSettings;
use crate::theme::{AccentColor, FontFamily, ThemeSettings};

fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_record(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "falling back to defaults");
            T::default()
        }
    }
}

/// Validated timer settings backed by a key-value store.
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
    current: TimerSettings,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Restore settings from `store`, filling absent fields from defaults.
    ///
    /// A record whose values are out of bounds is discarded as a whole.
    pub fn open(store: S) -> Self {
        let loaded: TimerSettings = load_or_default(&store, SETTINGS_KEY);
        let current = match loaded.validate() {
            Ok(()) => loaded,
            Err(e) => {
                tracing::warn!(key = SETTINGS_KEY, error = %e, "stored settings rejected");
                TimerSettings::default()
            }
        };
        Self { store, current }
    }

    pub fn settings(&self) -> TimerSettings {
        self.current
    }

    /// Validate and persist `settings`.
    ///
    /// # Errors
    /// Returns a validation error (nothing is written) or the store's write
    /// error (the in-memory copy is left unchanged).
    pub fn update(&mut self, settings: TimerSettings) -> Result<()> {
        settings.validate()?;
        write_record(&mut self.store, SETTINGS_KEY, &settings)?;
        self.current = settings;
        Ok(())
    }

    /// Replace one field from user text, then validate and persist.
    ///
    /// # Errors
    /// See [`TimerSettings::with_field`] and [`SettingsStore::update`].
    pub fn set_field(&mut self, key: &str, raw: &str) -> Result<TimerSettings> {
        let updated = self.current.with_field(key, raw)?;
        self.update(updated)?;
        Ok(updated)
    }

    /// Drop the stored record and return to defaults.
    ///
    /// # Errors
    /// Returns the store's error if the record cannot be removed.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(SETTINGS_KEY)?;
        self.current = TimerSettings::default();
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Cosmetic theme record backed by a key-value store.
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    current: ThemeSettings,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn open(store: S) -> Self {
        let current = load_or_default(&store, THEME_KEY);
        Self { store, current }
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.current
    }

    /// # Errors
    /// Returns the store's write error.
    pub fn update(&mut self, theme: ThemeSettings) -> Result<()> {
        write_record(&mut self.store, THEME_KEY, &theme)?;
        self.current = theme;
        Ok(())
    }

    /// # Errors
    /// Returns `UnknownOption` for an unknown font id, or the write error.
    pub fn set_font(&mut self, id: &str) -> Result<()> {
        let font: FontFamily = id.parse()?;
        self.update(ThemeSettings {
            font,
            ..self.current.clone()
        })
    }

    /// # Errors
    /// Returns `UnknownOption` for an id outside the catalog, or the write
    /// error.
    pub fn set_wallpaper(&mut self, id: &str) -> Result<()> {
        let updated = self.current.with_wallpaper(id)?;
        self.update(updated)
    }

    /// # Errors
    /// Returns `UnknownOption` for an unknown color id, or the write error.
    pub fn set_accent(&mut self, id: &str) -> Result<()> {
        let accent_color: AccentColor = id.parse()?;
        self.update(ThemeSettings {
            accent_color,
            ..self.current.clone()
        })
    }

    /// # Errors
    /// Returns the store's error if the record cannot be removed.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(THEME_KEY)?;
        self.current = ThemeSettings::default();
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
