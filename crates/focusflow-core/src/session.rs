//! A running focus session: engine, persisted settings and ambient audio.
//!
//! `FocusSession` is what a UI layer drives. It forwards every control
//! operation to the [`TimerEngine`] and afterwards re-applies the ambient
//! noise rule: brown noise plays while the timer runs in a Work phase and
//! noise is enabled.

use crate::audio::{AudioOutput, NoisePlayer, TransitionNotifier};
use crate::error::Result;
use crate::events::Event;
use crate::settings::TimerSettings;
use crate::storage::{KeyValueStore, SettingsStore, THEME_KEY};
use crate::timer::{catch_up, Phase, TimerEngine, TimerSnapshot};
use chrono::{DateTime, Utc};

pub struct FocusSession<S: KeyValueStore, O: AudioOutput> {
    engine: TimerEngine,
    settings: SettingsStore<S>,
    noise: NoisePlayer<O>,
    /// Playback was already attempted for the current noise window.
    noise_attempted: bool,
}

impl<S: KeyValueStore, O: AudioOutput> FocusSession<S, O> {
    /// Fresh session from the settings persisted in `store`.
    pub fn new(store: S, noise_output: O) -> Self {
        let settings = SettingsStore::open(store);
        let engine = TimerEngine::new(settings.settings());
        Self::with_engine(settings, engine, noise_output)
    }

    /// Resume a previously saved engine.
    pub fn with_engine(settings: SettingsStore<S>, engine: TimerEngine, noise_output: O) -> Self {
        Self {
            engine,
            settings,
            noise: NoisePlayer::new(noise_output),
            noise_attempted: false,
        }
    }

    /// Play `notifier`'s cue on every phase switch.
    pub fn attach_notifier<C>(&mut self, notifier: TransitionNotifier<C>)
    where
        C: AudioOutput + 'static,
    {
        self.engine.register_phase_change_callback(notifier.into_callback());
    }

    /// Play `notifier`'s cue, then run `hook`, on every phase switch.
    pub fn attach_notifier_with<C, F>(&mut self, notifier: TransitionNotifier<C>, mut hook: F)
    where
        C: AudioOutput + 'static,
        F: FnMut(Phase) + Send + 'static,
    {
        let mut cue = notifier.into_callback();
        self.engine.register_phase_change_callback(move |phase| {
            cue(phase);
            hook(phase);
        });
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn state(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.engine.end_time()
    }

    pub fn duration(&self, phase: Phase) -> u32 {
        self.engine.duration(phase)
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings.settings()
    }

    pub fn is_noise_playing(&self) -> bool {
        self.noise.is_playing()
    }

    pub fn noise_output(&self) -> &O {
        self.noise.output()
    }

    pub fn store(&self) -> &S {
        self.settings.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.settings.store_mut()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start();
        self.sync_noise(event.is_some());
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.sync_noise(false);
        event
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.engine.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        let event = self.engine.reset();
        self.sync_noise(false);
        event
    }

    pub fn skip(&mut self) -> Option<Event> {
        let event = self.engine.skip();
        self.sync_noise(false);
        event
    }

    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        if event.is_some() {
            self.sync_noise(false);
        }
        event
    }

    /// Apply `elapsed_secs` of missed ticks.
    pub fn catch_up(&mut self, elapsed_secs: u64) -> Vec<Event> {
        let events = catch_up(&mut self.engine, elapsed_secs);
        self.sync_noise(false);
        events
    }

    /// Validate, persist, then apply `settings`.
    ///
    /// # Errors
    /// Returns the validation or persistence error; neither the stored
    /// record nor the engine changes in that case.
    pub fn update_settings(&mut self, settings: TimerSettings) -> Result<Event> {
        self.settings.update(settings)?;
        let event = self.engine.update_settings(settings)?;
        self.sync_noise(false);
        Ok(event)
    }

    /// Replace one settings field from user text.
    ///
    /// # Errors
    /// See [`FocusSession::update_settings`].
    pub fn set_field(&mut self, key: &str, raw: &str) -> Result<Event> {
        let updated = self.settings.settings().with_field(key, raw)?;
        self.update_settings(updated)
    }

    /// Clear the stored settings and theme, and restart from defaults.
    ///
    /// # Errors
    /// Returns the store's error if a record cannot be removed.
    pub fn factory_reset(&mut self) -> Result<Event> {
        self.settings.reset()?;
        self.settings.store_mut().remove(THEME_KEY)?;
        self.engine.update_settings(TimerSettings::default())?;
        self.engine.reset();
        self.sync_noise(false);
        Ok(Event::TimerReset { at: Utc::now() })
    }

    /// Bring noise playback in line with the engine.
    ///
    /// A failed start is retried only on an explicit `start`, or once the
    /// timer has left the noise window and come back.
    fn sync_noise(&mut self, explicit_start: bool) {
        let wanted = self.engine.is_running()
            && self.engine.phase() == Phase::Work
            && self.engine.settings().brown_noise_enabled;

        if !wanted {
            self.noise.stop();
            self.noise_attempted = false;
            return;
        }
        if !self.noise.is_playing() && (explicit_start || !self.noise_attempted) {
            self.noise.start();
            self.noise_attempted = true;
        }
    }
}
