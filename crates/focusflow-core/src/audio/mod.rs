//! Audio generation and the output seam.
//!
//! The core only produces sample buffers. Getting them to a speaker is the
//! job of an [`AudioOutput`] implementation supplied by the embedding
//! application.

mod noise;
mod notifier;

pub use noise::{BrownNoise, NoisePlayer, NoiseStats, NOISE_BUFFER_SECS, NOISE_GAIN};
pub use notifier::{ToneCue, ToneStep, TransitionNotifier};

use std::time::Duration;

use crate::error::AudioError;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Playback backend.
///
/// Every method returns promptly: looping and one-shot playback run as the
/// backend's own background work. A backend that cannot reach an output
/// device returns [`AudioError::Unavailable`] and is asked again on the next
/// explicit start.
pub trait AudioOutput: Send {
    fn sample_rate(&self) -> u32;

    /// Loop `samples` seamlessly, ramping from silence to `gain` over
    /// `fade_in`. Replaces any loop already playing.
    fn play_loop(
        &mut self,
        samples: Vec<f32>,
        gain: f32,
        fade_in: Duration,
    ) -> Result<(), AudioError>;

    /// Ramp the current loop to silence over `fade_out`, then halt it.
    fn stop_loop(&mut self, fade_out: Duration) -> Result<(), AudioError>;

    /// Play `samples` once, fire-and-forget. One-shots may overlap.
    fn play_once(&mut self, samples: Vec<f32>) -> Result<(), AudioError>;
}

impl<O: AudioOutput + ?Sized> AudioOutput for Box<O> {
    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn play_loop(
        &mut self,
        samples: Vec<f32>,
        gain: f32,
        fade_in: Duration,
    ) -> Result<(), AudioError> {
        (**self).play_loop(samples, gain, fade_in)
    }

    fn stop_loop(&mut self, fade_out: Duration) -> Result<(), AudioError> {
        (**self).stop_loop(fade_out)
    }

    fn play_once(&mut self, samples: Vec<f32>) -> Result<(), AudioError> {
        (**self).play_once(samples)
    }
}

/// Accepts and discards everything.
#[derive(Debug, Clone, Copy)]
pub struct SilentOutput {
    sample_rate: u32,
}

impl SilentOutput {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl Default for SilentOutput {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl AudioOutput for SilentOutput {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn play_loop(
        &mut self,
        _samples: Vec<f32>,
        _gain: f32,
        _fade_in: Duration,
    ) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_loop(&mut self, _fade_out: Duration) -> Result<(), AudioError> {
        Ok(())
    }

    fn play_once(&mut self, _samples: Vec<f32>) -> Result<(), AudioError> {
        Ok(())
    }
}
