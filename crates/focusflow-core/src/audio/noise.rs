//! Brown noise for ambient playback during Work.
//!
//! A one-pole leaky integrator over uniform white noise:
//!
//! ```text
//! out    = (last_out + 0.02 * white) / 1.02
//! sample = out * 3.5
//! ```
//!
//! The `3.5` gain restores the loudness the filter takes away. The filter
//! keeps `|out| <= 1`, so samples stay within `[-3.5, 3.5]`.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::AudioOutput;

const LEAK: f32 = 0.02;
const NORMALIZE: f32 = 1.02;
const MAKEUP_GAIN: f32 = 3.5;

/// Loop length of a generated buffer.
pub const NOISE_BUFFER_SECS: u32 = 2;
/// Linear playback amplitude.
pub const NOISE_GAIN: f32 = 0.15;
const FADE_IN: Duration = Duration::from_millis(500);
const FADE_OUT: Duration = Duration::from_millis(300);

/// Endless brown-noise sample source.
#[derive(Debug, Clone)]
pub struct BrownNoise<R> {
    rng: R,
    last_out: f32,
}

impl<R: Rng> BrownNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, last_out: 0.0 }
    }

    pub fn next_sample(&mut self) -> f32 {
        let white: f32 = self.rng.gen_range(-1.0..=1.0);
        let out = (self.last_out + LEAK * white) / NORMALIZE;
        self.last_out = out;
        out * MAKEUP_GAIN
    }

    pub fn buffer(&mut self, len: usize) -> Vec<f32> {
        (0..len).map(|_| self.next_sample()).collect()
    }
}

impl<R: Rng> Iterator for BrownNoise<R> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.next_sample())
    }
}

/// Summary of a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoiseStats {
    pub samples: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f64,
    pub rms: f64,
}

impl NoiseStats {
    pub fn of(samples: &[f32]) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &s in samples {
            min = min.min(s);
            max = max.max(s);
            sum += f64::from(s);
            sum_sq += f64::from(s) * f64::from(s);
        }
        let n = samples.len().max(1) as f64;
        Self {
            samples: samples.len(),
            min: if samples.is_empty() { 0.0 } else { min },
            max: if samples.is_empty() { 0.0 } else { max },
            mean: sum / n,
            rms: (sum_sq / n).sqrt(),
        }
    }
}

/// Looping brown-noise playback on an [`AudioOutput`].
///
/// Every `start` generates a fresh buffer and supersedes the previous loop.
/// If the output is unavailable the player stays stopped and tries again on
/// the next `start`; the error is logged, not returned.
pub struct NoisePlayer<O, R = StdRng> {
    output: O,
    rng: R,
    playing: bool,
}

impl<O: AudioOutput> NoisePlayer<O> {
    pub fn new(output: O) -> Self {
        Self::with_rng(output, StdRng::from_entropy())
    }
}

impl<O: AudioOutput, R: Rng> NoisePlayer<O, R> {
    pub fn with_rng(output: O, rng: R) -> Self {
        Self {
            output,
            rng,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start(&mut self) {
        if self.playing {
            self.stop();
        }

        let len = self.output.sample_rate() as usize * NOISE_BUFFER_SECS as usize;
        let buffer = BrownNoise::new(&mut self.rng).buffer(len);
        match self.output.play_loop(buffer, NOISE_GAIN, FADE_IN) {
            Ok(()) => {
                self.playing = true;
                tracing::info!("brown noise started");
            }
            Err(e) => {
                self.playing = false;
                tracing::warn!(error = %e, "brown noise skipped");
            }
        }
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        if let Err(e) = self.output.stop_loop(FADE_OUT) {
            tracing::warn!(error = %e, "brown noise did not stop cleanly");
        } else {
            tracing::info!("brown noise stopped");
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
