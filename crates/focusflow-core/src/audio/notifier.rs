//! Audible cue on each phase transition.
//!
//! | destination | pattern                 | length | start gain |
//! |-------------|-------------------------|--------|------------|
//! | Work        | 800 Hz                  | 0.3 s  | 0.30       |
//! | ShortBreak  | 600 Hz, 700 Hz at 0.1 s | 0.4 s  | 0.25       |
//! | LongBreak   | 400 Hz                  | 0.6 s  | 0.20       |
//!
//! Each cue decays exponentially to 0.01.

use std::f32::consts::TAU;
use std::time::Duration;

use super::AudioOutput;
use crate::timer::Phase;

const END_GAIN: f32 = 0.01;

/// Frequency in effect from `at` until the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneStep {
    pub at: Duration,
    pub frequency_hz: f32,
}

/// A sine tone with stepped frequency and exponential decay.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCue {
    pub steps: Vec<ToneStep>,
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl ToneCue {
    fn single(frequency_hz: f32, duration: Duration, start_gain: f32) -> Self {
        Self {
            steps: vec![ToneStep {
                at: Duration::ZERO,
                frequency_hz,
            }],
            duration,
            start_gain,
            end_gain: END_GAIN,
        }
    }

    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Work => Self::single(800.0, Duration::from_millis(300), 0.3),
            Phase::ShortBreak => Self {
                steps: vec![
                    ToneStep {
                        at: Duration::ZERO,
                        frequency_hz: 600.0,
                    },
                    ToneStep {
                        at: Duration::from_millis(100),
                        frequency_hz: 700.0,
                    },
                ],
                duration: Duration::from_millis(400),
                start_gain: 0.25,
                end_gain: END_GAIN,
            },
            Phase::LongBreak => Self::single(400.0, Duration::from_millis(600), 0.2),
        }
    }

    fn frequency_at(&self, t: Duration) -> f32 {
        self.steps
            .iter()
            .take_while(|step| step.at <= t)
            .last()
            .map(|step| step.frequency_hz)
            .unwrap_or(0.0)
    }

    /// Synthesize the cue at `sample_rate`.
    ///
    /// Phase is accumulated across frequency steps so there is no
    /// discontinuity at a step boundary.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let len = (self.duration.as_secs_f64() * f64::from(sample_rate)).round() as usize;
        let total = self.duration.as_secs_f32();
        let ratio = self.end_gain / self.start_gain;
        let mut phase = 0.0f32;
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            let t = i as f32 / sample_rate as f32;
            let frequency = self.frequency_at(Duration::from_secs_f32(t));
            let gain = self.start_gain * ratio.powf(t / total);
            samples.push(phase.sin() * gain);
            phase = (phase + TAU * frequency / sample_rate as f32) % TAU;
        }
        samples
    }
}

/// Plays the cue for each destination phase.
pub struct TransitionNotifier<O> {
    output: O,
}

impl<O: AudioOutput> TransitionNotifier<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }

    /// Hand the cue to the output and return without waiting for playback.
    ///
    /// An unavailable output skips the cue.
    pub fn notify(&mut self, phase: Phase) {
        let samples = ToneCue::for_phase(phase).render(self.output.sample_rate());
        if let Err(e) = self.output.play_once(samples) {
            tracing::warn!(%phase, error = %e, "transition cue skipped");
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

impl<O: AudioOutput + 'static> TransitionNotifier<O> {
    /// Turn the notifier into a phase-change callback.
    pub fn into_callback(mut self) -> impl FnMut(Phase) + Send + 'static {
        move |phase| self.notify(phase)
    }
}
