use std::io::Write;
use std::time::Duration;

use focusflow_core::audio::DEFAULT_SAMPLE_RATE;
use focusflow_core::{AudioError, AudioOutput};

/// Audio output for a terminal: one-shot cues ring the bell, loops are
/// accepted silently.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl AudioOutput for TerminalOutput {
    fn sample_rate(&self) -> u32 {
        DEFAULT_SAMPLE_RATE
    }

    fn play_loop(
        &mut self,
        samples: Vec<f32>,
        gain: f32,
        _fade_in: Duration,
    ) -> Result<(), AudioError> {
        tracing::debug!(samples = samples.len(), gain, "noise loop (terminal has no speaker)");
        Ok(())
    }

    fn stop_loop(&mut self, _fade_out: Duration) -> Result<(), AudioError> {
        Ok(())
    }

    fn play_once(&mut self, _samples: Vec<f32>) -> Result<(), AudioError> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|e| AudioError::Unavailable(e.to_string()))
    }
}
