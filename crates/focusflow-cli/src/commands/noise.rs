use clap::Subcommand;
use focusflow_core::audio::{BrownNoise, NoiseStats, DEFAULT_SAMPLE_RATE, NOISE_BUFFER_SECS};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{print_json, CliResult};

/// One hour at 48 kHz.
const MAX_SAMPLES: usize = 3_600 * 48_000;

#[derive(Subcommand)]
pub enum NoiseAction {
    /// Generate brown noise and print sample statistics as JSON
    Stats {
        /// Buffer length in seconds
        #[arg(long, default_value_t = NOISE_BUFFER_SECS)]
        seconds: u32,
        /// Samples per second
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
        /// Seed for a reproducible buffer
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(action: NoiseAction) -> CliResult {
    match action {
        NoiseAction::Stats {
            seconds,
            sample_rate,
            seed,
        } => {
            let len = sample_count(seconds, sample_rate)?;
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let samples = BrownNoise::new(rng).buffer(len);
            print_json(&NoiseStats::of(&samples))?;
        }
    }
    Ok(())
}

fn sample_count(seconds: u32, sample_rate: u32) -> Result<usize, String> {
    if sample_rate == 0 {
        return Err("sample rate must be positive".into());
    }
    usize::try_from(u64::from(seconds) * u64::from(sample_rate))
        .ok()
        .filter(|&len| len <= MAX_SAMPLES)
        .ok_or_else(|| format!("buffer too large: {seconds} s at {sample_rate} Hz"))
}
