//! CLI argument parser.
//!
//! Command-line interface for the noisegen binary: generation
//! parameters, cache controls, and the output path for the playable
//! WAV file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    NoiseConfig, DEFAULT_DURATION_SEC, DEFAULT_SAMPLE_RATE, MAX_DURATION_SEC, MAX_SAMPLE_RATE,
};

/// noisegen: procedural ambient noise generator with persistent caching
#[derive(Parser, Debug)]
#[command(name = "noisegen")]
#[command(about = "Generates a long ambient noise track as a WAV file, reusing a cached copy when available")]
#[command(version)]
pub struct Cli {
    /// Duration of the track in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SEC, value_parser = clap::value_parser!(u32).range(1..=MAX_DURATION_SEC as i64))]
    pub duration: u32,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE, value_parser = clap::value_parser!(u32).range(1..=MAX_SAMPLE_RATE as i64))]
    pub sample_rate: u32,

    /// Output WAV file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root directory for the blob cache
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Skip the cache lookup and always generate a fresh track
    #[arg(long)]
    pub regenerate: bool,

    /// Bypass the cache entirely: no lookup, no save
    #[arg(long)]
    pub no_cache: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the effective output path.
    ///
    /// Defaults to "noise.wav" in the current directory if not specified.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("noise.wav"))
    }

    /// Builds the runtime configuration.
    ///
    /// Starts from environment variables, then applies the generation
    /// flags on top; cache dir and seed keep the environment value
    /// unless given explicitly.
    pub fn to_config(&self) -> NoiseConfig {
        let mut config = NoiseConfig::from_env();
        config.sample_rate = self.sample_rate;
        config.duration_sec = self.duration;
        if self.cache_dir.is_some() {
            config.cache_path = self.cache_dir.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}
