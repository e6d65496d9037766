//! Runtime configuration for noisegen.
//!
//! Contains the generation parameters and cache path configuration,
//! loadable from environment variables at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default track duration in seconds (25 minutes).
pub const DEFAULT_DURATION_SEC: u32 = 1500;

/// Upper bound on track duration in seconds (2 hours).
pub const MAX_DURATION_SEC: u32 = 7200;

/// Upper bound on the sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Runtime configuration for generation and caching.
///
/// This configuration is typically loaded from command-line arguments
/// or environment variables at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Duration of the generated track in seconds.
    pub duration_sec: u32,

    /// Root directory for the blob cache.
    /// If None, uses the platform-specific default cache location.
    pub cache_path: Option<PathBuf>,

    /// Seed for reproducible generation. If None, every run uses fresh
    /// randomness and produces a different track.
    pub seed: Option<u64>,
}

impl NoiseConfig {
    /// Creates a new NoiseConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a NoiseConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `NOISEGEN_SAMPLE_RATE` - Output sample rate in Hz
    /// - `NOISEGEN_DURATION` - Track duration in seconds
    /// - `NOISEGEN_CACHE_PATH` - Root directory for the blob cache
    /// - `NOISEGEN_SEED` - Seed for reproducible generation
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(rate_str) = std::env::var("NOISEGEN_SAMPLE_RATE") {
            if let Ok(rate) = rate_str.parse::<u32>() {
                if rate > 0 {
                    config.sample_rate = rate;
                }
            }
        }

        if let Ok(duration_str) = std::env::var("NOISEGEN_DURATION") {
            if let Ok(duration) = duration_str.parse::<u32>() {
                if duration > 0 {
                    config.duration_sec = duration;
                }
            }
        }

        if let Ok(path) = std::env::var("NOISEGEN_CACHE_PATH") {
            config.cache_path = Some(PathBuf::from(path));
        }

        if let Ok(seed_str) = std::env::var("NOISEGEN_SEED") {
            if let Ok(seed) = seed_str.parse::<u64>() {
                config.seed = Some(seed);
            }
        }

        config
    }

    /// Returns the effective cache root, using platform defaults if not
    /// specified.
    pub fn effective_cache_path(&self) -> PathBuf {
        if let Some(ref path) = self.cache_path {
            path.clone()
        } else {
            default_cache_path()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }
        if self.sample_rate > MAX_SAMPLE_RATE {
            return Some(format!(
                "sample_rate too high: {} (max {})",
                self.sample_rate, MAX_SAMPLE_RATE
            ));
        }
        if self.duration_sec == 0 {
            return Some("duration_sec must be > 0".to_string());
        }
        if self.duration_sec > MAX_DURATION_SEC {
            return Some(format!(
                "duration_sec too high: {} (max {})",
                self.duration_sec, MAX_DURATION_SEC
            ));
        }

        // The WAV header stores the data size as u32, at 4 bytes per sample.
        let data_bytes = self.sample_rate as u64 * self.duration_sec as u64 * 4;
        if data_bytes > u32::MAX as u64 {
            return Some(format!(
                "data size {} overflows the u32 header field ({} max); \
                 lower sample_rate or duration_sec",
                data_bytes,
                u32::MAX
            ));
        }

        None
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            cache_path: None,
            seed: None,
        }
    }
}

/// Returns the platform-specific default cache root.
///
/// Uses the `directories` crate to find appropriate locations:
/// - macOS: ~/Library/Caches/noisegen
/// - Linux: ~/.cache/noisegen
/// - Windows: C:\Users\<user>\AppData\Local\noisegen\cache
fn default_cache_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "noisegen") {
        proj_dirs.cache_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from("./cache")
    }
}
