//! Entry points for the generation and cache flow.
//!
//! A [`NoiseSession`] exposes the two operations a host collaborator
//! drives: `load_cached` (try to reuse the stored container) and
//! `generate` (synthesize, encode, best-effort cache). All failures are
//! absorbed at this boundary and reported as an [`Outcome`]; no error
//! type crosses into the host.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::audio::wav;
use crate::cache::BlobCache;
use crate::config::NoiseConfig;
use crate::noise::synth::{run_to_completion, SynthJob};

/// Outcome of an entry-point call, as consumed by the host.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A playable WAV container is available.
    Ready(Vec<u8>),
    /// No usable audio; the host should offer (re)generation.
    NeedsGeneration,
    /// A generation run is already in flight; this request was rejected
    /// rather than racing two writes to the same cache slot.
    InFlight,
}

/// Session owning the configuration and the in-flight guard.
pub struct NoiseSession {
    config: NoiseConfig,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when a generation run ends, including on
/// early return.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl NoiseSession {
    /// Creates a session with the given configuration.
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Entry point B: loads the cached container.
    ///
    /// Any storage problem, from a store that fails to open to a corrupt
    /// entry, degrades to [`Outcome::NeedsGeneration`].
    pub fn load_cached(&self) -> Outcome {
        match BlobCache::open(&self.config.effective_cache_path()) {
            Ok(cache) => match cache.load() {
                Some(container) => Outcome::Ready(container),
                None => Outcome::NeedsGeneration,
            },
            Err(e) => {
                eprintln!("Warning: {}", e);
                Outcome::NeedsGeneration
            }
        }
    }

    /// Entry point A: generates a fresh track.
    ///
    /// See [`generate_with_progress`](Self::generate_with_progress).
    pub fn generate(&self) -> Outcome {
        self.generate_with_progress(|_, _| {})
    }

    /// Generates a fresh track with a progress callback.
    ///
    /// Synthesizes the sample buffer chunk by chunk (the callback
    /// receives `(samples_completed, samples_total)` after each chunk),
    /// encodes it as a WAV container, and overwrites the cache entry.
    /// Caching is best-effort: a failed save is logged and the container
    /// is still returned as [`Outcome::Ready`]. A second call while one
    /// run is in flight returns [`Outcome::InFlight`].
    pub fn generate_with_progress<F>(&self, on_progress: F) -> Outcome
    where
        F: FnMut(usize, usize),
    {
        self.generate_impl(true, on_progress)
    }

    /// Generates a fresh track without touching the blob store.
    ///
    /// Same as [`generate_with_progress`](Self::generate_with_progress)
    /// except the cache entry is left as-is.
    pub fn generate_uncached_with_progress<F>(&self, on_progress: F) -> Outcome
    where
        F: FnMut(usize, usize),
    {
        self.generate_impl(false, on_progress)
    }

    fn generate_impl<F>(&self, save_to_cache: bool, on_progress: F) -> Outcome
    where
        F: FnMut(usize, usize),
    {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Outcome::InFlight;
        }
        let _guard = InFlightGuard(&self.in_flight);

        if let Some(reason) = self.config.validate() {
            eprintln!("Warning: invalid configuration: {}", reason);
            return Outcome::NeedsGeneration;
        }

        let job = match self.config.seed {
            Some(seed) => {
                SynthJob::with_seed(self.config.sample_rate, self.config.duration_sec, seed)
            }
            None => SynthJob::new(self.config.sample_rate, self.config.duration_sec),
        };
        let samples = run_to_completion(job, on_progress);
        let container = wav::encode(&samples, self.config.sample_rate);

        // Best-effort cache: playback does not depend on the save.
        if save_to_cache {
            match BlobCache::open(&self.config.effective_cache_path()) {
                Ok(cache) => {
                    if let Err(e) = cache.save(&container) {
                        eprintln!("Warning: {}", e);
                    }
                }
                Err(e) => eprintln!("Warning: {}", e),
            }
        }

        Outcome::Ready(container)
    }
}
