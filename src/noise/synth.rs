//! Chunked noise synthesis.
//!
//! Mixes three octaves of gradient noise into a mono f32 sample buffer.
//! Work is organized as a resumable state machine: each [`SynthJob::step`]
//! fills one sample-rate-sized chunk and hands the state back, so a host
//! can interleave other work (UI repaint, I/O) between chunks. The
//! finished buffer is only released on the final step; partial contents
//! are never exposed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::noise::field::{NoiseField, NoiseTable};

/// Octave frequencies mixed into the output signal, in Hz.
pub const OCTAVE_FREQUENCIES: [f64; 3] = [110.0, 220.0, 440.0];

/// Mixing weight per octave. Weights sum to 1.0, which keeps the mixed
/// signal inside [-1, 1].
pub const OCTAVE_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Result of advancing a [`SynthJob`] by one chunk.
#[derive(Debug)]
pub enum SynthState {
    /// More chunks remain; call [`SynthJob::step`] again.
    Running(SynthJob),
    /// Synthesis finished; the complete sample buffer.
    Done(Vec<f32>),
}

/// An in-progress synthesis run.
///
/// Owns the noise field and the partially filled buffer. Each call to
/// [`step`](SynthJob::step) advances by up to one sample rate's worth of
/// samples (one second of audio per chunk).
#[derive(Debug)]
pub struct SynthJob {
    field: NoiseField,
    sample_rate: u32,
    buffer: Vec<f32>,
    total_samples: usize,
    cursor: usize,
}

impl SynthJob {
    /// Creates a job with a freshly randomized noise table.
    ///
    /// The table has one entry per sample-rate unit, so absolute output
    /// values differ between runs. `sample_rate` must be non-zero.
    pub fn new(sample_rate: u32, duration_sec: u32) -> Self {
        let mut rng = rand::thread_rng();
        let table = NoiseTable::generate(sample_rate as usize, &mut rng);
        Self::with_table(table, sample_rate, duration_sec)
    }

    /// Creates a job with a deterministic noise table derived from `seed`.
    pub fn with_seed(sample_rate: u32, duration_sec: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let table = NoiseTable::generate(sample_rate as usize, &mut rng);
        Self::with_table(table, sample_rate, duration_sec)
    }

    /// Creates a job over an existing noise table.
    pub fn with_table(table: NoiseTable, sample_rate: u32, duration_sec: u32) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be non-zero");
        let total_samples = sample_rate as usize * duration_sec as usize;
        Self {
            field: NoiseField::new(table),
            sample_rate,
            buffer: vec![0.0; total_samples],
            total_samples,
            cursor: 0,
        }
    }

    /// Returns the noise field used by this job.
    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Returns `(samples_completed, samples_total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.total_samples)
    }

    /// Fills the next chunk of up to `sample_rate` samples.
    ///
    /// Consumes the job and returns either the job again (more chunks
    /// pending) or the completed buffer.
    pub fn step(mut self) -> SynthState {
        let end = (self.cursor + self.sample_rate as usize).min(self.total_samples);
        let sample_rate = self.sample_rate as f64;
        for i in self.cursor..end {
            let mut mixed = 0.0;
            for (freq, weight) in OCTAVE_FREQUENCIES.iter().zip(OCTAVE_WEIGHTS.iter()) {
                let x = i as f64 / (sample_rate / freq);
                mixed += weight * self.field.value(x);
            }
            self.buffer[i] = mixed as f32;
        }
        self.cursor = end;
        if self.cursor < self.total_samples {
            SynthState::Running(self)
        } else {
            SynthState::Done(self.buffer)
        }
    }
}

/// Synthesizes a complete buffer of `sample_rate * duration_sec` samples.
///
/// Drives a [`SynthJob`] to completion in a tight loop. Hosts that need
/// to interleave other work should drive the job themselves.
pub fn synthesize(sample_rate: u32, duration_sec: u32) -> Vec<f32> {
    run_to_completion(SynthJob::new(sample_rate, duration_sec), |_, _| {})
}

/// Synthesizes with a progress callback invoked after every chunk.
///
/// The callback receives `(samples_completed, samples_total)`.
pub fn synthesize_with_progress<F>(sample_rate: u32, duration_sec: u32, on_progress: F) -> Vec<f32>
where
    F: FnMut(usize, usize),
{
    run_to_completion(SynthJob::new(sample_rate, duration_sec), on_progress)
}

/// Drives a job to completion, reporting progress after each chunk.
pub fn run_to_completion<F>(job: SynthJob, mut on_progress: F) -> Vec<f32>
where
    F: FnMut(usize, usize),
{
    let mut state = SynthState::Running(job);
    loop {
        state = match state {
            SynthState::Running(job) => {
                let next = job.step();
                if let SynthState::Running(ref job) = next {
                    let (done, total) = job.progress();
                    on_progress(done, total);
                }
                next
            }
            SynthState::Done(buffer) => {
                let total = buffer.len();
                on_progress(total, total);
                return buffer;
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_is_rate_times_duration() {
        let buffer = synthesize(100, 3);
        assert_eq!(buffer.len(), 300);

        let buffer = synthesize(8000, 2);
        assert_eq!(buffer.len(), 16000);
    }

    #[test]
    fn zero_duration_yields_empty_buffer() {
        let buffer = synthesize(100, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn samples_finite_and_bounded() {
        let buffer = synthesize(1000, 2);
        for (i, &s) in buffer.iter().enumerate() {
            assert!(s.is_finite(), "non-finite sample at {}", i);
            assert!((-1.0..=1.0).contains(&s), "sample out of range at {}: {}", i, s);
        }
    }

    #[test]
    fn one_second_at_rate_100_is_100_samples() {
        let buffer = synthesize(100, 1);
        assert_eq!(buffer.len(), 100);
    }

    #[test]
    fn first_sample_is_weighted_mix_over_shared_table() {
        // All three octave phases are 0 at index 0, so the first sample
        // is the weighted sum of three value(0) evaluations on the same
        // table (which is exactly 0 at a lattice point).
        let job = SynthJob::with_seed(100, 1, 42);
        let expected: f64 = OCTAVE_WEIGHTS.iter().map(|w| w * job.field().value(0.0)).sum();
        let buffer = run_to_completion(job, |_, _| {});
        assert_eq!(buffer[0], expected as f32);
        assert_eq!(buffer[0], 0.0);
    }

    #[test]
    fn seeded_jobs_reproduce_output() {
        let a = run_to_completion(SynthJob::with_seed(500, 1, 7), |_, _| {});
        let b = run_to_completion(SynthJob::with_seed(500, 1, 7), |_, _| {});
        assert_eq!(a, b);
    }

    #[test]
    fn matches_manual_per_sample_mix() {
        let job = SynthJob::with_seed(200, 1, 9);
        let field = job.field().clone();
        let buffer = run_to_completion(job, |_, _| {});
        for (i, &sample) in buffer.iter().enumerate() {
            let mut mixed = 0.0;
            for (freq, weight) in OCTAVE_FREQUENCIES.iter().zip(OCTAVE_WEIGHTS.iter()) {
                let x = i as f64 / (200.0 / freq);
                mixed += weight * field.value(x);
            }
            assert_eq!(sample, mixed as f32, "mismatch at index {}", i);
        }
    }

    #[test]
    fn step_advances_one_chunk_at_a_time() {
        let job = SynthJob::with_seed(100, 3, 1);
        let mut chunks = 0;
        let mut state = SynthState::Running(job);
        let buffer = loop {
            state = match state {
                SynthState::Running(job) => {
                    chunks += 1;
                    job.step()
                }
                SynthState::Done(buffer) => break buffer,
            };
        };
        // 300 samples at 100 per chunk.
        assert_eq!(chunks, 3);
        assert_eq!(buffer.len(), 300);
    }

    #[test]
    fn progress_reports_monotonic_sample_counts() {
        let mut reports = Vec::new();
        synthesize_with_progress(100, 2, |done, total| reports.push((done, total)));
        assert!(!reports.is_empty());
        assert!(reports.windows(2).all(|w| w[0].0 <= w[1].0));
        let &(done, total) = reports.last().unwrap();
        assert_eq!(done, 200);
        assert_eq!(total, 200);
    }

    #[test]
    fn octave_weights_sum_to_one() {
        let sum: f64 = OCTAVE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
