//! Procedural noise synthesis.
//!
//! Gradient noise field plus the chunked octave-mixing synthesizer.

pub mod field;
pub mod synth;

// Re-export commonly used items
pub use field::{NoiseField, NoiseTable};
pub use synth::{
    run_to_completion, synthesize, synthesize_with_progress, SynthJob, SynthState,
    OCTAVE_FREQUENCIES, OCTAVE_WEIGHTS,
};
