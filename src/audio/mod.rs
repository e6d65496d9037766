//! Audio output module.
//!
//! Provides WAV container encoding and file writing for generated audio.

pub mod wav;

// Re-export commonly used items
pub use wav::{encode, samples_to_duration, write_wav, BITS_PER_SAMPLE, CHANNELS, HEADER_LEN};
