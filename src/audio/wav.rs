//! WAV container encoding.
//!
//! Serializes an f32 sample buffer into an uncompressed RIFF/WAVE file:
//! a fixed 44-byte header followed by the raw little-endian IEEE-float
//! samples. The header is written by hand so the output is byte-exact
//! and idempotent for a given `(buffer, sample_rate)` pair. Mono only,
//! no metadata chunks.

use std::fs;
use std::path::Path;

use crate::error::{NoiseError, Result};

/// Length of the RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (32-bit IEEE float).
pub const BITS_PER_SAMPLE: u16 = 32;

/// WAVE format tag for IEEE float samples.
const FORMAT_IEEE_FLOAT: u16 = 3;

/// Encodes a sample buffer into a complete WAV container.
///
/// Header layout (all fields little-endian):
///
/// | Offset | Field            | Value                  |
/// |--------|------------------|------------------------|
/// | 0      | "RIFF"           | literal ASCII          |
/// | 4      | chunk size       | total size - 8         |
/// | 8      | "WAVE"           | literal ASCII          |
/// | 12     | "fmt "           | literal ASCII          |
/// | 16     | fmt chunk size   | 16                     |
/// | 20     | audio format     | 3 (IEEE float)         |
/// | 22     | channels         | 1                      |
/// | 24     | sample rate      | `sample_rate`          |
/// | 28     | byte rate        | sample_rate * 4        |
/// | 32     | block align      | 4                      |
/// | 34     | bits per sample  | 32                     |
/// | 36     | "data"           | literal ASCII          |
/// | 40     | data size        | buffer length * 4      |
pub fn encode(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let bytes_per_sample = BITS_PER_SAMPLE as u32 / 8;
    let data_bytes = samples.len() as u64 * bytes_per_sample as u64;
    debug_assert!(
        data_bytes <= u32::MAX as u64,
        "sample buffer too large for the u32 data-size field"
    );
    let data_size = data_bytes as u32;
    let file_size = HEADER_LEN as u32 + data_size;
    let byte_rate = sample_rate * CHANNELS as u32 * bytes_per_sample;
    let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);

    let mut out = Vec::with_capacity(file_size as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(file_size - 8).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_IEEE_FLOAT.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Encodes the samples and writes the container to `path`.
pub fn write_wav(samples: &[f32], path: &Path, sample_rate: u32) -> Result<()> {
    let container = encode(samples, sample_rate);
    fs::write(path, container).map_err(|e| {
        NoiseError::storage_write(format!("failed to write WAV file {}", path.display()), e)
    })
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::SampleFormat;
    use tempfile::tempdir;

    #[test]
    fn encode_concrete_four_sample_container() {
        let container = encode(&[0.0, 0.5, -1.0, 1.0], 8000);

        // 44-byte header + 16 data bytes.
        assert_eq!(container.len(), 60);

        assert_eq!(&container[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(container[4..8].try_into().unwrap()), 52);
        assert_eq!(&container[8..12], b"WAVE");
        assert_eq!(&container[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(container[16..20].try_into().unwrap()), 16);
        assert_eq!(u16::from_le_bytes(container[20..22].try_into().unwrap()), 3);
        assert_eq!(u16::from_le_bytes(container[22..24].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(container[24..28].try_into().unwrap()), 8000);
        assert_eq!(u32::from_le_bytes(container[28..32].try_into().unwrap()), 32000);
        assert_eq!(u16::from_le_bytes(container[32..34].try_into().unwrap()), 4);
        assert_eq!(u16::from_le_bytes(container[34..36].try_into().unwrap()), 32);
        assert_eq!(&container[36..40], b"data");
        assert_eq!(u32::from_le_bytes(container[40..44].try_into().unwrap()), 16);

        let mut expected_data = Vec::new();
        for s in [0.0f32, 0.5, -1.0, 1.0] {
            expected_data.extend_from_slice(&s.to_le_bytes());
        }
        assert_eq!(&container[44..60], expected_data.as_slice());
    }

    #[test]
    fn encode_empty_buffer_is_header_only() {
        let container = encode(&[], 44100);
        assert_eq!(container.len(), HEADER_LEN);
        assert_eq!(u32::from_le_bytes(container[40..44].try_into().unwrap()), 0);
        assert_eq!(u32::from_le_bytes(container[4..8].try_into().unwrap()), 36);
    }

    #[test]
    fn encode_is_idempotent() {
        let samples: Vec<f32> = (0..512).map(|i| (i as f32 / 512.0) - 0.5).collect();
        let a = encode(&samples, 44100);
        let b = encode(&samples, 44100);
        assert_eq!(a, b);
    }

    #[test]
    fn hound_decodes_header_and_samples() {
        let samples = vec![0.0f32, 0.25, -0.25, 0.75, -0.75];
        let container = encode(&samples, 22050);

        let reader = hound::WavReader::new(std::io::Cursor::new(container)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, BITS_PER_SAMPLE);
        assert_eq!(spec.sample_format, SampleFormat::Float);

        let decoded: Vec<f32> = reader
            .into_samples::<f32>()
            .map(|s| s.unwrap())
            .collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn write_wav_creates_playable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0.0f32, 0.5, -0.5, 0.0];
        write_wav(&samples, &path, 44100).unwrap();

        assert!(path.exists());
        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn write_wav_to_bad_path_fails_with_storage_write() {
        let samples = vec![0.0f32];
        let err = write_wav(&samples, Path::new("/nonexistent-dir/out.wav"), 44100)
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageWrite);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(88200, 44100), 2.0);
        assert_eq!(samples_to_duration(22050, 44100), 0.5);
    }
}
