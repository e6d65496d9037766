//! Error types for noisegen.
//!
//! Defines the error codes and types used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes for failures inside the generation and caching core.
///
/// Storage read failures are deliberately absent from this list: a
/// corrupt or missing cache entry degrades to a cache miss instead of
/// surfacing as an error (see [`crate::cache::BlobCache::load`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The persistent blob store could not be opened or initialized.
    /// Trigger: cache directory cannot be created, permissions.
    StorageOpen,

    /// Writing the encoded container to the blob store failed.
    /// Trigger: disk full, permissions, rename failure.
    StorageWrite,

    /// Requested duration is outside the valid range.
    /// Trigger: duration of 0 or more than 7200 seconds.
    InvalidDuration,

    /// Requested sample rate is outside the valid range.
    /// Trigger: sample rate of 0 or more than 192000 Hz.
    InvalidSampleRate,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::StorageOpen => "STORAGE_OPEN",
            ErrorCode::StorageWrite => "STORAGE_WRITE",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::StorageOpen => "Failed to open or initialize the blob store",
            ErrorCode::StorageWrite => "Failed to write the audio container to the blob store",
            ErrorCode::InvalidDuration => "Duration must be between 1 and 7200 seconds",
            ErrorCode::InvalidSampleRate => "Sample rate must be between 1 and 192000 Hz",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::StorageOpen => {
                "Check that the cache directory is writable, or point \
                 NOISEGEN_CACHE_PATH at a writable location"
            }
            ErrorCode::StorageWrite => {
                "Check available disk space and permissions on the cache directory. \
                 Generation still succeeds without the cache; only reuse is lost"
            }
            ErrorCode::InvalidDuration => {
                "Specify a duration between 1 and 7200 seconds (e.g., --duration 1500)"
            }
            ErrorCode::InvalidSampleRate => {
                "Specify a sample rate between 1 and 192000 Hz (e.g., --sample-rate 44100)"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for noisegen operations.
#[derive(Debug)]
pub struct NoiseError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl NoiseError {
    /// Creates a new NoiseError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new NoiseError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a STORAGE_OPEN error.
    pub fn storage_open(reason: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::StorageOpen,
            format!("Failed to open blob store: {}", reason.into()),
            source,
        )
    }

    /// Creates a STORAGE_WRITE error.
    pub fn storage_write(reason: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::StorageWrite,
            format!("Failed to store audio container: {}", reason.into()),
            source,
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration: u32) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!(
                "Invalid duration: {} seconds (must be between 1 and 7200)",
                duration
            ),
        )
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(sample_rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!(
                "Invalid sample rate: {} Hz (must be between 1 and 192000)",
                sample_rate
            ),
        )
    }
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for NoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using NoiseError.
pub type Result<T> = std::result::Result<T, NoiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::StorageOpen.as_str(), "STORAGE_OPEN");
        assert_eq!(ErrorCode::StorageWrite.as_str(), "STORAGE_WRITE");
        assert_eq!(ErrorCode::InvalidDuration.as_str(), "INVALID_DURATION");
        assert_eq!(ErrorCode::InvalidSampleRate.as_str(), "INVALID_SAMPLE_RATE");
    }

    #[test]
    fn error_code_recovery_hints_not_empty() {
        assert!(!ErrorCode::StorageOpen.recovery_hint().is_empty());
        assert!(!ErrorCode::StorageWrite.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidDuration.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidSampleRate.recovery_hint().is_empty());
    }

    #[test]
    fn noise_error_display() {
        let err = NoiseError::invalid_duration(0);
        assert!(err.to_string().contains("INVALID_DURATION"));
        assert!(err.to_string().contains("0 seconds"));
        assert!(err.to_string().contains("Recovery:"));
    }

    #[test]
    fn storage_errors_carry_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = NoiseError::storage_write("rename failed", io);
        assert_eq!(err.code, ErrorCode::StorageWrite);
        assert!(std::error::Error::source(&err).is_some());
    }
}
