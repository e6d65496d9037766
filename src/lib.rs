//! noisegen: procedural ambient noise generation with persistent caching.
//!
//! This library synthesizes a long gradient-noise track, encodes it as
//! an uncompressed IEEE-float WAV container, and caches the container
//! in a single-slot blob store so subsequent runs can reuse it.
//!
//! # Modules
//!
//! - [`noise`]: gradient noise field and the chunked synthesizer
//! - [`audio`]: byte-exact WAV container encoding
//! - [`cache`]: persistent single-slot blob store
//! - [`session`]: the `generate` / `load_cached` entry points
//! - [`config`]: runtime configuration (NoiseConfig)
//! - [`error`]: error types and codes (NoiseError, ErrorCode)
//!
//! # Example
//!
//! ```rust,no_run
//! use noisegen::config::NoiseConfig;
//! use noisegen::session::{NoiseSession, Outcome};
//!
//! let session = NoiseSession::new(NoiseConfig::default());
//!
//! // Reuse the cached track, or synthesize a fresh one.
//! let container = match session.load_cached() {
//!     Outcome::Ready(container) => container,
//!     _ => match session.generate() {
//!         Outcome::Ready(container) => container,
//!         _ => panic!("generation failed"),
//!     },
//! };
//! assert_eq!(&container[0..4], b"RIFF");
//! ```

pub mod audio;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod noise;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use config::NoiseConfig;
pub use error::{ErrorCode, NoiseError, Result};
pub use session::{NoiseSession, Outcome};
