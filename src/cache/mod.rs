//! Cache module for audio storage.
//!
//! Provides the persistent single-slot blob store for the encoded
//! container.

pub mod blob;

// Re-export commonly used types
pub use blob::{BlobCache, BLOB_KEY, SCHEMA_VERSION, STORE_NAME};
