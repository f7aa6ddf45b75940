//! Error types for manifest loading.
//!
//! Tree building, sorting and path matching never fail: malformed entries
//! degrade to placeholders instead. Only decoding the resource manifest
//! can go wrong, and only when the JSON itself is unusable.

use thiserror::Error;

/// Errors raised while decoding a resource manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or does not match the expected shape.
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}
