//! Binary-asset encoding for inline JSON transport.
//!
//! Files are read fully into memory and base64-encoded with the standard
//! alphabet, no data-URI prefix. There is no client-side size limit:
//! arbitrarily large files get buffered and shipped inline, which is a
//! known scalability concern of the submission format rather than
//! something this layer papers over.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;
use tracing::instrument;

use sitesmith_core::EncodedAsset;

/// Errors that can occur while encoding an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The offending path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Stateless, field-agnostic encoder.
///
/// One file per invocation; the caller decides which draft field (logo,
/// hero, or a specific product image) receives the result. A failed read
/// yields an error and nothing else - there is never partial output to
/// accidentally install into a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetEncoder;

impl AssetEncoder {
    /// Read `path` fully and encode it.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Read`] if the file is missing or unreadable.
    #[instrument]
    pub async fn encode(path: impl AsRef<Path> + std::fmt::Debug) -> Result<EncodedAsset, AssetError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AssetError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::encode_bytes(&bytes))
    }

    /// Encode an already-loaded buffer.
    #[must_use]
    pub fn encode_bytes(bytes: &[u8]) -> EncodedAsset {
        EncodedAsset::new(STANDARD.encode(bytes))
    }
}
