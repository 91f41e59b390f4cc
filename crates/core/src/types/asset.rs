//! Encoded binary assets.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A binary file encoded as base64 text for inline JSON transport.
///
/// The payload is the bare standard-alphabet base64 string - no
/// `data:image/...;base64,` prefix. Producing one from a file lives in the
/// client crate's encoder; this type only carries the result into a draft
/// field or product image slot.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedAsset(String);

impl EncodedAsset {
    /// Wrap an already-encoded base64 payload.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the base64 payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the encoded payload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the asset and returns the base64 payload.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Payloads are routinely megabytes of base64; don't dump them into logs.
impl fmt::Debug for EncodedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedAsset({} base64 bytes)", self.0.len())
    }
}
