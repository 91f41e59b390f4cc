//! Hex color values for the draft's brand palette.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a `#RRGGBB` value.
    #[error("color must be a #RRGGBB hex value, got {0:?}")]
    InvalidFormat(String),
}

/// A CSS hex color in `#RRGGBB` form.
///
/// This is the shape produced by `<input type="color">` controls, and the
/// only color format the site generator consumes. Shorthand (`#RGB`) and
/// named colors are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the input is `#`
    /// followed by exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))?;

        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ColorError::InvalidFormat(s.to_owned()))
        }
    }

    /// Construct from a value known to be valid (compile-time constants).
    pub(crate) fn new_unchecked(s: &str) -> Self {
        Self(s.to_owned())
    }

    /// Returns the color as a string slice, including the leading `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
