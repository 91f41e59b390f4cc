//! The website draft under composition.
//!
//! A [`WebsiteDraft`] is the client-held, partially-invalid representation
//! of a website to be generated. It is built up field by field through the
//! [`DraftEditor`], stays invalid for most of its life, and is checked once
//! - via [`WebsiteDraft::validate`] - at submission time.
//!
//! Field names serialize exactly as the site-generation backend expects
//! them (`business_name`, `logo_base64`, `social_links`, ...), so a draft
//! snapshot is also the request body.

mod editor;

pub use editor::{ColorField, DraftEditor, DraftField, SocialField, StagedProduct};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::asset::EncodedAsset;
use crate::types::color::{ColorError, HexColor};
use crate::types::email::{Email, EmailError};
use crate::types::industry::Industry;

/// Default brand palette, matching the site generator's fallbacks.
pub const DEFAULT_PRIMARY: &str = "#3B82F6";
pub const DEFAULT_SECONDARY: &str = "#1E40AF";
pub const DEFAULT_ACCENT: &str = "#F59E0B";

/// Errors produced while editing or validating a draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is empty at submission time.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// The contact email is not structurally valid.
    #[error("invalid contact email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The value is not a known industry category.
    #[error("{0}")]
    InvalidIndustry(String),

    /// The value is not a `#RRGGBB` color.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    /// A dotted field path does not address any draft field.
    #[error("unknown draft field: {0}")]
    UnknownField(String),
}

/// A product entry committed to the draft's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    /// Non-negative price; carried as a decimal string on the wire.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<EncodedAsset>,
}

/// The draft's brand color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    #[serde(default = "default_primary")]
    pub primary: HexColor,
    #[serde(default = "default_secondary")]
    pub secondary: HexColor,
    #[serde(default = "default_accent")]
    pub accent: HexColor,
}

fn default_primary() -> HexColor {
    HexColor::new_unchecked(DEFAULT_PRIMARY)
}

fn default_secondary() -> HexColor {
    HexColor::new_unchecked(DEFAULT_SECONDARY)
}

fn default_accent() -> HexColor {
    HexColor::new_unchecked(DEFAULT_ACCENT)
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            accent: default_accent(),
        }
    }
}

/// Social profile URLs; absent entries are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// The website draft under composition.
///
/// Created with defaults when composition starts, mutated through the
/// [`DraftEditor`], and consumed read-only exactly once at submission.
/// After a failed submission the draft is left intact for correction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteDraft {
    pub business_name: String,
    pub business_description: String,
    #[serde(default)]
    pub industry: Industry,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<EncodedAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_base64: Option<EncodedAsset>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub colors: BrandColors,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl WebsiteDraft {
    /// Check that the draft is complete enough to submit.
    ///
    /// Every scalar field must be non-empty and the contact email must
    /// parse. Assets, products, and social links are always optional.
    ///
    /// # Errors
    ///
    /// Returns the first failing requirement.
    pub fn validate(&self) -> Result<(), DraftError> {
        required("business_name", &self.business_name)?;
        required("business_description", &self.business_description)?;
        required("contact_email", &self.contact_email)?;
        required("contact_phone", &self.contact_phone)?;
        required("address", &self.address)?;

        Email::parse(&self.contact_email)?;

        Ok(())
    }
}

fn required(name: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::MissingField(name))
    } else {
        Ok(())
    }
}
