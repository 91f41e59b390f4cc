//! Field-by-field draft editing.
//!
//! The editor owns the current [`WebsiteDraft`] snapshot plus one staged
//! product. Every operation builds a whole new snapshot and installs it;
//! nothing outside a single operation ever observes in-place mutation, and
//! the product sequence in particular is always replaced, never patched.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::draft::{DraftError, Product, WebsiteDraft};
use crate::types::asset::EncodedAsset;
use crate::types::color::HexColor;
use crate::types::industry::Industry;

/// A scalar field of the brand palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Primary,
    Secondary,
    Accent,
}

/// A social profile slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

/// Tagged address of a draft field settable from text input.
///
/// This replaces dotted-string addressing with a closed set: a typo'd path
/// simply cannot be represented. String-driven callers (forms, the CLI)
/// go through [`FromStr`], which accepts the dotted spellings
/// (`colors.primary`, `social_links.twitter`) and fails fast on anything
/// unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    BusinessName,
    BusinessDescription,
    Industry,
    ContactEmail,
    ContactPhone,
    Address,
    Color(ColorField),
    Social(SocialField),
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business_name" => Ok(Self::BusinessName),
            "business_description" => Ok(Self::BusinessDescription),
            "industry" => Ok(Self::Industry),
            "contact_email" => Ok(Self::ContactEmail),
            "contact_phone" => Ok(Self::ContactPhone),
            "address" => Ok(Self::Address),
            "colors.primary" => Ok(Self::Color(ColorField::Primary)),
            "colors.secondary" => Ok(Self::Color(ColorField::Secondary)),
            "colors.accent" => Ok(Self::Color(ColorField::Accent)),
            "social_links.facebook" => Ok(Self::Social(SocialField::Facebook)),
            "social_links.twitter" => Ok(Self::Social(SocialField::Twitter)),
            "social_links.instagram" => Ok(Self::Social(SocialField::Instagram)),
            "social_links.linkedin" => Ok(Self::Social(SocialField::Linkedin)),
            other => Err(DraftError::UnknownField(other.to_owned())),
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BusinessName => "business_name",
            Self::BusinessDescription => "business_description",
            Self::Industry => "industry",
            Self::ContactEmail => "contact_email",
            Self::ContactPhone => "contact_phone",
            Self::Address => "address",
            Self::Color(ColorField::Primary) => "colors.primary",
            Self::Color(ColorField::Secondary) => "colors.secondary",
            Self::Color(ColorField::Accent) => "colors.accent",
            Self::Social(SocialField::Facebook) => "social_links.facebook",
            Self::Social(SocialField::Twitter) => "social_links.twitter",
            Self::Social(SocialField::Instagram) => "social_links.instagram",
            Self::Social(SocialField::Linkedin) => "social_links.linkedin",
        };
        write!(f, "{name}")
    }
}

/// The in-progress product entry, held apart from the committed catalog.
///
/// Fields are raw form entries; the price stays a string until commit so a
/// half-typed value never corrupts the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<EncodedAsset>,
}

impl StagedProduct {
    /// Whether the entry can be committed: name and description non-empty,
    /// price a parseable non-negative decimal.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.parsed_price().is_some()
    }

    fn parsed_price(&self) -> Option<Decimal> {
        let price = self.price.trim();
        if price.is_empty() {
            return None;
        }
        price
            .parse::<Decimal>()
            .ok()
            .filter(|p| !p.is_sign_negative())
    }
}

/// Editor over an immutable [`WebsiteDraft`] snapshot.
///
/// # Example
///
/// ```
/// use sitesmith_core::{DraftEditor, DraftField, StagedProduct};
///
/// let mut editor = DraftEditor::new();
/// editor.set_field(DraftField::BusinessName, "Tidepool Ceramics")?;
/// editor.set_field("colors.accent".parse()?, "#DB2777")?;
///
/// editor.stage_product(StagedProduct {
///     name: "Mug".into(),
///     description: "350ml stoneware mug".into(),
///     price: "24.50".into(),
///     image_base64: None,
/// });
/// editor.commit_product();
/// assert_eq!(editor.snapshot().products.len(), 1);
/// # Ok::<(), sitesmith_core::DraftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DraftEditor {
    draft: WebsiteDraft,
    staged: StagedProduct,
}

impl DraftEditor {
    /// Start editing a fresh, defaulted draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing draft.
    #[must_use]
    pub fn from_draft(draft: WebsiteDraft) -> Self {
        Self {
            draft,
            staged: StagedProduct::default(),
        }
    }

    /// The current draft snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &WebsiteDraft {
        &self.draft
    }

    /// Consume the editor, yielding the final snapshot.
    #[must_use]
    pub fn into_draft(self) -> WebsiteDraft {
        self.draft
    }

    /// The staged, not-yet-committed product entry.
    #[must_use]
    pub const fn staged(&self) -> &StagedProduct {
        &self.staged
    }

    /// Write one field from text input. Last write wins; no other field is
    /// touched. Industry and color values are parsed; an empty social link
    /// clears the slot.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidIndustry`] or
    /// [`DraftError::InvalidColor`] when the value does not parse; the
    /// snapshot is unchanged in that case.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        let mut next = self.draft.clone();
        match field {
            DraftField::BusinessName => next.business_name = value.to_owned(),
            DraftField::BusinessDescription => next.business_description = value.to_owned(),
            DraftField::Industry => {
                next.industry = value
                    .parse::<Industry>()
                    .map_err(DraftError::InvalidIndustry)?;
            }
            DraftField::ContactEmail => next.contact_email = value.to_owned(),
            DraftField::ContactPhone => next.contact_phone = value.to_owned(),
            DraftField::Address => next.address = value.to_owned(),
            DraftField::Color(slot) => {
                let color = HexColor::parse(value)?;
                match slot {
                    ColorField::Primary => next.colors.primary = color,
                    ColorField::Secondary => next.colors.secondary = color,
                    ColorField::Accent => next.colors.accent = color,
                }
            }
            DraftField::Social(slot) => {
                let link = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_owned())
                };
                match slot {
                    SocialField::Facebook => next.social_links.facebook = link,
                    SocialField::Twitter => next.social_links.twitter = link,
                    SocialField::Instagram => next.social_links.instagram = link,
                    SocialField::Linkedin => next.social_links.linkedin = link,
                }
            }
        }
        self.draft = next;
        Ok(())
    }

    /// Attach (or clear) the encoded logo asset.
    pub fn set_logo(&mut self, asset: Option<EncodedAsset>) {
        let mut next = self.draft.clone();
        next.logo_base64 = asset;
        self.draft = next;
    }

    /// Attach (or clear) the encoded hero image asset.
    pub fn set_hero_image(&mut self, asset: Option<EncodedAsset>) {
        let mut next = self.draft.clone();
        next.hero_image_base64 = asset;
        self.draft = next;
    }

    /// Replace the staged product entry.
    pub fn stage_product(&mut self, staged: StagedProduct) {
        self.staged = staged;
    }

    /// Attach (or clear) the staged product's encoded image.
    pub fn set_staged_image(&mut self, asset: Option<EncodedAsset>) {
        self.staged.image_base64 = asset;
    }

    /// Append the staged product to the catalog and reset the staging slot.
    ///
    /// A no-op unless the staged entry [is complete](StagedProduct::is_complete):
    /// incomplete entries are silently ignored, matching the
    /// disabled-until-valid form behavior. Insertion order is preserved all
    /// the way to the backend.
    pub fn commit_product(&mut self) {
        let Some(price) = self.staged.parsed_price() else {
            return;
        };
        if self.staged.name.trim().is_empty() || self.staged.description.trim().is_empty() {
            return;
        }

        let staged = std::mem::take(&mut self.staged);
        let product = Product {
            name: staged.name,
            description: staged.description,
            price,
            image_base64: staged.image_base64,
        };

        let mut next = self.draft.clone();
        next.products = next
            .products
            .iter()
            .cloned()
            .chain(std::iter::once(product))
            .collect();
        self.draft = next;
    }

    /// Drop the catalog entry at `index`, keeping the remaining entries in
    /// their relative order. Out-of-range indexes are a no-op.
    pub fn remove_product(&mut self, index: usize) {
        if index >= self.draft.products.len() {
            return;
        }

        let mut next = self.draft.clone();
        next.products = next
            .products
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, product)| product.clone())
            .collect();
        self.draft = next;
    }
}
