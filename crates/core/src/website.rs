//! Backend-owned website records.
//!
//! Once a draft is submitted the backend owns the data; the client only
//! holds read-only copies of these shapes. Timestamps are
//! [`chrono::NaiveDateTime`] because the backend emits naive UTC datetimes
//! with no offset suffix.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::draft::{BrandColors, Product, SocialLinks};
use crate::types::asset::EncodedAsset;
use crate::types::id::{UserId, WebsiteId};
use crate::types::industry::Industry;

/// Dashboard list item.
///
/// The subset of a website record the dashboard displays. The client caches
/// a sequence of these and removes an entry only after the backend confirms
/// its deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSummary {
    pub id: WebsiteId,
    pub business_name: String,
    pub business_description: String,
    pub industry: Industry,
    pub created_at: NaiveDateTime,
}

/// A fully generated website as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteRecord {
    pub id: WebsiteId,
    pub user_id: UserId,
    pub business_name: String,
    pub business_description: String,
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
    /// URL slug derived by the backend from the business name.
    pub slug: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update body for an existing website.
///
/// Only the populated fields are sent; everything else is left untouched
/// by the backend. Industry cannot be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsitePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<EncodedAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_base64: Option<EncodedAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<BrandColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}
