//! Core types for Sitesmith.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod asset;
pub mod color;
pub mod email;
pub mod id;
pub mod industry;
pub mod user;

pub use asset::EncodedAsset;
pub use color::{ColorError, HexColor};
pub use email::{Email, EmailError};
pub use id::*;
pub use industry::Industry;
pub use user::UserProfile;
