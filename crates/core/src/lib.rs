//! Sitesmith Core - Shared types library.
//!
//! This crate provides the common types used across all Sitesmith components:
//! - `client` - Session, draft, and submission engine
//! - `cli` - Command-line client driving the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no file
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, colors, and assets
//! - [`draft`] - The website draft under composition and its editor
//! - [`website`] - Backend-owned website records and dashboard summaries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod types;
pub mod website;

pub use draft::*;
pub use types::*;
pub use website::*;
