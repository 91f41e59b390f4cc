//! Sitesmith client engine.
//!
//! Everything a frontend needs to drive the site-generation backend:
//!
//! - [`session`] - credential lifecycle, the single source of truth for
//!   "who is the current user"
//! - [`route`] - pure allow/redirect decisions for protected views
//! - [`assets`] - binary files to transport-safe base64
//! - [`websites`] - draft submission and the dashboard's cached list
//! - [`api`] - the HTTP client everything above shares
//!
//! # Architecture
//!
//! One [`ApiClient`](api::ApiClient) is created at composition time and
//! handed to the [`SessionStore`](session::SessionStore) and
//! [`WebsiteService`](websites::WebsiteService). The session store is the
//! only component that may install or clear the client's credential;
//! everyone else observes session state through a watch channel and reacts.
//! Execution is cooperative and single-user: one action at a time, no
//! automatic retries, failures surface as typed errors and never corrupt
//! the in-progress draft or the cached dashboard list.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod assets;
pub mod config;
pub mod route;
pub mod session;
pub mod websites;

pub use api::{ApiClient, ApiError};
pub use assets::{AssetEncoder, AssetError};
pub use config::{ClientConfig, ConfigError};
pub use route::{RouteDecision, route_decision};
pub use session::{SessionSnapshot, SessionStatus, SessionStore, TokenFile};
pub use websites::{Dashboard, SubmitError, WebsiteService};
