//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::UserId;

/// Identity record resolved from the backend for the current credential.
///
/// Minimal data the client needs to identify the signed-in user; any extra
/// fields the backend returns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's backend ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// The user's email address.
    pub email: Email,
}
