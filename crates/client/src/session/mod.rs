//! Session lifecycle: restore, login, register, logout.
//!
//! The [`SessionStore`] is the single source of truth for "who is the
//! current user" and the only component permitted to touch the persisted
//! credential or the API client's installed credential.
//!
//! # Lifecycle
//!
//! The session starts `Unresolved`. [`SessionStore::restore`] drives it to
//! `Resolving` while the persisted token is checked against the backend,
//! then to `Authenticated` or `Anonymous`. Any failure along the way -
//! including an unauthorized response for a stale token - collapses to
//! `Anonymous` with all credential state cleared: a rejected token must
//! never leave the session half-authenticated.
//!
//! Dependents observe transitions through a watch channel
//! ([`SessionStore::subscribe`]); a receiver that lags or is dropped never
//! affects the store.

mod token_file;

pub use token_file::TokenFile;

use std::sync::Arc;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use sitesmith_core::UserProfile;

use crate::api::{ApiClient, ApiError};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Process start; the persisted token has not been looked at yet.
    Unresolved,
    /// A persisted token was found and is being checked with the backend.
    Resolving,
    /// Token accepted; `user` is populated.
    Authenticated,
    /// No credential, or the last one was rejected or discarded.
    Anonymous,
}

/// Point-in-time view of the session.
///
/// Invariant: `status == Authenticated` implies `user` is present, and
/// `status == Anonymous` implies no credential is installed or persisted.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
}

impl SessionSnapshot {
    /// Whether the session holds an accepted identity.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated)
    }
}

/// Token payload returned by the login/register endpoints.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Owner of the session credential and the derived identity.
///
/// Cheap to clone; all clones share state and observers.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    api: ApiClient,
    tokens: TokenFile,
    state: watch::Sender<SessionSnapshot>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("status", &self.snapshot().status)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over the shared API client and the persisted token
    /// location. The session starts `Unresolved`; call
    /// [`restore`](Self::restore) next.
    #[must_use]
    pub fn new(api: ApiClient, tokens: TokenFile) -> Self {
        let (state, _) = watch::channel(SessionSnapshot {
            status: SessionStatus::Unresolved,
            user: None,
        });

        Self {
            inner: Arc::new(SessionStoreInner { api, tokens, state }),
        }
    }

    /// The current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Observe session transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    /// The API client this store installs credentials into.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Attempt to restore a session from the persisted token.
    ///
    /// No token (or an unreadable token file) resolves to `Anonymous`.
    /// With a token present, the credential is installed and checked with
    /// an identity lookup; rejection clears everything (fail-closed).
    #[instrument(skip(self))]
    pub async fn restore(&self) {
        let token = match self.inner.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.set(SessionStatus::Anonymous, None);
                return;
            }
            Err(err) => {
                warn!(error = %err, "could not read persisted token, treating as signed out");
                self.set(SessionStatus::Anonymous, None);
                return;
            }
        };

        self.inner.api.install_credential(token);
        self.set(SessionStatus::Resolving, None);

        match self.inner.api.get::<UserProfile>("auth/me").await {
            Ok(user) => {
                debug!(user = %user.email, "session restored");
                self.set(SessionStatus::Authenticated, Some(user));
            }
            Err(err) => {
                warn!(error = %err, "persisted credential rejected, signing out");
                self.logout();
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the returned token is persisted, installed, and the
    /// identity resolved; `true` is reported only after the identity lookup
    /// also succeeds. Every failure collapses to `false` with the session
    /// left `Anonymous` - this never returns an error to the caller.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.authenticate("auth/login", &LoginRequest { email, password })
            .await
    }

    /// Create an account and sign in, with the same contract as
    /// [`login`](Self::login).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        self.authenticate(
            "auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }

    /// Sign out: clear the persisted token and the installed credential,
    /// drop the identity. Synchronous - no network call.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(err) = self.inner.tokens.clear() {
            warn!(error = %err, "failed to remove persisted token");
        }
        self.inner.api.clear_credential();
        self.set(SessionStatus::Anonymous, None);
    }

    async fn authenticate<B: Serialize>(&self, path: &str, body: &B) -> bool {
        match self.try_authenticate(path, body).await {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "authentication failed");
                self.logout();
                false
            }
        }
    }

    async fn try_authenticate<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let token: TokenResponse = self.inner.api.post(path, body).await?;
        let secret = SecretString::from(token.access_token);

        if let Err(err) = self.inner.tokens.save(&secret) {
            // The session still works in memory; it just won't survive a
            // restart.
            warn!(error = %err, "failed to persist session token");
        }
        self.inner.api.install_credential(secret);

        let user: UserProfile = self.inner.api.get("auth/me").await?;
        self.set(SessionStatus::Authenticated, Some(user));
        Ok(())
    }

    fn set(&self, status: SessionStatus, user: Option<UserProfile>) {
        self.inner.state.send_replace(SessionSnapshot { status, user });
    }
}
