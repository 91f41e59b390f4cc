//! CLI command implementations.

pub mod auth;
pub mod draft;
pub mod sites;

use sitesmith_client::{
    ApiClient, ClientConfig, RouteDecision, SessionStore, TokenFile, WebsiteService,
    route_decision,
};

/// Boxed error type shared by all commands.
pub type CliError = Box<dyn std::error::Error>;

/// The wired-up engine: one API client shared by the session store and the
/// website service, composed from environment configuration.
pub struct Context {
    pub session: SessionStore,
    pub websites: WebsiteService,
}

impl Context {
    /// Build the engine from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `SITESMITH_API_BASE` is missing or
    /// invalid.
    pub fn from_env() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let api = ApiClient::new(config.api_base);
        let session = SessionStore::new(api.clone(), TokenFile::new(config.token_path));
        let websites = WebsiteService::new(api);
        Ok(Self { session, websites })
    }

    /// Restore the session and gate on the navigation decision, the same
    /// way a protected view would.
    ///
    /// # Errors
    ///
    /// Returns an error telling the user to sign in when the session
    /// resolves to anonymous.
    pub async fn require_session(&self) -> Result<(), CliError> {
        self.session.restore().await;
        match route_decision(&self.session.snapshot()) {
            RouteDecision::Allow => Ok(()),
            RouteDecision::RedirectToSignIn => {
                Err("not signed in - run `sitesmith login` first".into())
            }
            // restore() always resolves to Authenticated or Anonymous.
            RouteDecision::Pending => Err("session did not resolve".into()),
        }
    }
}
