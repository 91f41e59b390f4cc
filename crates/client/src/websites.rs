//! Draft submission and the dashboard's website list.
//!
//! [`WebsiteService`] wraps the backend's website endpoints;
//! [`Dashboard`] layers the cached summary list on top, mutating it only
//! on confirmed backend success. Nothing here retries automatically and
//! nothing here touches session state - an unauthorized submission is
//! reported as a distinct signal for the caller to act on, and clearing
//! the session remains the session store's exclusive job.

use thiserror::Error;
use tracing::instrument;

use sitesmith_core::{
    DraftError, WebsiteDraft, WebsiteId, WebsitePatch, WebsiteRecord, WebsiteSummary,
};

use crate::api::{ApiClient, ApiError};

/// Errors surfaced when submitting a finished draft.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed local validation; nothing was sent.
    #[error("draft is incomplete: {0}")]
    Invalid(#[from] DraftError),

    /// The credential was rejected - the user must sign in again and can
    /// then resubmit the (preserved) draft.
    #[error("session expired: sign in again before submitting")]
    Unauthorized,

    /// The backend rejected the submission body.
    #[error("backend rejected the draft: {0}")]
    Rejected(String),

    /// Anything else - network failure, server error. Retryable by the
    /// user; the draft is untouched.
    #[error("submission failed: {0}")]
    Transport(ApiError),
}

/// Map an API failure onto the submission taxonomy.
fn submit_error(err: ApiError) -> SubmitError {
    match err {
        ApiError::Unauthorized => SubmitError::Unauthorized,
        ApiError::Validation(detail) => SubmitError::Rejected(detail),
        other => SubmitError::Transport(other),
    }
}

/// Client for the backend's website endpoints.
#[derive(Debug, Clone)]
pub struct WebsiteService {
    api: ApiClient,
}

impl WebsiteService {
    /// Create a service over the shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit the full draft snapshot - encoded assets and the whole
    /// product sequence inline - as a single request.
    ///
    /// The draft is only borrowed: on any failure it is preserved
    /// unchanged so the user can correct or resubmit without re-entering
    /// anything.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] if validation fails locally (nothing is
    /// sent), [`SubmitError::Unauthorized`] if the credential was rejected
    /// (the caller decides to redirect to sign-in; the session itself is
    /// not cleared here), [`SubmitError::Rejected`] for backend
    /// validation, [`SubmitError::Transport`] otherwise.
    #[instrument(skip(self, draft), fields(business_name = %draft.business_name))]
    pub async fn submit(&self, draft: &WebsiteDraft) -> Result<WebsiteRecord, SubmitError> {
        draft.validate()?;
        self.api.post("websites", draft).await.map_err(submit_error)
    }

    /// Fetch the caller's websites.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure; `Unauthorized` means the
    /// session expired.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<WebsiteSummary>, ApiError> {
        self.api.get("websites").await
    }

    /// Fetch one website in full.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &WebsiteId) -> Result<WebsiteRecord, ApiError> {
        self.api.get(&format!("websites/{id}")).await
    }

    /// Apply a partial update to an existing website.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: &WebsiteId,
        patch: &WebsitePatch,
    ) -> Result<WebsiteRecord, ApiError> {
        self.api.put(&format!("websites/{id}"), patch).await
    }

    /// Delete a website.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for a stale id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &WebsiteId) -> Result<(), ApiError> {
        self.api.delete(&format!("websites/{id}")).await
    }

    /// The out-of-band preview URL for a website, for opening in a
    /// browser. No request is made here.
    #[must_use]
    pub fn preview_url(&self, id: &WebsiteId) -> String {
        self.api.endpoint(&format!("websites/{id}/preview"))
    }
}

/// The dashboard's cached website list.
///
/// The cache is read-only between refreshes and is mutated locally in
/// exactly one case: an entry is removed after - and only after - the
/// backend confirms its deletion. A failed delete leaves the list visibly
/// unchanged; there is no speculative removal.
#[derive(Debug, Clone)]
pub struct Dashboard {
    service: WebsiteService,
    sites: Vec<WebsiteSummary>,
}

impl Dashboard {
    /// Create an empty dashboard; call [`refresh`](Self::refresh) to
    /// populate it.
    #[must_use]
    pub const fn new(service: WebsiteService) -> Self {
        Self {
            service,
            sites: Vec::new(),
        }
    }

    /// The cached list.
    #[must_use]
    pub fn sites(&self) -> &[WebsiteSummary] {
        &self.sites
    }

    /// The underlying service, for operations that bypass the cache.
    #[must_use]
    pub const fn service(&self) -> &WebsiteService {
        &self.service
    }

    /// Re-fetch the list, replacing the cache only on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the previous cache is kept on failure.
    pub async fn refresh(&mut self) -> Result<&[WebsiteSummary], ApiError> {
        let sites = self.service.list().await?;
        self.sites = sites;
        Ok(&self.sites)
    }

    /// Delete a website and, once the backend confirms, drop it from the
    /// cache.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the cache is untouched on failure.
    pub async fn delete(&mut self, id: &WebsiteId) -> Result<(), ApiError> {
        self.service.delete(id).await?;
        self.sites.retain(|site| site.id != *id);
        Ok(())
    }
}
