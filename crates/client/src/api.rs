//! HTTP client for the site-generation backend.
//!
//! # Architecture
//!
//! - Plain REST + JSON over `reqwest`, one client shared by every component
//! - A single credential slot; each request is built explicitly from it
//!   (`Authorization: Bearer ...`), never from shared library default
//!   headers
//! - Only the session store may write the slot: `install_credential` and
//!   `clear_credential` are crate-private, which is what enforces the
//!   single-writer contract
//! - Status codes are triaged into the error taxonomy before any body
//!   decoding, so callers can match on `Unauthorized` / `NotFound` /
//!   `Validation` instead of inspecting responses

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::instrument;
use url::Url;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connect,
    /// timeout, garbled transfer).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credential (missing, invalid, or expired).
    #[error("unauthorized: credential rejected or expired")]
    Unauthorized,

    /// The backend rejected the request body.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed resource does not exist (stale id).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A success response carried a body we could not decode.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any other non-success status.
    #[error("unexpected status {status}: {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend-provided detail, if any.
        detail: String,
    },
}

impl ApiError {
    /// Whether this failure means the caller must re-authenticate.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// HTTP API client.
///
/// Cheap to clone; all clones share the same connection pool and the same
/// credential slot.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    /// The one installed credential. Written only by the session store.
    credential: RwLock<Option<SecretString>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("credential", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the given API base URL (e.g.
    /// `http://localhost:8000/api`).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never
    /// happen under normal circumstances as we use standard TLS
    /// configuration.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                credential: RwLock::new(None),
            }),
        }
    }

    // =========================================================================
    // Credential slot (session store only)
    // =========================================================================

    /// Install the credential attached to subsequent requests, atomically
    /// superseding any previous one.
    pub(crate) fn install_credential(&self, token: SecretString) {
        *self
            .inner
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Remove the installed credential; subsequent requests go out
    /// anonymous.
    pub(crate) fn clear_credential(&self) {
        *self
            .inner
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a credential is currently installed.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.inner
            .credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Absolute URL for an API path.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}/{}", path.trim_start_matches('/'))
    }

    /// Attach the installed credential, if any.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let slot = self
            .inner
            .credential
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure, `Unauthorized` /
    /// `NotFound` / `Validation` / `Api` per response status, and `Parse`
    /// if the success body does not decode.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(self.inner.http.get(self.endpoint(path)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    #[instrument(skip(self, body))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.inner.http.post(self.endpoint(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    #[instrument(skip(self, body))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.inner.http.put(self.endpoint(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE` a resource, discarding the confirmation body.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.inner.http.delete(self.endpoint(path)))
            .send()
            .await?;
        let _confirmation: serde_json::Value = Self::decode(response).await?;
        Ok(())
    }

    // =========================================================================
    // Response decoding
    // =========================================================================

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(ApiError::Parse);
        }

        let detail = error_detail(response).await;
        Err(classify(status, detail))
    }
}

/// Map a non-success status to the error taxonomy.
fn classify(status: StatusCode, detail: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(detail),
        other => ApiError::Api {
            status: other.as_u16(),
            detail,
        },
    }
}

/// Extract the backend's `{"detail": ...}` error message.
///
/// The detail is usually a string, but request-validation failures carry a
/// structured list; those are passed through as compact JSON.
async fn error_detail(response: reqwest::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: serde_json::Value,
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => match body.detail {
            serde_json::Value::String(detail) => detail,
            serde_json::Value::Null => "(no detail provided)".to_owned(),
            other => other.to_string(),
        },
        Err(_) => "(unreadable error body)".to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let api = client("http://localhost:8000/api");
        assert_eq!(
            api.endpoint("auth/me"),
            "http://localhost:8000/api/auth/me"
        );
        assert_eq!(
            api.endpoint("/websites/w1"),
            "http://localhost:8000/api/websites/w1"
        );

        // A trailing slash on the base must not double up.
        let api = client("http://localhost:8000/api/");
        assert_eq!(api.endpoint("websites"), "http://localhost:8000/api/websites");
    }

    #[test]
    fn test_classify_status_codes() {
        assert!(matches!(
            classify(StatusCode::UNAUTHORIZED, String::new()),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, "Website not found".to_owned()),
            ApiError::NotFound(detail) if detail == "Website not found"
        ));
        assert!(matches!(
            classify(StatusCode::BAD_REQUEST, "Email already registered".to_owned()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ApiError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_credential_slot() {
        let api = client("http://localhost:8000/api");
        assert!(!api.has_credential());

        api.install_credential(SecretString::from("t1"));
        assert!(api.has_credential());

        // Installing supersedes; clearing empties.
        api.install_credential(SecretString::from("t2"));
        assert!(api.has_credential());
        api.clear_credential();
        assert!(!api.has_credential());
    }

    #[test]
    fn test_debug_redacts_credential() {
        let api = client("http://localhost:8000/api");
        api.install_credential(SecretString::from("super-secret-token"));

        let debug = format!("{api:?}");
        assert!(debug.contains("http://localhost:8000/api"));
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::NotFound(String::new()).is_unauthorized());
    }
}
