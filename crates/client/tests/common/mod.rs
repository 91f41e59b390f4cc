//! In-process stub of the site-generation backend.
//!
//! Mirrors the real API's shapes: bearer-token auth, FastAPI-style
//! `{"detail": ...}` error bodies, naive UTC timestamps, and full website
//! records from the list endpoint. Each test spawns its own instance on an
//! ephemeral port and points a real `ApiClient` at it.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{delete, get, post};
use axum::Router;
use serde_json::{Value, json};
use url::Url;

/// Token the stub accepts.
pub const GOOD_TOKEN: &str = "token-for-ann";
/// Credentials the stub accepts.
pub const GOOD_EMAIL: &str = "a@x.com";
pub const GOOD_PASSWORD: &str = "hunter2";
/// An email the register endpoint treats as already taken.
pub const TAKEN_EMAIL: &str = "taken@x.com";

const NOW: &str = "2025-03-01T09:30:00.123456";

/// Shared stub state, cloned into handlers.
#[derive(Clone, Default)]
pub struct StubState {
    /// Bodies received by `POST /api/websites`, in arrival order.
    pub submissions: Arc<Mutex<Vec<Value>>>,
}

/// Spawn the stub on an ephemeral port; returns the API base URL.
pub async fn spawn_stub() -> (Url, StubState) {
    let state = StubState::default();

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
        .route("/api/websites", get(list_websites).post(create_website))
        .route("/api/websites/{id}", delete(delete_website))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    let base = Url::parse(&format!("http://{addr}/api")).expect("stub base url");
    (base, state)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {GOOD_TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Invalid authentication credentials" })),
    )
}

fn token_response() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "access_token": GOOD_TOKEN, "token_type": "bearer" })),
    )
}

/// A full website record as the backend would return it.
fn record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "user_id": "u1",
        "business_name": name,
        "business_description": format!("{name} description"),
        "industry": "ecommerce",
        "contact_email": "hello@example.com",
        "contact_phone": "+1 555 0100",
        "address": "12 Kiln Lane",
        "products": [],
        "colors": {},
        "social_links": {},
        "slug": name.to_lowercase().replace(' ', "-"),
        "is_active": true,
        "created_at": NOW,
        "updated_at": NOW,
    })
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == GOOD_EMAIL && body["password"] == GOOD_PASSWORD {
        token_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid email or password" })),
        )
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == TAKEN_EMAIL {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Email already registered" })),
        )
    } else {
        token_response()
    }
}

async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if authorized(&headers) {
        (
            StatusCode::OK,
            Json(json!({
                "id": "u1",
                "name": "Ann",
                "email": GOOD_EMAIL,
                "created_at": NOW,
                "is_active": true,
            })),
        )
    } else {
        unauthorized()
    }
}

async fn list_websites(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if authorized(&headers) {
        (
            StatusCode::OK,
            Json(json!([
                record("w1", "First Site"),
                record("w2", "Second Site"),
            ])),
        )
    } else {
        unauthorized()
    }
}

async fn create_website(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }

    state
        .submissions
        .lock()
        .expect("submissions lock")
        .push(body.clone());

    let mut created = body;
    if let Value::Object(map) = &mut created {
        map.insert("id".to_owned(), json!("w-created"));
        map.insert("user_id".to_owned(), json!("u1"));
        map.insert("slug".to_owned(), json!("created-site"));
        map.insert("is_active".to_owned(), json!(true));
        map.insert("created_at".to_owned(), json!(NOW));
        map.insert("updated_at".to_owned(), json!(NOW));
    }
    (StatusCode::OK, Json(created))
}

async fn delete_website(
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }

    match id.as_str() {
        "w1" | "w2" => (
            StatusCode::OK,
            Json(json!({ "message": "Website deleted successfully" })),
        ),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "internal error" })),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Website not found" })),
        ),
    }
}
