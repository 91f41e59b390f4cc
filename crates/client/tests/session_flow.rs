//! Session lifecycle against a live (in-process) backend.

#![allow(clippy::unwrap_used)]

mod common;

use secrecy::SecretString;
use tempfile::TempDir;
use url::Url;

use sitesmith_client::{
    ApiClient, RouteDecision, SessionStatus, SessionStore, TokenFile, route_decision,
};

use common::{GOOD_EMAIL, GOOD_PASSWORD, GOOD_TOKEN, TAKEN_EMAIL, spawn_stub};

fn store_at(base: Url, dir: &TempDir) -> SessionStore {
    let api = ApiClient::new(base);
    SessionStore::new(api, TokenFile::new(dir.path().join("token")))
}

fn persisted_token(dir: &TempDir) -> Option<String> {
    std::fs::read_to_string(dir.path().join("token"))
        .ok()
        .map(|s| s.trim().to_owned())
}

#[tokio::test]
async fn restore_with_accepted_token_authenticates() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    TokenFile::new(dir.path().join("token"))
        .save(&SecretString::from(GOOD_TOKEN))
        .unwrap();

    store.restore().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, SessionStatus::Authenticated);
    assert_eq!(snapshot.user.unwrap().name, "Ann");
    assert_eq!(route_decision(&store.snapshot()), RouteDecision::Allow);
}

#[tokio::test]
async fn restore_with_rejected_token_fails_closed() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    TokenFile::new(dir.path().join("token"))
        .save(&SecretString::from("stale-token"))
        .unwrap();

    store.restore().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, SessionStatus::Anonymous);
    assert!(snapshot.user.is_none());
    // The rejected token is gone and no credential remains installed.
    assert_eq!(persisted_token(&dir), None);
    assert!(!store.api().has_credential());
    assert_eq!(
        route_decision(&store.snapshot()),
        RouteDecision::RedirectToSignIn
    );
}

#[tokio::test]
async fn restore_without_token_is_anonymous() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    store.restore().await;

    assert_eq!(store.snapshot().status, SessionStatus::Anonymous);
    assert!(!store.api().has_credential());
}

#[tokio::test]
async fn login_success_persists_and_authenticates() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    assert!(store.login(GOOD_EMAIL, GOOD_PASSWORD).await);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, SessionStatus::Authenticated);
    assert_eq!(snapshot.user.unwrap().email.as_str(), GOOD_EMAIL);
    assert_eq!(persisted_token(&dir).as_deref(), Some(GOOD_TOKEN));
}

#[tokio::test]
async fn login_with_wrong_password_reports_false() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    assert!(!store.login(GOOD_EMAIL, "wrong").await);

    assert_eq!(store.snapshot().status, SessionStatus::Anonymous);
    assert_eq!(persisted_token(&dir), None);
    assert!(!store.api().has_credential());
}

#[tokio::test]
async fn register_success_authenticates() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    assert!(store.register("Ann", "new@x.com", "hunter2").await);
    assert_eq!(store.snapshot().status, SessionStatus::Authenticated);
    assert_eq!(persisted_token(&dir).as_deref(), Some(GOOD_TOKEN));
}

#[tokio::test]
async fn register_duplicate_email_reports_false() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    assert!(!store.register("Ann", TAKEN_EMAIL, "hunter2").await);
    assert_eq!(store.snapshot().status, SessionStatus::Anonymous);
    assert_eq!(persisted_token(&dir), None);
}

#[tokio::test]
async fn logout_clears_everything() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    assert!(store.login(GOOD_EMAIL, GOOD_PASSWORD).await);
    store.logout();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.status, SessionStatus::Anonymous);
    assert!(snapshot.user.is_none());
    assert_eq!(persisted_token(&dir), None);
    assert!(!store.api().has_credential());
}

#[tokio::test]
async fn observers_see_the_full_transition_sequence() {
    let (base, _state) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(base, &dir);

    let rx = store.subscribe();
    assert_eq!(rx.borrow().status, SessionStatus::Unresolved);

    TokenFile::new(dir.path().join("token"))
        .save(&SecretString::from(GOOD_TOKEN))
        .unwrap();
    store.restore().await;

    // The watch channel holds the latest state; after restore completes
    // the observer sees Authenticated.
    assert_eq!(rx.borrow().status, SessionStatus::Authenticated);

    store.logout();
    assert_eq!(rx.borrow().status, SessionStatus::Anonymous);
}
