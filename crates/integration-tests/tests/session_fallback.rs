//! Session behaviour when the remote identity service is absent or down.

#![allow(clippy::unwrap_used)]

use findkaro_app::identity::{AuthRecord, IdentityError, IdentityGateway, Profile};
use findkaro_app::store::{MemoryStore, Persistence, StoreKey};
use findkaro_core::{Email, Role, UserId};
use findkaro_integration_tests::{app_with_gateway, offline_app, reopen};

/// Gateway standing in for an unreachable service.
struct UnreachableGateway;

impl IdentityGateway for UnreachableGateway {
    async fn sign_in(&self, _: &Email, _: &str) -> Result<AuthRecord, IdentityError> {
        Err(IdentityError::Rejected { status: 502 })
    }

    async fn sign_up(&self, _: &Email, _: &str, _: Role) -> Result<AuthRecord, IdentityError> {
        Err(IdentityError::Rejected { status: 502 })
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        Err(IdentityError::Rejected { status: 502 })
    }

    async fn fetch_profile(&self, _: &UserId) -> Result<Option<Profile>, IdentityError> {
        Err(IdentityError::Rejected { status: 502 })
    }
}

#[tokio::test]
async fn test_same_email_always_yields_same_user() {
    let (mut app, persistence) = offline_app();
    let first = app.login("ayesha@example.com", "1234").await.unwrap().id;
    app.session.logout().await;

    // Even across a restart.
    let mut reopened = reopen(persistence);
    let second = reopened.login("ayesha@example.com", "1234").await.unwrap().id;
    assert_eq!(first, second);
    assert!(first.as_str().starts_with("u_"));
}

#[tokio::test]
async fn test_signup_role_recovered_on_fallback_login() {
    let (mut app, persistence) = offline_app();
    app.session
        .signup("owner@example.com", "1234", Role::MerchantOwner)
        .await
        .unwrap();
    app.session.logout().await;

    let mut reopened = reopen(persistence);
    let identity = reopened.login("owner@example.com", "1234").await.unwrap();
    assert_eq!(identity.role, Role::MerchantOwner);
}

#[tokio::test]
async fn test_remote_failure_degrades_to_fallback() {
    let persistence = Persistence::new(MemoryStore::default());
    let mut app = app_with_gateway(persistence, UnreachableGateway);

    let identity = app.login("ayesha@example.com", "1234").await.unwrap();
    assert!(identity.id.as_str().starts_with("u_"));
    assert_eq!(identity.role, Role::Shopper);
}

#[tokio::test]
async fn test_logout_clears_session_even_when_remote_fails() {
    let persistence = Persistence::new(MemoryStore::default());
    let mut app = app_with_gateway(persistence.clone(), UnreachableGateway);
    app.login("ayesha@example.com", "1234").await.unwrap();

    app.session.logout().await;

    assert!(app.session.current().is_none());
    // The persisted key is gone, not just the in-memory state.
    let raw: Option<serde_json::Value> = persistence.load_json(StoreKey::CurrentIdentity);
    assert!(raw.is_none());
}

#[tokio::test]
async fn test_session_resumes_across_restart() {
    let (mut app, persistence) = offline_app();
    app.login("ayesha@example.com", "1234").await.unwrap();

    let reopened = reopen(persistence);
    let identity = reopened.session.current().unwrap();
    assert_eq!(identity.email.as_str(), "ayesha@example.com");
}
