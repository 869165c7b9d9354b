//! Remote identity service boundary.
//!
//! The session layer consumes four operations: `sign_in`, `sign_up`,
//! `sign_out` and `fetch_profile`. The service is optional and degrades
//! gracefully - the caller treats "service unreachable" and "service
//! returned an error" identically and falls back to a deterministic local
//! identity derivation ([`fallback`]).

mod fallback;
mod remote;

pub use fallback::{ProfileCache, fallback_user_id};
pub use remote::RemoteIdentity;

use serde::{Deserialize, Serialize};

use findkaro_core::{Email, Role, UserId};

/// Result of a successful remote sign-in or sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRecord {
    /// Remote user ID.
    pub uid: UserId,
    /// Email as recorded by the service.
    pub email: Email,
    /// Session token, when the service issues one.
    #[serde(default)]
    pub token: Option<String>,
}

/// A role profile stored with the remote identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Account role.
    pub role: Role,
    /// Display name.
    pub display_name: String,
}

/// Errors from the remote identity service.
///
/// Callers never branch on the variant - every failure takes the same
/// fallback path - but the variants keep logs useful.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The service could not be reached or the transport failed.
    #[error("identity service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an error status.
    #[error("identity service rejected the request (status {status})")]
    Rejected {
        /// HTTP status code returned.
        status: u16,
    },
}

/// The four operations the session layer consumes.
///
/// Implemented by [`RemoteIdentity`] in production and by fakes in tests.
pub trait IdentityGateway {
    /// Authenticate existing credentials.
    fn sign_in(
        &self,
        email: &Email,
        password: &str,
    ) -> impl Future<Output = Result<AuthRecord, IdentityError>> + Send;

    /// Create an account with the given role.
    fn sign_up(
        &self,
        email: &Email,
        password: &str,
        role: Role,
    ) -> impl Future<Output = Result<AuthRecord, IdentityError>> + Send;

    /// End the remote session. Callers ignore failures.
    fn sign_out(&self) -> impl Future<Output = Result<(), IdentityError>> + Send;

    /// Fetch the stored role profile for a user, if one exists.
    fn fetch_profile(
        &self,
        uid: &UserId,
    ) -> impl Future<Output = Result<Option<Profile>, IdentityError>> + Send;
}

/// Uninhabited gateway for deployments with no remote identity service
/// configured: every authentication takes the local fallback path.
#[derive(Debug, Clone, Copy)]
pub enum NoRemote {}

impl IdentityGateway for NoRemote {
    async fn sign_in(&self, _email: &Email, _password: &str) -> Result<AuthRecord, IdentityError> {
        match *self {}
    }

    async fn sign_up(
        &self,
        _email: &Email,
        _password: &str,
        _role: Role,
    ) -> Result<AuthRecord, IdentityError> {
        match *self {}
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        match *self {}
    }

    async fn fetch_profile(&self, _uid: &UserId) -> Result<Option<Profile>, IdentityError> {
        match *self {}
    }
}
