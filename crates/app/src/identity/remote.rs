//! HTTP client for the remote identity service.
//!
//! A small JSON/REST client. The service's own implementation is out of
//! scope; this client only depends on the four-operation shape described in
//! the module docs of [`crate::identity`].

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use findkaro_core::{Email, Role, UserId};

use super::{AuthRecord, IdentityError, IdentityGateway, Profile};
use crate::config::RemoteIdentityConfig;

/// Client for the remote identity service.
#[derive(Clone)]
pub struct RemoteIdentity {
    inner: Arc<RemoteIdentityInner>,
}

struct RemoteIdentityInner {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

impl RemoteIdentity {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: &RemoteIdentityConfig) -> Self {
        Self {
            inner: Arc::new(RemoteIdentityInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        // Trailing slashes on the base URL are tolerated.
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.inner.api_key {
            Some(key) => builder.header("X-Api-Key", key.expose_secret()),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, IdentityError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(IdentityError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

impl IdentityGateway for RemoteIdentity {
    #[instrument(skip_all, fields(email = %email))]
    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthRecord, IdentityError> {
        let response = self
            .request(self.inner.client.post(self.endpoint("v1/sessions")))
            .json(&CredentialsBody {
                email: email.as_str(),
                password,
            })
            .send()
            .await?;
        let record: AuthRecord = Self::check(response).await?.json().await?;
        debug!(uid = %record.uid, "remote sign-in succeeded");
        Ok(record)
    }

    #[instrument(skip_all, fields(email = %email))]
    async fn sign_up(
        &self,
        email: &Email,
        password: &str,
        role: Role,
    ) -> Result<AuthRecord, IdentityError> {
        let response = self
            .request(self.inner.client.post(self.endpoint("v1/accounts")))
            .json(&SignUpBody {
                email: email.as_str(),
                password,
                role,
            })
            .send()
            .await?;
        let record: AuthRecord = Self::check(response).await?.json().await?;
        debug!(uid = %record.uid, "remote sign-up succeeded");
        Ok(record)
    }

    #[instrument(skip_all)]
    async fn sign_out(&self) -> Result<(), IdentityError> {
        let response = self
            .request(self.inner.client.delete(self.endpoint("v1/sessions")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(uid = %uid))]
    async fn fetch_profile(&self, uid: &UserId) -> Result<Option<Profile>, IdentityError> {
        let response = self
            .request(
                self.inner
                    .client
                    .get(self.endpoint(&format!("v1/profiles/{uid}"))),
            )
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let profile: Profile = Self::check(response).await?.json().await?;
        Ok(Some(profile))
    }
}

impl std::fmt::Debug for RemoteIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteIdentity")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_key", &self.inner.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> RemoteIdentity {
        RemoteIdentity::new(&RemoteIdentityConfig {
            base_url: Url::parse(base).unwrap(),
            api_key: None,
        })
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            client("https://id.example.com").endpoint("v1/sessions"),
            "https://id.example.com/v1/sessions"
        );
        assert_eq!(
            client("https://id.example.com/").endpoint("v1/sessions"),
            "https://id.example.com/v1/sessions"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let remote = RemoteIdentity::new(&RemoteIdentityConfig {
            base_url: Url::parse("https://id.example.com").unwrap(),
            api_key: Some(SecretString::from("k-3fZ8qX1pR7vN2m")),
        });
        let debug = format!("{remote:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("k-3fZ8qX1pR7vN2m"));
    }
}
