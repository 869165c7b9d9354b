//! Application configuration.
//!
//! All configuration comes from environment variables (a `.env` file is
//! honoured in development). Only the pieces that vary per deployment live
//! here; reference data such as the item library is compiled in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use findkaro_core::Email;

/// Environment variable names.
const ENV_DATA_DIR: &str = "FINDKARO_DATA_DIR";
const ENV_IDENTITY_URL: &str = "FINDKARO_IDENTITY_URL";
const ENV_IDENTITY_API_KEY: &str = "FINDKARO_IDENTITY_API_KEY";
const ENV_ADMIN_EMAIL: &str = "FINDKARO_ADMIN_EMAIL";
const ENV_ADMIN_PASSCODE: &str = "FINDKARO_ADMIN_PASSCODE";
const ENV_ONBOARDING_DELAY_MS: &str = "FINDKARO_ONBOARDING_DELAY_MS";
const ENV_SUPPORT_PAYMENT_ID: &str = "FINDKARO_SUPPORT_PAYMENT_ID";

/// Default data directory when none is configured.
const DEFAULT_DATA_DIR: &str = "./.findkaro";
/// Default simulated provisioning delay for merchant onboarding.
const DEFAULT_ONBOARDING_DELAY_MS: u64 = 1000;
/// Default mobile-wallet account shown on the activation notice.
const DEFAULT_SUPPORT_PAYMENT_ID: &str = "03290144760";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// An environment variable is present but unusable.
    #[error("invalid environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Connection settings for the remote identity service.
#[derive(Debug, Clone)]
pub struct RemoteIdentityConfig {
    /// Base URL of the service.
    pub base_url: Url,
    /// Optional API key sent on every request.
    pub api_key: Option<SecretString>,
}

/// Credentials that bypass the identity service entirely and yield an
/// admin session.
#[derive(Debug, Clone)]
pub struct AdminBypass {
    /// Email that triggers the bypass check.
    pub email: Email,
    /// Passcode the login attempt must match exactly.
    pub passcode: SecretString,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted JSON documents.
    pub data_dir: PathBuf,
    /// Remote identity service, when one is configured.
    pub identity: Option<RemoteIdentityConfig>,
    /// Admin bypass credentials, when configured.
    pub admin: Option<AdminBypass>,
    /// Simulated provisioning delay during merchant onboarding.
    pub onboarding_delay: Duration,
    /// Mobile-wallet account shown on the paid-plan activation notice.
    pub support_payment_id: String,
}

impl AppConfig {
    /// Load configuration from the process environment, reading a `.env`
    /// file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed, or
    /// when the admin bypass pair is only half configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. `from_env` delegates here;
    /// tests supply a map instead of touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = optional(&lookup, ENV_DATA_DIR)
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let identity = optional(&lookup, ENV_IDENTITY_URL)
            .map(|raw| {
                let base_url =
                    Url::parse(&raw).map_err(|err| ConfigError::InvalidEnvVar {
                        name: ENV_IDENTITY_URL,
                        reason: err.to_string(),
                    })?;
                Ok(RemoteIdentityConfig {
                    base_url,
                    api_key: optional(&lookup, ENV_IDENTITY_API_KEY).map(SecretString::from),
                })
            })
            .transpose()?;

        let admin = match (
            optional(&lookup, ENV_ADMIN_EMAIL),
            optional(&lookup, ENV_ADMIN_PASSCODE),
        ) {
            (Some(email), Some(passcode)) => {
                let email = Email::parse(&email).map_err(|err| ConfigError::InvalidEnvVar {
                    name: ENV_ADMIN_EMAIL,
                    reason: err.to_string(),
                })?;
                Some(AdminBypass {
                    email,
                    passcode: SecretString::from(passcode),
                })
            }
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar {
                    name: ENV_ADMIN_PASSCODE,
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar {
                    name: ENV_ADMIN_EMAIL,
                });
            }
        };

        let onboarding_delay = match optional(&lookup, ENV_ONBOARDING_DELAY_MS) {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|err| ConfigError::InvalidEnvVar {
                    name: ENV_ONBOARDING_DELAY_MS,
                    reason: err.to_string(),
                })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_millis(DEFAULT_ONBOARDING_DELAY_MS),
        };

        let support_payment_id = optional(&lookup, ENV_SUPPORT_PAYMENT_ID)
            .unwrap_or_else(|| DEFAULT_SUPPORT_PAYMENT_ID.to_owned());

        Ok(Self {
            data_dir,
            identity,
            admin,
            onboarding_delay,
            support_payment_id,
        })
    }
}

/// Read an optional variable, treating whitespace-only values as unset.
fn optional(lookup: impl Fn(&str) -> Option<String>, name: &'static str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
