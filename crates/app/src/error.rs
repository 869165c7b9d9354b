//! Application-level error type.

use crate::config::ConfigError;
use crate::onboarding::ValidationError;
use crate::registry::RegistryError;
use crate::session::AuthError;
use crate::store::StoreError;

/// Convenience alias used across the application layer.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Any error an application-level operation can raise.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Authentication failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// A directory or shelf operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Onboarding input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The data directory could not be opened.
    #[error(transparent)]
    Store(#[from] StoreError),
}
