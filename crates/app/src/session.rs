//! Session lifecycle: login, signup, logout, profile refresh.
//!
//! Authentication prefers the remote identity service when one is
//! configured, and degrades to a deterministic local fallback identity on
//! any remote failure. Logout always succeeds locally even when the remote
//! sign-out fails. The current identity is written through to the
//! `current_identity` key on every change, so a restart resumes the session.

use secrecy::ExposeSecret;
use tracing::{info, instrument, warn};

use findkaro_core::{Email, EmailError, Role, StoreId};

use crate::config::AdminBypass;
use crate::identity::{AuthRecord, IdentityGateway, ProfileCache, fallback_user_id};
use crate::models::Identity;
use crate::store::{Persistence, StoreKey};

/// Minimum accepted PIN length.
const MIN_PIN_LEN: usize = 2;

/// Errors raised by session operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email failed validation.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    /// The PIN is shorter than the minimum.
    #[error("PIN must be at least {MIN_PIN_LEN} characters")]
    PinTooShort,
    /// The admin email was used with a PIN that does not match the
    /// configured passcode.
    #[error("admin passcode does not match")]
    InvalidAdminPasscode,
    /// The operation needs an authenticated session and there is none.
    #[error("not logged in")]
    NotLoggedIn,
}

/// Manages the current identity.
///
/// Generic over the identity gateway so tests can swap in fakes; offline
/// deployments instantiate `SessionService<NoRemote>` with no gateway.
#[derive(Debug)]
pub struct SessionService<G> {
    gateway: Option<G>,
    profiles: ProfileCache,
    persistence: Persistence,
    admin: Option<AdminBypass>,
    current: Option<Identity>,
}

impl<G: IdentityGateway> SessionService<G> {
    /// Wire the service and resume any persisted session.
    #[must_use]
    pub fn new(persistence: Persistence, gateway: Option<G>, admin: Option<AdminBypass>) -> Self {
        let current: Option<Identity> = persistence.load_json(StoreKey::CurrentIdentity);
        if let Some(identity) = &current {
            info!(user = %identity.id, role = %identity.role, "resumed persisted session");
        }
        Self {
            gateway,
            profiles: ProfileCache::new(persistence.clone()),
            persistence,
            admin,
            current,
        }
    }

    /// The current identity, if logged in.
    #[must_use]
    pub const fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Authenticate with email and PIN.
    ///
    /// Checks the admin bypass first, then the remote service, then the
    /// local fallback. Only validation failures are errors; remote failures
    /// silently take the fallback path.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the email or PIN fails validation, or the
    /// admin email is used with the wrong passcode.
    #[instrument(skip_all)]
    pub async fn login(&mut self, email: &str, pin: &str) -> Result<&Identity, AuthError> {
        let email = Email::parse(email)?;
        check_pin(pin)?;

        if let Some(admin) = &self.admin
            && admin.email == email
        {
            if pin != admin.passcode.expose_secret() {
                return Err(AuthError::InvalidAdminPasscode);
            }
            info!("admin bypass login");
            let identity = self.build_identity(fallback_record(&email), Role::Admin, None);
            return Ok(self.install(identity));
        }

        let identity = match self.remote_sign_in(&email, pin).await {
            Some(record) => {
                let profile = self.remote_profile(&record).await;
                let (role, name) = profile
                    .map_or((Role::Shopper, None), |p| (p.role, Some(p.display_name)));
                self.build_identity(record, role, name)
            }
            None => {
                let record = fallback_record(&email);
                let cached = self.profiles.get(&record.uid);
                let (role, name) =
                    cached.map_or((Role::Shopper, None), |p| (p.role, Some(p.display_name)));
                self.build_identity(record, role, name)
            }
        };
        info!(user = %identity.id, role = %identity.role, "logged in");
        Ok(self.install(identity))
    }

    /// Create an account with the requested role and log in.
    ///
    /// On the fallback path the chosen role is recorded in the local profile
    /// cache so later fallback logins for the same email recover it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the email or PIN fails validation.
    #[instrument(skip_all, fields(role = %role))]
    pub async fn signup(&mut self, email: &str, pin: &str, role: Role) -> Result<&Identity, AuthError> {
        let email = Email::parse(email)?;
        check_pin(pin)?;

        let record = match self.remote_sign_up(&email, pin, role).await {
            Some(record) => record,
            None => {
                let record = fallback_record(&email);
                self.profiles.insert(record.uid.clone(), role, &email);
                record
            }
        };
        let identity = self.build_identity(record, role, None);
        info!(user = %identity.id, role = %identity.role, "signed up");
        Ok(self.install(identity))
    }

    /// End the session. Never fails: a remote sign-out error is logged and
    /// the local session is torn down regardless.
    #[instrument(skip_all)]
    pub async fn logout(&mut self) {
        if let Some(gateway) = &self.gateway
            && let Err(err) = gateway.sign_out().await
        {
            warn!(error = %err, "remote sign-out failed, clearing local session anyway");
        }
        self.current = None;
        self.persistence.clear(StoreKey::CurrentIdentity);
        info!("logged out");
    }

    /// Re-fetch the role profile for the current identity and merge it in.
    /// The existing identity is retained when nothing fresher is available.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] when there is no session.
    #[instrument(skip_all)]
    pub async fn refresh(&mut self) -> Result<&Identity, AuthError> {
        let current = self.current.clone().ok_or(AuthError::NotLoggedIn)?;

        let profile = match &self.gateway {
            Some(gateway) => match gateway.fetch_profile(&current.id).await {
                Ok(profile) => profile,
                Err(err) => {
                    warn!(error = %err, "profile refresh failed, keeping current identity");
                    None
                }
            },
            None => self.profiles.get(&current.id).map(|p| crate::identity::Profile {
                role: p.role,
                display_name: p.display_name,
            }),
        };

        if let Some(profile) = profile {
            let identity = self.current.as_mut().ok_or(AuthError::NotLoggedIn)?;
            identity.role = profile.role;
            identity.display_name = profile.display_name;
            self.persistence
                .save_json(StoreKey::CurrentIdentity, identity);
        }
        self.current.as_ref().ok_or(AuthError::NotLoggedIn)
    }

    /// Record the store the current merchant owns.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] when there is no session.
    pub fn attach_store(&mut self, store_id: StoreId) -> Result<(), AuthError> {
        let identity = self.current.as_mut().ok_or(AuthError::NotLoggedIn)?;
        identity.store_id = Some(store_id);
        self.persistence
            .save_json(StoreKey::CurrentIdentity, identity);
        Ok(())
    }

    async fn remote_sign_in(&self, email: &Email, pin: &str) -> Option<AuthRecord> {
        let gateway = self.gateway.as_ref()?;
        match gateway.sign_in(email, pin).await {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "remote sign-in failed, using local fallback");
                None
            }
        }
    }

    async fn remote_sign_up(&self, email: &Email, pin: &str, role: Role) -> Option<AuthRecord> {
        let gateway = self.gateway.as_ref()?;
        match gateway.sign_up(email, pin, role).await {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "remote sign-up failed, using local fallback");
                None
            }
        }
    }

    async fn remote_profile(&self, record: &AuthRecord) -> Option<crate::identity::Profile> {
        let gateway = self.gateway.as_ref()?;
        match gateway.fetch_profile(&record.uid).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "profile fetch failed, defaulting to shopper");
                None
            }
        }
    }

    fn build_identity(
        &self,
        record: AuthRecord,
        role: Role,
        display_name: Option<String>,
    ) -> Identity {
        let display_name =
            display_name.unwrap_or_else(|| record.email.local_part().to_owned());
        let avatar_url = Some(Identity::avatar_for(&record.email));
        Identity {
            id: record.uid,
            email: record.email,
            display_name,
            role,
            store_id: None,
            avatar_url,
            token: record.token,
        }
    }

    fn install(&mut self, identity: Identity) -> &Identity {
        self.persistence
            .save_json(StoreKey::CurrentIdentity, &identity);
        self.current.insert(identity)
    }
}

fn check_pin(pin: &str) -> Result<(), AuthError> {
    if pin.len() < MIN_PIN_LEN {
        return Err(AuthError::PinTooShort);
    }
    Ok(())
}

fn fallback_record(email: &Email) -> AuthRecord {
    AuthRecord {
        uid: fallback_user_id(email),
        email: email.clone(),
        token: None,
    }
}
