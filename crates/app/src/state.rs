//! Application container and cross-service workflows.
//!
//! [`App`] wires the session, registry, chat and notification services over
//! one shared persistence facade. Single-service operations go through the
//! public fields; the methods here implement the workflows that span more
//! than one service.

use rust_decimal::Decimal;
use tracing::{info, instrument};

use findkaro_core::{ReviewDecision, Role, StoreId};

use crate::chat::ChatStore;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::identity::{IdentityGateway, NoRemote, RemoteIdentity};
use crate::models::{Identity, NewStore, NotificationKind, Store};
use crate::notifications::NotificationLog;
use crate::onboarding::OnboardingForm;
use crate::registry::Registry;
use crate::session::{AuthError, SessionService};
use crate::store::{JsonFileStore, Persistence};

/// What a merchant with a paid, unpaid store is shown.
#[derive(Debug, Clone)]
pub struct ActivationNotice {
    /// Store awaiting payment.
    pub store_name: String,
    /// Marketing name of the selected plan.
    pub plan_name: &'static str,
    /// Monthly price in PKR.
    pub monthly_price: Decimal,
    /// Mobile-wallet account to send payment to.
    pub payment_id: String,
}

/// The wired application.
#[derive(Debug)]
pub struct App<G> {
    config: AppConfig,
    /// Session lifecycle.
    pub session: SessionService<G>,
    /// Store directory and shelf inventory.
    pub registry: Registry,
    /// Direct messaging.
    pub chats: ChatStore,
    /// Notification log.
    pub notifications: NotificationLog,
}

impl App<RemoteIdentity> {
    /// Wire the application from configuration, with the remote identity
    /// gateway when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the data directory cannot be opened.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let persistence = Persistence::new(JsonFileStore::open(&config.data_dir)?);
        let gateway = config.identity.as_ref().map(RemoteIdentity::new);
        Ok(Self::new(config, persistence, gateway))
    }
}

impl App<NoRemote> {
    /// Wire the application with no remote identity service; every
    /// authentication takes the local fallback path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the data directory cannot be opened.
    pub fn offline(config: AppConfig) -> Result<Self> {
        let persistence = Persistence::new(JsonFileStore::open(&config.data_dir)?);
        Ok(Self::new(config, persistence, None))
    }
}

impl<G: IdentityGateway> App<G> {
    /// Wire the services over a persistence facade.
    #[must_use]
    pub fn new(config: AppConfig, persistence: Persistence, gateway: Option<G>) -> Self {
        let session =
            SessionService::new(persistence.clone(), gateway, config.admin.clone());
        Self {
            config,
            session,
            registry: Registry::new(persistence.clone()),
            chats: ChatStore::new(persistence.clone()),
            notifications: NotificationLog::new(persistence),
        }
    }

    /// Log in, then reattach the merchant's store if the registry has one
    /// for this identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the credentials fail validation.
    pub async fn login(&mut self, email: &str, pin: &str) -> Result<Identity> {
        let identity = self.session.login(email, pin).await?.clone();
        if let Some(store) = self.registry.store_for_owner(&identity.id) {
            let store_id = store.id.clone();
            self.session.attach_store(store_id)?;
        }
        self.current()
    }

    /// Create a shopper account and log in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the credentials fail validation.
    pub async fn signup_shopper(&mut self, email: &str, pin: &str) -> Result<Identity> {
        let identity = self.session.signup(email, pin, Role::Shopper).await?;
        Ok(identity.clone())
    }

    /// Complete merchant onboarding: create the account, create the store,
    /// and attach it to the session.
    ///
    /// A short provisioning delay is simulated before the account is
    /// created, matching the configured duration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the credentials fail validation or the
    /// owner already has a store.
    #[instrument(skip_all, fields(business = %form.business_name))]
    pub async fn finalize_merchant_onboarding(&mut self, form: OnboardingForm) -> Result<Store> {
        tokio::time::sleep(self.config.onboarding_delay).await;

        let identity = self
            .session
            .signup(form.email.as_str(), &form.pin, Role::MerchantOwner)
            .await?
            .clone();

        let store = self.registry.create_store(NewStore {
            owner_id: identity.id,
            name: form.business_name,
            store_type: form.store_type,
            city: form.city,
            area: form.area,
            address: form.address,
            phone: form.phone,
            plan: form.plan,
        })?;
        self.session.attach_store(store.id.clone())?;
        info!(store = %store.id, "merchant onboarding complete");
        Ok(store)
    }

    /// Merchant declares the plan payment was made. Records a review
    /// request in the notification log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the store is unknown or not awaiting
    /// payment.
    pub fn submit_verification(&mut self, store_id: &StoreId) -> Result<()> {
        self.registry.submit_verification(store_id)?;
        let name = self
            .registry
            .store(store_id)
            .map_or_else(String::new, |s| s.name.clone());
        self.notifications.push(
            NotificationKind::NewRequest,
            format!("{name} submitted payment verification"),
        );
        Ok(())
    }

    /// Admin approves or rejects a store awaiting review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the store is unknown or not awaiting
    /// review.
    pub fn review_store(&mut self, store_id: &StoreId, decision: ReviewDecision) -> Result<()> {
        self.registry.review(store_id, decision)?;
        Ok(())
    }

    /// The activation notice for a store awaiting payment, or `None` when
    /// the store is past that stage.
    #[must_use]
    pub fn activation_notice(&self, store_id: &StoreId) -> Option<ActivationNotice> {
        let store = self.registry.store(store_id)?;
        if store.approval_status != findkaro_core::ApprovalStatus::PendingPayment {
            return None;
        }
        let plan = store.plan.plan();
        Some(ActivationNotice {
            store_name: store.name.clone(),
            plan_name: plan.name,
            monthly_price: plan.monthly_price,
            payment_id: self.config.support_payment_id.clone(),
        })
    }

    /// The current identity, or an error when logged out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] when there is no session.
    pub fn current(&self) -> Result<Identity> {
        self.session
            .current()
            .cloned()
            .ok_or(AppError::Auth(AuthError::NotLoggedIn))
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}
