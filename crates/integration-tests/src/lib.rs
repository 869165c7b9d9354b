//! Integration tests for FindKaro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p findkaro-integration-tests
//! ```
//!
//! Tests wire a full [`findkaro_app::App`] over an in-memory store, so they
//! exercise the same code paths as the CLI without touching the filesystem
//! or the network. Workflows that span a "restart" rebuild the app over the
//! same persistence facade.

use std::path::PathBuf;
use std::time::Duration;

use findkaro_app::identity::{IdentityGateway, NoRemote};
use findkaro_app::store::{MemoryStore, Persistence};
use findkaro_app::{App, AppConfig};

/// Configuration used by every integration test: no remote identity, no
/// admin bypass, no provisioning delay.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        data_dir: PathBuf::from("."),
        identity: None,
        admin: None,
        onboarding_delay: Duration::ZERO,
        support_payment_id: "03290144760".to_owned(),
    }
}

/// A fresh offline app with its persistence facade, for restart scenarios.
#[must_use]
pub fn offline_app() -> (App<NoRemote>, Persistence) {
    let persistence = Persistence::new(MemoryStore::default());
    let app = App::new(test_config(), persistence.clone(), None);
    (app, persistence)
}

/// Rebuild an offline app over existing persistence, simulating a restart.
#[must_use]
pub fn reopen(persistence: Persistence) -> App<NoRemote> {
    App::new(test_config(), persistence, None)
}

/// Build an app over existing persistence with a custom identity gateway.
#[must_use]
pub fn app_with_gateway<G: IdentityGateway>(persistence: Persistence, gateway: G) -> App<G> {
    App::new(test_config(), persistence, Some(gateway))
}

/// A completed onboarding form for a Karachi grocery store.
///
/// # Panics
///
/// Panics when the fixed inputs fail wizard validation; they never do.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn merchant_form(
    email: &str,
    name: &str,
    area: &str,
    plan: findkaro_core::PlanTier,
) -> findkaro_app::onboarding::OnboardingForm {
    let mut wizard = findkaro_app::onboarding::MerchantOnboarding::new();
    wizard.submit_account(email, "1234", "1234").unwrap();
    wizard.submit_business(name, "Grocery").unwrap();
    wizard.submit_location("Karachi", area, "Shop 1").unwrap();
    wizard.choose_plan(plan).unwrap();
    wizard.finish().unwrap()
}
