//! Session commands: login, logout, whoami, signup.

use findkaro_app::onboarding::MerchantOnboarding;
use findkaro_core::PlanTier;

use super::{CliApp, CliResult};

/// Log in with email and PIN.
pub async fn login(app: &mut CliApp, email: &str, pin: &str) -> CliResult {
    let identity = app.login(email, pin).await?;
    println!("Logged in as {} ({})", identity.display_name, identity.role);
    if let Some(store_id) = identity.store_id {
        println!("Store: {store_id}");
    }
    Ok(())
}

/// End the current session.
pub async fn logout(app: &mut CliApp) -> CliResult {
    app.session.logout().await;
    println!("Logged out");
    Ok(())
}

/// Show the current session.
pub fn whoami(app: &CliApp) -> CliResult {
    match app.session.current() {
        Some(identity) => {
            println!("{} <{}>", identity.display_name, identity.email);
            println!("Role: {}", identity.role);
            if let Some(store_id) = &identity.store_id {
                println!("Store: {store_id}");
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

/// Create a shopper account and log in.
pub async fn signup_shopper(app: &mut CliApp, email: &str, pin: &str) -> CliResult {
    let identity = app.signup_shopper(email, pin).await?;
    println!("Welcome, {}", identity.display_name);
    Ok(())
}

/// Walk the merchant onboarding wizard with the supplied answers, then
/// create the account and the store.
#[allow(clippy::too_many_arguments)]
pub async fn signup_merchant(
    app: &mut CliApp,
    email: &str,
    pin: &str,
    name: &str,
    store_type: &str,
    city: &str,
    area: &str,
    address: &str,
    plan: PlanTier,
    phone: Option<&str>,
) -> CliResult {
    let mut wizard = MerchantOnboarding::new();
    wizard.submit_account(email, pin, pin)?;
    wizard.submit_business(name, store_type)?;
    wizard.submit_location(city, area, address)?;
    wizard.choose_plan(plan)?;
    if let Some(phone) = phone {
        wizard.set_phone(phone);
    }

    let store = app.finalize_merchant_onboarding(wizard.finish()?).await?;
    println!("Store {} created ({})", store.name, store.id);
    println!("Status: {}", store.approval_status);

    if let Some(notice) = app.activation_notice(&store.id) {
        println!();
        println!(
            "To activate the {} plan (PKR {}/month), send payment to {} and run `findkaro billing submit`.",
            notice.plan_name, notice.monthly_price, notice.payment_id
        );
    }
    Ok(())
}
