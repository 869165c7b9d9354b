//! Merchant onboarding wizard.
//!
//! Collects everything needed to create a merchant account and its store,
//! one step at a time, validating each step before advancing. Nothing is
//! persisted until the finished form is handed to the application to create
//! the account and the store in one go.

use rand::Rng;

use findkaro_core::{Email, EmailError, PlanTier};

use crate::catalog;

/// Minimum accepted PIN length.
const MIN_PIN_LEN: usize = 2;

/// Validation failures raised by wizard steps.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The email failed validation.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    /// The PIN is shorter than the minimum.
    #[error("PIN must be at least {MIN_PIN_LEN} characters")]
    PinTooShort,
    /// The PIN and its confirmation differ.
    #[error("PINs do not match")]
    PinMismatch,
    /// The business name is empty.
    #[error("business name is required")]
    MissingBusinessName,
    /// A required location field is empty.
    #[error("location is incomplete: {0}")]
    MissingLocation(&'static str),
    /// The city is not in the reference table.
    #[error("unknown city: {0}")]
    UnknownCity(String),
    /// The area does not belong to the chosen city.
    #[error("area {area} is not in {city}")]
    AreaNotInCity {
        /// Area the merchant entered.
        area: String,
        /// City the merchant chose.
        city: String,
    },
    /// A later step was submitted before an earlier one.
    #[error("complete the {0} step first")]
    Incomplete(&'static str),
}

/// Which step the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Email, PIN and PIN confirmation.
    Account,
    /// Business name and store type.
    Business,
    /// City, area and street address.
    Location,
    /// Subscription tier.
    Plan,
    /// Everything collected; ready to launch.
    ReadyToLaunch,
}

/// The validated, completed form produced by [`MerchantOnboarding::finish`].
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub email: Email,
    pub pin: String,
    pub business_name: String,
    pub store_type: String,
    pub city: String,
    pub area: String,
    pub address: String,
    pub phone: String,
    pub plan: PlanTier,
}

/// State of an in-progress merchant onboarding.
#[derive(Debug, Clone, Default)]
pub struct MerchantOnboarding {
    account: Option<(Email, String)>,
    business: Option<(String, String)>,
    location: Option<(String, String, String)>,
    phone: Option<String>,
    plan: Option<PlanTier>,
}

impl MerchantOnboarding {
    /// Start a fresh wizard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The step the wizard currently expects.
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        match (&self.account, &self.business, &self.location, &self.plan) {
            (None, ..) => OnboardingStep::Account,
            (Some(_), None, ..) => OnboardingStep::Business,
            (Some(_), Some(_), None, _) => OnboardingStep::Location,
            (Some(_), Some(_), Some(_), None) => OnboardingStep::Plan,
            (Some(_), Some(_), Some(_), Some(_)) => OnboardingStep::ReadyToLaunch,
        }
    }

    /// Step 1: account credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a malformed email, a short PIN, or a
    /// mismatched confirmation.
    pub fn submit_account(
        &mut self,
        email: &str,
        pin: &str,
        confirm_pin: &str,
    ) -> Result<(), ValidationError> {
        let email = Email::parse(email)?;
        if pin.len() < MIN_PIN_LEN {
            return Err(ValidationError::PinTooShort);
        }
        if pin != confirm_pin {
            return Err(ValidationError::PinMismatch);
        }
        self.account = Some((email, pin.to_owned()));
        Ok(())
    }

    /// Step 2: business name and store type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBusinessName`] for a blank name.
    pub fn submit_business(&mut self, name: &str, store_type: &str) -> Result<(), ValidationError> {
        if self.account.is_none() {
            return Err(ValidationError::Incomplete("account"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingBusinessName);
        }
        self.business = Some((name.to_owned(), store_type.trim().to_owned()));
        Ok(())
    }

    /// Step 3: location, validated against the city reference table.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a field is blank, the city is
    /// unknown, or the area does not belong to the city.
    pub fn submit_location(
        &mut self,
        city: &str,
        area: &str,
        address: &str,
    ) -> Result<(), ValidationError> {
        if self.business.is_none() {
            return Err(ValidationError::Incomplete("business"));
        }
        let (city, area, address) = (city.trim(), area.trim(), address.trim());
        if city.is_empty() {
            return Err(ValidationError::MissingLocation("city"));
        }
        if area.is_empty() {
            return Err(ValidationError::MissingLocation("area"));
        }
        if address.is_empty() {
            return Err(ValidationError::MissingLocation("address"));
        }
        let areas = catalog::areas_for(city)
            .ok_or_else(|| ValidationError::UnknownCity(city.to_owned()))?;
        if !areas.iter().any(|a| a.eq_ignore_ascii_case(area)) {
            return Err(ValidationError::AreaNotInCity {
                area: area.to_owned(),
                city: city.to_owned(),
            });
        }
        self.location = Some((city.to_owned(), area.to_owned(), address.to_owned()));
        Ok(())
    }

    /// Step 4: subscription tier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Incomplete`] when earlier steps are
    /// unfinished.
    pub fn choose_plan(&mut self, plan: PlanTier) -> Result<(), ValidationError> {
        if self.location.is_none() {
            return Err(ValidationError::Incomplete("location"));
        }
        self.plan = Some(plan);
        Ok(())
    }

    /// Override the generated contact phone.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
    }

    /// Consume the wizard, yielding the completed form.
    ///
    /// A contact phone is generated when none was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Incomplete`] when any step is unfinished.
    pub fn finish(self) -> Result<OnboardingForm, ValidationError> {
        let (email, pin) = self.account.ok_or(ValidationError::Incomplete("account"))?;
        let (business_name, store_type) =
            self.business.ok_or(ValidationError::Incomplete("business"))?;
        let (city, area, address) =
            self.location.ok_or(ValidationError::Incomplete("location"))?;
        let plan = self.plan.ok_or(ValidationError::Incomplete("plan"))?;
        Ok(OnboardingForm {
            email,
            pin,
            business_name,
            store_type,
            city,
            area,
            address,
            phone: self.phone.unwrap_or_else(generate_phone),
            plan,
        })
    }
}

/// Generate a plausible local mobile number (03 plus nine digits).
#[must_use]
pub fn generate_phone() -> String {
    let mut rng = rand::rng();
    let digits: String = (0..9)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    format!("03{digits}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn through_location() -> MerchantOnboarding {
        let mut wizard = MerchantOnboarding::new();
        wizard
            .submit_account("merchant@example.com", "1234", "1234")
            .unwrap();
        wizard.submit_business("Madina Mart", "Grocery").unwrap();
        wizard
            .submit_location("Karachi", "Clifton", "Shop 4, Block 2")
            .unwrap();
        wizard
    }

    #[test]
    fn test_steps_advance_in_order() {
        let mut wizard = MerchantOnboarding::new();
        assert_eq!(wizard.step(), OnboardingStep::Account);

        wizard
            .submit_account("merchant@example.com", "1234", "1234")
            .unwrap();
        assert_eq!(wizard.step(), OnboardingStep::Business);

        wizard.submit_business("Madina Mart", "Grocery").unwrap();
        assert_eq!(wizard.step(), OnboardingStep::Location);

        wizard
            .submit_location("Karachi", "Clifton", "Shop 4")
            .unwrap();
        assert_eq!(wizard.step(), OnboardingStep::Plan);

        wizard.choose_plan(PlanTier::Free).unwrap();
        assert_eq!(wizard.step(), OnboardingStep::ReadyToLaunch);
    }

    #[test]
    fn test_account_validation() {
        let mut wizard = MerchantOnboarding::new();
        assert!(matches!(
            wizard.submit_account("bad-email", "1234", "1234"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            wizard.submit_account("a@b.c", "1", "1"),
            Err(ValidationError::PinTooShort)
        ));
        assert!(matches!(
            wizard.submit_account("a@b.c", "1234", "4321"),
            Err(ValidationError::PinMismatch)
        ));
    }

    #[test]
    fn test_business_name_required() {
        let mut wizard = MerchantOnboarding::new();
        wizard.submit_account("a@b.c", "1234", "1234").unwrap();
        assert!(matches!(
            wizard.submit_business("   ", "Grocery"),
            Err(ValidationError::MissingBusinessName)
        ));
    }

    #[test]
    fn test_location_validated_against_reference_table() {
        let mut wizard = MerchantOnboarding::new();
        wizard.submit_account("a@b.c", "1234", "1234").unwrap();
        wizard.submit_business("Madina Mart", "Grocery").unwrap();

        assert!(matches!(
            wizard.submit_location("Atlantis", "Downtown", "Shop 1"),
            Err(ValidationError::UnknownCity(_))
        ));
        assert!(matches!(
            wizard.submit_location("Karachi", "Gulberg", "Shop 1"),
            Err(ValidationError::AreaNotInCity { .. })
        ));
        assert!(matches!(
            wizard.submit_location("Karachi", "Clifton", ""),
            Err(ValidationError::MissingLocation("address"))
        ));
        assert!(wizard.submit_location("karachi", "clifton", "Shop 1").is_ok());
    }

    #[test]
    fn test_out_of_order_steps_rejected() {
        let mut wizard = MerchantOnboarding::new();
        assert!(matches!(
            wizard.submit_business("Madina Mart", "Grocery"),
            Err(ValidationError::Incomplete("account"))
        ));
        assert!(matches!(
            wizard.choose_plan(PlanTier::Free),
            Err(ValidationError::Incomplete("location"))
        ));
        assert!(matches!(
            wizard.finish(),
            Err(ValidationError::Incomplete("account"))
        ));
    }

    #[test]
    fn test_finish_produces_complete_form() {
        let mut wizard = through_location();
        wizard.choose_plan(PlanTier::Pro).unwrap();
        let form = wizard.finish().unwrap();

        assert_eq!(form.email.as_str(), "merchant@example.com");
        assert_eq!(form.business_name, "Madina Mart");
        assert_eq!(form.city, "Karachi");
        assert_eq!(form.plan, PlanTier::Pro);
        assert!(form.phone.starts_with("03"));
        assert_eq!(form.phone.len(), 11);
    }

    #[test]
    fn test_supplied_phone_is_kept() {
        let mut wizard = through_location();
        wizard.choose_plan(PlanTier::Free).unwrap();
        wizard.set_phone("03001234567");
        assert_eq!(wizard.finish().unwrap().phone, "03001234567");
    }

    #[test]
    fn test_generated_phone_shape() {
        for _ in 0..10 {
            let phone = generate_phone();
            assert_eq!(phone.len(), 11);
            assert!(phone.starts_with("03"));
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
