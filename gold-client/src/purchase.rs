//! Purchase form validation
//!
//! Runs before any request is built. The first failing check wins.

use crate::config::Config;
use crate::error::ValidationError;
use crate::format::format_currency;
use crate::quote::Quote;
use crate::types::PurchaseRequest;

/// Raw purchase form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseForm {
    pub name: String,
    pub email: String,
    pub amount: String,
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPurchase {
    pub name: String,
    pub email: String,
    pub amount: f64,
}

impl ValidPurchase {
    pub fn to_request(&self, user_id: &str, config: &Config) -> PurchaseRequest {
        PurchaseRequest::new(user_id, &self.name, &self.email, self.amount, config.profile)
    }
}

impl PurchaseForm {
    /// Check required fields, amount and the profile minimum
    pub fn validate(&self, config: &Config) -> Result<ValidPurchase, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        let amount = match self.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(ValidationError::InvalidAmount),
        };
        // GST and total must stay representable
        if !Quote::compute(amount, config.fallback_price, config.gst_rate).is_finite() {
            return Err(ValidationError::InvalidAmount);
        }

        if let Some(min) = config.min_purchase {
            if amount < min {
                let profile = config.profile;
                return Err(ValidationError::BelowMinimum(format_currency(
                    min,
                    profile.symbol(),
                    profile.grouping(),
                )));
            }
        }

        Ok(ValidPurchase {
            name: name.to_string(),
            email: email.to_string(),
            amount,
        })
    }
}
