//! Purchase quote computation
//!
//! Pure functions only. The controller feeds them the raw amount text
//! and the stored price on every input event and renders the result.

use crate::config::Profile;
use crate::format::{format_currency, format_grams};

/// Shown in the grams field when arithmetic produced NaN or infinity
pub const CALCULATION_ERROR: &str = "Calculation error";

/// GST, total and grams for one amount at one price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub amount: f64,
    pub gst: f64,
    pub total: f64,
    pub grams: f64,
    pub price_per_gram: f64,
}

impl Quote {
    /// Compute without any input checks
    pub fn compute(amount: f64, price_per_gram: f64, gst_rate: f64) -> Self {
        let gst = amount * gst_rate;
        Self {
            amount,
            gst,
            total: amount + gst,
            grams: amount / price_per_gram,
            price_per_gram,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.gst.is_finite() && self.total.is_finite() && self.grams.is_finite()
    }
}

/// What the three quote fields should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuoteState {
    /// No usable amount entered
    Idle,
    Ready(Quote),
    /// Derived values were not finite
    Error,
}

/// Rendered quote fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDisplay {
    pub grams: String,
    pub gst: String,
    pub total: String,
}

impl QuoteDisplay {
    pub fn idle(profile: Profile) -> Self {
        let zero = format_currency(0.0, profile.symbol(), profile.grouping());
        Self {
            grams: format_grams(0.0),
            gst: zero.clone(),
            total: zero,
        }
    }

    pub fn from_state(state: &QuoteState, profile: Profile) -> Self {
        match state {
            QuoteState::Idle => Self::idle(profile),
            QuoteState::Error => Self {
                grams: CALCULATION_ERROR.to_string(),
                ..Self::idle(profile)
            },
            QuoteState::Ready(quote) => Self {
                grams: format_grams(quote.grams),
                gst: format_currency(quote.gst, profile.symbol(), profile.grouping()),
                total: format_currency(quote.total, profile.symbol(), profile.grouping()),
            },
        }
    }
}

/// Replace a missing, non-positive or NaN price with the fallback
pub fn sanitize_price(price: Option<f64>, fallback: f64) -> f64 {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => p,
        _ => fallback,
    }
}

/// Parse the amount field; `None` means the idle state
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if !amount.is_nan() && amount > 0.0 => Some(amount),
        _ => None,
    }
}

/// Full quote pipeline for one input event
pub fn quote_for_input(amount_text: &str, price_per_gram: f64, gst_rate: f64) -> QuoteState {
    let Some(amount) = parse_amount(amount_text) else {
        return QuoteState::Idle;
    };

    let quote = Quote::compute(amount, price_per_gram, gst_rate);
    if quote.is_finite() {
        QuoteState::Ready(quote)
    } else {
        QuoteState::Error
    }
}
