//! Rendering seam between the controller and the page
//!
//! The controller never touches the DOM. It calls [`View`] with
//! display-ready values; `dom::DomView` implements it on wasm32 and tests
//! use a recording implementation.
//!
//! # Architecture
//! - `mod.rs`: the trait, the capability descriptor, display models
//! - `html.rs`: HTML fragment templates for chat and portfolio entries

pub mod html;

use crate::config::Profile;
use crate::format::{format_count, format_currency, format_grams};
use crate::quote::{CALCULATION_ERROR, Quote, QuoteDisplay};
use crate::section::{Section, SectionHeader};
use crate::types::{AnalyticsSnapshot, GoldPriceResponse, HoldingRecord};

/// Fixed reply when the chat request fails
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Optional displays wired on the current page
///
/// Built once at startup; the controller skips render calls for
/// displays that are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Header price ticker
    pub price_ticker: bool,
    /// Analytics counters
    pub analytics_panel: bool,
    /// Market price card
    pub market_panel: bool,
    /// Holding card
    pub portfolio_panel: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            price_ticker: true,
            analytics_panel: true,
            market_panel: true,
            portfolio_panel: true,
        }
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

/// One entry in the chat log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Monotonic, assigned by the controller
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Local wall-clock time, `HH:MM`
    pub time: String,
    /// Show the "start investment" button under the message
    pub call_to_action: bool,
}

/// Analytics counters ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsDisplay {
    pub users: String,
    pub transactions: String,
    pub gold_sold: String,
    pub revenue: String,
}

impl AnalyticsDisplay {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot, profile: Profile) -> Self {
        Self {
            users: format_count(snapshot.total_users, profile.grouping()),
            transactions: format_count(snapshot.total_transactions, profile.grouping()),
            gold_sold: format!("{} g", format_grams(snapshot.total_gold_sold_grams)),
            revenue: format_currency(snapshot.total_revenue_inr, profile.symbol(), profile.grouping()),
        }
    }
}

/// Market card contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDisplay {
    pub price: String,
    pub updated: String,
    pub currency: String,
}

impl MarketDisplay {
    pub fn new(price: f64, response: &GoldPriceResponse, profile: Profile) -> Self {
        Self {
            price: price_per_gram(price, profile),
            updated: response.last_updated.clone().unwrap_or_else(|| "just now".to_string()),
            currency: response
                .currency
                .clone()
                .unwrap_or_else(|| profile.as_str().to_ascii_uppercase()),
        }
    }
}

/// Portfolio card contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioDisplay {
    /// No purchase recorded for this session
    Empty,
    Holding {
        transaction_id: String,
        grams: String,
        amount_paid: String,
        price: String,
        purchased: String,
        status: String,
    },
}

impl PortfolioDisplay {
    pub fn from_record(record: &HoldingRecord, profile: Profile) -> Self {
        PortfolioDisplay::Holding {
            transaction_id: record.transaction_id.clone(),
            grams: format!("{} g", format_grams(record.gold_grams)),
            amount_paid: format_currency(record.amount_paid, profile.symbol(), profile.grouping()),
            price: price_per_gram(record.gold_price_per_gram, profile),
            purchased: record.purchase_date.clone().unwrap_or_default(),
            status: record.status.clone().unwrap_or_else(|| "completed".to_string()),
        }
    }
}

/// Success modal contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessDetails {
    pub transaction_id: String,
    pub grams: String,
    pub amount: String,
    pub gst: String,
    pub total: String,
    pub price: String,
}

impl SuccessDetails {
    /// `grams` comes from the backend when it sent one
    ///
    /// Non-finite derived values render as the calculation error text.
    pub fn new(transaction_id: &str, grams: f64, quote: &Quote, profile: Profile) -> Self {
        let money = |value: f64| format_currency(value, profile.symbol(), profile.grouping());
        if !(quote.is_finite() && grams.is_finite()) {
            return Self {
                transaction_id: transaction_id.to_string(),
                grams: CALCULATION_ERROR.to_string(),
                amount: money(quote.amount),
                gst: CALCULATION_ERROR.to_string(),
                total: CALCULATION_ERROR.to_string(),
                price: price_per_gram(quote.price_per_gram, profile),
            };
        }
        Self {
            transaction_id: transaction_id.to_string(),
            grams: format_grams(grams),
            amount: money(quote.amount),
            gst: money(quote.gst),
            total: money(quote.total),
            price: price_per_gram(quote.price_per_gram, profile),
        }
    }
}

/// `₹5,469.25/g`
pub fn price_per_gram(price: f64, profile: Profile) -> String {
    format!("{}/g", format_currency(price, profile.symbol(), profile.grouping()))
}

/// Page surface driven by the controller
pub trait View {
    fn append_message(&mut self, message: &ChatMessage);

    /// Show or remove the typing placeholder
    fn set_typing(&mut self, visible: bool);

    fn clear_composer(&mut self);

    fn render_quote(&mut self, quote: &QuoteDisplay);

    /// Blocking notice
    fn alert(&mut self, text: &str);

    fn set_purchase_modal(&mut self, open: bool);

    fn reset_purchase_form(&mut self);

    fn show_success(&mut self, details: &SuccessDetails);

    fn hide_success(&mut self);

    /// Mark one section visible (all others hidden) and set the header
    fn activate_section(&mut self, section: Section, header: SectionHeader);

    fn render_price(&mut self, price: &str);

    fn render_analytics(&mut self, analytics: &AnalyticsDisplay);

    fn render_market(&mut self, market: &MarketDisplay);

    fn render_portfolio(&mut self, portfolio: &PortfolioDisplay);
}
