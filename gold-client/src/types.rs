//! Wire types for the chatbot backend
//!
//! Request bodies are serialized exactly as the backend expects them;
//! response types default every optional field so partial payloads
//! still deserialize.

use serde::{Deserialize, Serialize};

use crate::config::Profile;

/// `POST /chat` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

/// `POST /chat` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub purchase_encouraged: bool,
    #[serde(default)]
    pub is_gold_related: bool,
}

/// `POST /purchase` body
///
/// Exactly one of the amount fields is set, depending on the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRequest {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_inr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<f64>,
}

impl PurchaseRequest {
    pub fn new(user_id: &str, user_name: &str, email: &str, amount: f64, profile: Profile) -> Self {
        let (amount_inr, amount_usd) = match profile {
            Profile::Inr => (Some(amount), None),
            Profile::Usd => (None, Some(amount)),
        };
        Self {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            email: email.to_string(),
            amount_inr,
            amount_usd,
        }
    }
}

/// `POST /purchase` 2xx response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub gold_grams: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of a non-2xx response
///
/// FastAPI puts the reason in `detail`, which may be a string or a list
/// of validation problems.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best user-facing reason in the body
    pub fn reason(&self) -> Option<String> {
        let detail = self.detail.as_ref().and_then(|detail| match detail {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(serde_json::Value::as_str)
                .map(String::from),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        });
        detail
            .or_else(|| self.message.clone())
            .filter(|reason| !reason.trim().is_empty())
    }
}

/// `GET /gold-price` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoldPriceResponse {
    #[serde(default)]
    pub price_per_gram_inr: Option<f64>,
    #[serde(default)]
    pub price_per_gram_usd: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl GoldPriceResponse {
    /// Raw price for the profile currency, unchecked
    pub fn price_for(&self, profile: Profile) -> Option<f64> {
        match profile {
            Profile::Inr => self.price_per_gram_inr,
            Profile::Usd => self.price_per_gram_usd,
        }
    }
}

/// `GET /analytics` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_gold_sold_grams: f64,
    #[serde(default, alias = "total_revenue_usd")]
    pub total_revenue_inr: f64,
}

/// `GET /users/{user_id}` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HoldingRecord {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub transaction_id: String,
    pub gold_grams: f64,
    pub amount_paid: f64,
    pub gold_price_per_gram: f64,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
