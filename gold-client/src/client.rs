//! Chatbot backend API client
//!
//! Implements the backend REST surface:
//! - Gold price and platform analytics reads
//! - Chat messages
//! - Purchases and the per-user holding record
//!
//! On wasm32 reqwest runs on the browser's fetch.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::types::{
    AnalyticsSnapshot, ChatRequest, ChatResponse, ErrorBody, GoldPriceResponse, HoldingRecord,
    PurchaseRequest, PurchaseResponse,
};

/// Fallback reason when an error body names none
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// Remote operations the controller depends on
///
/// Futures are not `Send`: everything runs on the page's single thread.
#[allow(async_fn_in_trait)]
pub trait GoldApi {
    async fn gold_price(&self) -> Result<GoldPriceResponse>;

    async fn analytics(&self) -> Result<AnalyticsSnapshot>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseResponse>;

    async fn holding(&self, user_id: &str) -> Result<HoldingRecord>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    /// Create a client for a backend base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform GET request
    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Perform POST request with a JSON body
    async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response, checking for errors
    async fn handle_response<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_reason(&body),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ClientError::from)
    }
}

impl GoldApi for HttpClient {
    async fn gold_price(&self) -> Result<GoldPriceResponse> {
        self.get("/gold-price").await
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot> {
        self.get("/analytics").await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.post("/chat", request).await
    }

    async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseResponse> {
        self.post("/purchase", request).await
    }

    async fn holding(&self, user_id: &str) -> Result<HoldingRecord> {
        self.get(&format!("/users/{user_id}")).await
    }
}

/// Extract the user-facing reason from a non-2xx body
pub fn error_reason(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.reason())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
