//! Test doubles shared by the controller and runtime tests

use std::cell::RefCell;

use crate::client::GoldApi;
use crate::error::{ClientError, Result};
use crate::quote::QuoteDisplay;
use crate::section::{Section, SectionHeader};
use crate::types::{
    AnalyticsSnapshot, ChatRequest, ChatResponse, GoldPriceResponse, HoldingRecord, PurchaseRequest,
    PurchaseResponse,
};
use crate::view::{
    AnalyticsDisplay, ChatMessage, MarketDisplay, PortfolioDisplay, SuccessDetails, View,
};

/// View that records every render call
#[derive(Debug, Default)]
pub struct RecordingView {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
    pub composer_clears: usize,
    pub quotes: Vec<QuoteDisplay>,
    pub alerts: Vec<String>,
    pub purchase_modal_open: bool,
    pub form_resets: usize,
    pub success: Option<SuccessDetails>,
    pub visible: Vec<Section>,
    pub header: Option<SectionHeader>,
    pub prices: Vec<String>,
    pub analytics: Vec<AnalyticsDisplay>,
    pub markets: Vec<MarketDisplay>,
    pub portfolios: Vec<PortfolioDisplay>,
}

impl RecordingView {
    pub fn visible_sections(&self) -> Vec<Section> {
        self.visible.clone()
    }
}

impl View for RecordingView {
    fn append_message(&mut self, message: &ChatMessage) {
        self.messages.push(message.clone());
    }

    fn set_typing(&mut self, visible: bool) {
        self.typing = visible;
    }

    fn clear_composer(&mut self) {
        self.composer_clears += 1;
    }

    fn render_quote(&mut self, quote: &QuoteDisplay) {
        self.quotes.push(quote.clone());
    }

    fn alert(&mut self, text: &str) {
        self.alerts.push(text.to_string());
    }

    fn set_purchase_modal(&mut self, open: bool) {
        self.purchase_modal_open = open;
    }

    fn reset_purchase_form(&mut self) {
        self.form_resets += 1;
    }

    fn show_success(&mut self, details: &SuccessDetails) {
        self.success = Some(details.clone());
    }

    fn hide_success(&mut self) {
        self.success = None;
    }

    fn activate_section(&mut self, section: Section, header: SectionHeader) {
        self.visible.clear();
        self.visible.push(section);
        self.header = Some(header);
    }

    fn render_price(&mut self, price: &str) {
        self.prices.push(price.to_string());
    }

    fn render_analytics(&mut self, analytics: &AnalyticsDisplay) {
        self.analytics.push(analytics.clone());
    }

    fn render_market(&mut self, market: &MarketDisplay) {
        self.markets.push(market.clone());
    }

    fn render_portfolio(&mut self, portfolio: &PortfolioDisplay) {
        self.portfolios.push(portfolio.clone());
    }
}

/// Canned backend
///
/// A `None` outcome fails with a transport error, except `holding`,
/// which answers 404.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub price: Option<f64>,
    pub analytics: Option<AnalyticsSnapshot>,
    pub chat_reply: Option<ChatResponse>,
    /// `Err((status, detail))` answers with a non-2xx
    pub purchase: Option<std::result::Result<PurchaseResponse, (u16, String)>>,
    pub holding: Option<HoldingRecord>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn offline() -> ClientError {
        ClientError::Http("connection refused".into())
    }
}

impl GoldApi for FakeApi {
    async fn gold_price(&self) -> Result<GoldPriceResponse> {
        self.record("gold_price".into());
        let price = self.price.ok_or_else(Self::offline)?;
        Ok(GoldPriceResponse {
            price_per_gram_inr: Some(price),
            price_per_gram_usd: Some(price),
            last_updated: Some("2024-05-01T10:00:00".into()),
            currency: None,
        })
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot> {
        self.record("analytics".into());
        self.analytics.clone().ok_or_else(Self::offline)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.record(format!("chat:{}", request.message));
        self.chat_reply.clone().ok_or_else(Self::offline)
    }

    async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseResponse> {
        let amount = request.amount_inr.or(request.amount_usd).unwrap_or_default();
        self.record(format!("purchase:{amount}"));
        match self.purchase.clone() {
            Some(Ok(response)) => Ok(response),
            Some(Err((status, message))) => Err(ClientError::Api { status, message }),
            None => Err(Self::offline()),
        }
    }

    async fn holding(&self, user_id: &str) -> Result<HoldingRecord> {
        self.record(format!("holding:{user_id}"));
        self.holding.clone().ok_or_else(|| ClientError::Api {
            status: 404,
            message: "User not found".into(),
        })
    }
}
