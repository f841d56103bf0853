//! Chat & purchase controller - the page's state machine
//!
//! Every page event, timer tick and request completion arrives as a
//! [`Msg`]. [`Controller::update`] applies it to the owned
//! [`ClientState`], renders through the [`View`] and returns the
//! [`Command`]s (remote calls) the runtime should start. The controller
//! itself never awaits, so a slow request never blocks the page.

use chrono::Local;

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::purchase::{PurchaseForm, ValidPurchase};
use crate::quote::{Quote, QuoteDisplay, QuoteState, quote_for_input, sanitize_price};
use crate::section::Section;
use crate::session::SessionId;
use crate::types::{
    AnalyticsSnapshot, ChatRequest, ChatResponse, GoldPriceResponse, HoldingRecord, PurchaseRequest,
    PurchaseResponse,
};
use crate::view::{
    APOLOGY_MESSAGE, AnalyticsDisplay, Capabilities, ChatMessage, MarketDisplay, PortfolioDisplay,
    Sender, SuccessDetails, View, price_per_gram,
};

/// Alerted when the purchase request never got an answer
pub const PURCHASE_UNAVAILABLE: &str =
    "Unable to complete your purchase right now. Please try again.";

/// Alerted when the backend declined without saying why
pub const PURCHASE_DECLINED: &str = "Your purchase could not be completed.";

/// Input to the controller
#[derive(Debug)]
pub enum Msg {
    /// Page loaded
    Init,
    /// Send button or Enter in the composer, with the raw composer text
    SendMessage(String),
    /// Amount field changed
    AmountInput(String),
    /// Purchase modal opened, with the current amount field text
    OpenPurchase { amount: String },
    ClosePurchase,
    SubmitPurchase(PurchaseForm),
    CloseSuccess,
    Navigate(Section),
    RefreshPortfolio,
    /// Background refresh timer fired
    Tick,

    PriceLoaded(Result<GoldPriceResponse>),
    AnalyticsLoaded(Result<AnalyticsSnapshot>),
    ChatReplied(Result<ChatResponse>),
    PurchaseCompleted {
        order: ValidPurchase,
        result: Result<PurchaseResponse>,
    },
    PortfolioLoaded(Result<HoldingRecord>),
}

/// Remote call requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchPrice,
    FetchAnalytics,
    SendChat(ChatRequest),
    SubmitPurchase {
        order: ValidPurchase,
        request: PurchaseRequest,
    },
    FetchHolding(String),
}

/// Mutable state owned by the controller
#[derive(Debug, Clone)]
pub struct ClientState {
    pub session: SessionId,
    /// Always finite and positive
    pub gold_price: f64,
    pub active_section: Section,
    /// Chat requests still waiting for a reply
    pub pending_replies: usize,
    pub analytics: Option<AnalyticsSnapshot>,
    next_message_id: u64,
}

/// The page controller
pub struct Controller<V: View> {
    config: Config,
    capabilities: Capabilities,
    state: ClientState,
    view: V,
}

impl<V: View> Controller<V> {
    /// Create a controller with a fresh session id
    pub fn new(config: Config, capabilities: Capabilities, view: V) -> Self {
        Self::with_session(config, capabilities, view, SessionId::generate())
    }

    pub fn with_session(config: Config, capabilities: Capabilities, view: V, session: SessionId) -> Self {
        let state = ClientState {
            session,
            gold_price: config.fallback_price,
            active_section: Section::Chat,
            pending_replies: 0,
            analytics: None,
            next_message_id: 0,
        };
        Self {
            config,
            capabilities,
            state,
            view,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Apply one message, returning the remote calls to start
    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Init => self.init(),
            Msg::SendMessage(text) => self.send_message(&text),
            Msg::AmountInput(text) => {
                self.refresh_quote(&text);
                vec![]
            }
            Msg::OpenPurchase { amount } => {
                self.view.set_purchase_modal(true);
                self.refresh_quote(&amount);
                vec![]
            }
            Msg::ClosePurchase => {
                self.view.set_purchase_modal(false);
                vec![]
            }
            Msg::SubmitPurchase(form) => self.submit_purchase(&form),
            Msg::CloseSuccess => {
                self.view.hide_success();
                vec![]
            }
            Msg::Navigate(section) => self.navigate(section),
            Msg::RefreshPortfolio => self.refresh_portfolio(),
            Msg::Tick => self.tick(),
            Msg::PriceLoaded(result) => {
                self.price_loaded(result);
                vec![]
            }
            Msg::AnalyticsLoaded(result) => {
                self.analytics_loaded(result);
                vec![]
            }
            Msg::ChatReplied(result) => {
                self.chat_replied(result);
                vec![]
            }
            Msg::PurchaseCompleted { order, result } => self.purchase_completed(&order, result),
            Msg::PortfolioLoaded(result) => {
                self.portfolio_loaded(result);
                vec![]
            }
        }
    }

    fn init(&mut self) -> Vec<Command> {
        log::info!(
            "Session {} started ({} profile, backend {})",
            self.state.session,
            self.config.profile.as_str(),
            self.config.api_base
        );

        let section = self.state.active_section;
        self.view.activate_section(section, section.header());
        self.view.render_quote(&QuoteDisplay::idle(self.config.profile));
        if self.capabilities.price_ticker {
            self.view.render_price(&price_per_gram(self.state.gold_price, self.config.profile));
        }

        vec![Command::FetchPrice, Command::FetchAnalytics]
    }

    fn send_message(&mut self, text: &str) -> Vec<Command> {
        let message = text.trim();
        if message.is_empty() {
            return vec![];
        }

        self.append_message(Sender::User, message.to_string(), false);
        self.view.clear_composer();

        self.state.pending_replies += 1;
        if self.state.pending_replies == 1 {
            self.view.set_typing(true);
        }

        vec![Command::SendChat(ChatRequest {
            message: message.to_string(),
            user_id: self.state.session.to_string(),
        })]
    }

    fn chat_replied(&mut self, result: Result<ChatResponse>) {
        self.state.pending_replies = self.state.pending_replies.saturating_sub(1);
        if self.state.pending_replies == 0 {
            self.view.set_typing(false);
        }

        match result {
            Ok(reply) => self.append_message(Sender::Bot, reply.response, reply.purchase_encouraged),
            Err(e) => {
                log::warn!("Chat request failed: {e}");
                self.append_message(Sender::Bot, APOLOGY_MESSAGE.to_string(), false);
            }
        }
    }

    /// Current price with the fallback guard applied
    fn guarded_price(&mut self) -> f64 {
        let price = sanitize_price(Some(self.state.gold_price), self.config.fallback_price);
        self.state.gold_price = price;
        price
    }

    fn refresh_quote(&mut self, amount_text: &str) {
        let price = self.guarded_price();
        let state = quote_for_input(amount_text, price, self.config.gst_rate);
        if state == QuoteState::Error {
            log::warn!("Quote for '{amount_text}' at {price} is not finite");
        }
        self.view.render_quote(&QuoteDisplay::from_state(&state, self.config.profile));
    }

    fn submit_purchase(&mut self, form: &PurchaseForm) -> Vec<Command> {
        let order = match form.validate(&self.config) {
            Ok(order) => order,
            Err(e) => {
                self.view.alert(&e.to_string());
                return vec![];
            }
        };

        let request = order.to_request(self.state.session.as_str(), &self.config);
        log::info!("Submitting purchase of {} for {}", order.amount, self.state.session);
        vec![Command::SubmitPurchase { order, request }]
    }

    fn purchase_completed(&mut self, order: &ValidPurchase, result: Result<PurchaseResponse>) -> Vec<Command> {
        let response = match result {
            Ok(response) => response,
            Err(ClientError::Api { status, message }) => {
                log::warn!("Purchase rejected with HTTP {status}: {message}");
                self.view.alert(&message);
                return vec![];
            }
            Err(e) => {
                log::warn!("Purchase request failed: {e}");
                self.view.alert(PURCHASE_UNAVAILABLE);
                return vec![];
            }
        };

        if !response.success {
            let message = response.message.unwrap_or_else(|| PURCHASE_DECLINED.to_string());
            self.view.alert(&message);
            return vec![];
        }

        let profile = self.config.profile;
        let price = self.guarded_price();
        let quote = Quote::compute(order.amount, price, self.config.gst_rate);
        let grams = response.gold_grams.unwrap_or(quote.grams);
        let transaction_id = response.transaction_id.unwrap_or_default();
        log::info!("Purchase {transaction_id} completed: {grams:.4} g");

        self.view.set_purchase_modal(false);
        self.view.show_success(&SuccessDetails::new(&transaction_id, grams, &quote, profile));
        self.append_message(
            Sender::Bot,
            format!(
                "🎉 Congratulations, {}! You now own {grams:.4} g of digital gold.\nTransaction ID: {transaction_id}",
                order.name
            ),
            false,
        );
        self.view.reset_purchase_form();
        self.view.render_quote(&QuoteDisplay::idle(profile));

        let mut commands = vec![Command::FetchAnalytics];
        if self.capabilities.portfolio_panel {
            commands.push(Command::FetchHolding(self.state.session.to_string()));
        }
        commands
    }

    fn navigate(&mut self, section: Section) -> Vec<Command> {
        if !self.config.has_section(section) {
            log::warn!("Section '{section}' is not available in the {} profile", self.config.profile.as_str());
            return vec![];
        }

        self.state.active_section = section;
        self.view.activate_section(section, section.header());

        if section == Section::Analytics {
            vec![Command::FetchAnalytics]
        } else {
            vec![]
        }
    }

    fn refresh_portfolio(&mut self) -> Vec<Command> {
        if !self.capabilities.portfolio_panel {
            return vec![];
        }
        vec![Command::FetchHolding(self.state.session.to_string())]
    }

    fn tick(&mut self) -> Vec<Command> {
        let mut commands = vec![Command::FetchPrice];
        if self.state.active_section == Section::Analytics {
            commands.push(Command::FetchAnalytics);
        }
        commands
    }

    fn price_loaded(&mut self, result: Result<GoldPriceResponse>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Gold price refresh failed: {e}");
                self.state.gold_price = self.config.fallback_price;
                return;
            }
        };

        let profile = self.config.profile;
        let raw = response.price_for(profile);
        let price = sanitize_price(raw, self.config.fallback_price);
        if raw != Some(price) {
            log::warn!("Gold price {raw:?} unusable, using fallback {price}");
        }
        self.state.gold_price = price;

        if self.capabilities.price_ticker {
            self.view.render_price(&price_per_gram(price, profile));
        }
        if self.capabilities.market_panel {
            self.view.render_market(&MarketDisplay::new(price, &response, profile));
        }
    }

    fn analytics_loaded(&mut self, result: Result<AnalyticsSnapshot>) {
        match result {
            Ok(snapshot) => {
                if self.capabilities.analytics_panel {
                    self.view
                        .render_analytics(&AnalyticsDisplay::from_snapshot(&snapshot, self.config.profile));
                }
                self.state.analytics = Some(snapshot);
            }
            Err(e) => log::warn!("Analytics refresh failed: {e}"),
        }
    }

    fn portfolio_loaded(&mut self, result: Result<HoldingRecord>) {
        match result {
            Ok(record) => {
                let display = PortfolioDisplay::from_record(&record, self.config.profile);
                self.view.render_portfolio(&display);
            }
            Err(e) if e.status() == Some(404) => self.view.render_portfolio(&PortfolioDisplay::Empty),
            Err(e) => log::warn!("Portfolio refresh failed: {e}"),
        }
    }

    fn append_message(&mut self, sender: Sender, text: String, call_to_action: bool) {
        self.state.next_message_id += 1;
        let message = ChatMessage {
            id: self.state.next_message_id,
            sender,
            text,
            time: Local::now().format("%H:%M").to_string(),
            call_to_action,
        };
        self.view.append_message(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use crate::error::ValidationError;
    use crate::quote::CALCULATION_ERROR;
    use crate::testing::RecordingView;

    fn controller(profile: Profile) -> Controller<RecordingView> {
        Controller::with_session(
            Config::for_profile(profile),
            Capabilities::all(),
            RecordingView::default(),
            SessionId::from_entropy(42),
        )
    }

    fn form(name: &str, email: &str, amount: &str) -> PurchaseForm {
        PurchaseForm {
            name: name.into(),
            email: email.into(),
            amount: amount.into(),
        }
    }

    fn price_response(inr: Option<f64>) -> GoldPriceResponse {
        GoldPriceResponse {
            price_per_gram_inr: inr,
            ..GoldPriceResponse::default()
        }
    }

    #[test]
    fn test_init_fetches_price_and_analytics() {
        let mut c = controller(Profile::Inr);
        let commands = c.update(Msg::Init);
        assert_eq!(commands, vec![Command::FetchPrice, Command::FetchAnalytics]);
        assert_eq!(c.view().visible_sections(), vec![Section::Chat]);
        assert_eq!(c.view().quotes.last(), Some(&QuoteDisplay::idle(Profile::Inr)));
        assert_eq!(c.view().prices.last().map(String::as_str), Some("₹5,469.25/g"));
    }

    #[test]
    fn test_blank_message_is_a_no_op() {
        let mut c = controller(Profile::Inr);
        for text in ["", "   ", "\n\t"] {
            assert!(c.update(Msg::SendMessage(text.into())).is_empty());
        }
        assert!(c.view().messages.is_empty());
        assert!(!c.view().typing);
        assert_eq!(c.view().composer_clears, 0);
    }

    #[test]
    fn test_send_message_flow() {
        let mut c = controller(Profile::Inr);
        let commands = c.update(Msg::SendMessage("  Should I buy gold?  ".into()));
        assert_eq!(
            commands,
            vec![Command::SendChat(ChatRequest {
                message: "Should I buy gold?".into(),
                user_id: "user_610000000".into(),
            })]
        );
        assert_eq!(c.view().messages.len(), 1);
        assert_eq!(c.view().messages[0].sender, Sender::User);
        assert_eq!(c.view().composer_clears, 1);
        assert!(c.view().typing);

        c.update(Msg::ChatReplied(Ok(ChatResponse {
            response: "Gold is a safe haven.".into(),
            purchase_encouraged: true,
            is_gold_related: true,
        })));
        assert!(!c.view().typing);
        let reply = &c.view().messages[1];
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.call_to_action);
        assert!(reply.id > c.view().messages[0].id);
    }

    #[test]
    fn test_chat_failure_appends_one_apology() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::SendMessage("hello".into()));
        c.update(Msg::ChatReplied(Err(ClientError::Http("connection refused".into()))));

        assert!(!c.view().typing);
        let bot: Vec<_> = c.view().messages.iter().filter(|m| m.sender == Sender::Bot).collect();
        assert_eq!(bot.len(), 1);
        assert_eq!(bot[0].text, APOLOGY_MESSAGE);
        assert!(!bot[0].call_to_action);
        assert!(c.view().alerts.is_empty());
    }

    #[test]
    fn test_typing_stays_until_last_reply() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::SendMessage("one".into()));
        c.update(Msg::SendMessage("two".into()));
        c.update(Msg::ChatReplied(Err(ClientError::Http("timeout".into()))));
        assert!(c.view().typing);
        c.update(Msg::ChatReplied(Ok(ChatResponse {
            response: "ok".into(),
            purchase_encouraged: false,
            is_gold_related: false,
        })));
        assert!(!c.view().typing);
        assert_eq!(c.view().messages.len(), 4);
    }

    #[test]
    fn test_quote_on_input() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::AmountInput("5000".into()));
        let quote = c.view().quotes.last().unwrap();
        assert_eq!(quote.gst, "₹150.00");
        assert_eq!(quote.total, "₹5,150.00");
        assert_eq!(quote.grams, "0.9142");

        for text in ["", "abc", "0", "-5"] {
            c.update(Msg::AmountInput(text.into()));
            assert_eq!(c.view().quotes.last(), Some(&QuoteDisplay::idle(Profile::Inr)));
        }

        c.update(Msg::AmountInput("1e309".into()));
        assert_eq!(c.view().quotes.last().unwrap().grams, CALCULATION_ERROR);
    }

    #[test]
    fn test_bad_prices_fall_back() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::PriceLoaded(Ok(price_response(Some(6000.0)))));
        assert!((c.state().gold_price - 6000.0).abs() < f64::EPSILON);

        for bad in [Some(0.0), Some(f64::NAN), Some(-10.0), None] {
            c.update(Msg::PriceLoaded(Ok(price_response(Some(6000.0)))));
            c.update(Msg::PriceLoaded(Ok(price_response(bad))));
            assert!((c.state().gold_price - 5469.25).abs() < f64::EPSILON, "price {bad:?}");
        }

        c.update(Msg::PriceLoaded(Ok(price_response(Some(6000.0)))));
        c.update(Msg::PriceLoaded(Err(ClientError::Http("offline".into()))));
        assert!((c.state().gold_price - 5469.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_failure_keeps_displays() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::PriceLoaded(Ok(price_response(Some(6000.0)))));
        let prices_before = c.view().prices.len();
        c.update(Msg::PriceLoaded(Err(ClientError::Http("offline".into()))));
        assert_eq!(c.view().prices.len(), prices_before);
        assert_eq!(c.view().markets.len(), 1);
    }

    #[test]
    fn test_open_purchase_recomputes_quote() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::PriceLoaded(Ok(price_response(Some(5000.0)))));
        c.update(Msg::OpenPurchase { amount: "10000".into() });
        assert!(c.view().purchase_modal_open);
        assert_eq!(c.view().quotes.last().unwrap().grams, "2.0000");
        c.update(Msg::ClosePurchase);
        assert!(!c.view().purchase_modal_open);
    }

    #[test]
    fn test_purchase_below_minimum_is_blocked() {
        let mut c = controller(Profile::Inr);
        let commands = c.update(Msg::SubmitPurchase(form("Asha", "asha@example.com", "500")));
        assert!(commands.is_empty());
        assert_eq!(c.view().alerts, vec!["Minimum purchase amount is ₹830.00".to_string()]);
    }

    #[test]
    fn test_purchase_validation_alerts() {
        let mut c = controller(Profile::Usd);
        assert!(c.update(Msg::SubmitPurchase(form("", "a@b.c", "10"))).is_empty());
        assert!(c.update(Msg::SubmitPurchase(form("Sam", "", "10"))).is_empty());
        assert!(c.update(Msg::SubmitPurchase(form("Sam", "a@b.c", "zero"))).is_empty());
        assert_eq!(c.view().alerts.len(), 3);

        // No client-side minimum in the USD profile
        let commands = c.update(Msg::SubmitPurchase(form("Sam", "a@b.c", "5")));
        let [Command::SubmitPurchase { request, .. }] = commands.as_slice() else {
            panic!("expected a purchase command, got {commands:?}");
        };
        assert_eq!(request.amount_usd, Some(5.0));
        assert_eq!(request.user_id, "user_610000000");
    }

    #[test]
    fn test_purchase_success() {
        let mut c = controller(Profile::Inr);
        c.update(Msg::OpenPurchase { amount: "5000".into() });
        let commands = c.update(Msg::SubmitPurchase(form("Asha", "asha@example.com", "5000")));
        let [Command::SubmitPurchase { order, .. }] = commands.as_slice() else {
            panic!("expected a purchase command");
        };

        let commands = c.update(Msg::PurchaseCompleted {
            order: order.clone(),
            result: Ok(PurchaseResponse {
                success: true,
                transaction_id: Some("TXN-1A2B3C4D".into()),
                gold_grams: Some(0.9142),
                total_cost: Some(5000.0),
                message: Some("Congratulations!".into()),
            }),
        });

        assert_eq!(
            commands,
            vec![Command::FetchAnalytics, Command::FetchHolding("user_610000000".into())]
        );
        let view = c.view();
        assert!(!view.purchase_modal_open);
        let success = view.success.as_ref().expect("success modal open");
        assert_eq!(success.transaction_id, "TXN-1A2B3C4D");
        assert_eq!(success.gst, "₹150.00");
        assert_eq!(success.total, "₹5,150.00");
        assert_eq!(success.price, "₹5,469.25/g");
        assert_eq!(view.form_resets, 1);
        assert_eq!(view.quotes.last(), Some(&QuoteDisplay::idle(Profile::Inr)));
        let last = view.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("TXN-1A2B3C4D"));

        c.update(Msg::CloseSuccess);
        assert!(c.view().success.is_none());
    }

    #[test]
    fn test_oversized_purchase_never_renders_a_number() {
        let mut c = controller(Profile::Inr);
        assert!(c.update(Msg::SubmitPurchase(form("Asha", "a@b.c", "1.75e308"))).is_empty());
        assert_eq!(c.view().alerts, vec![ValidationError::InvalidAmount.to_string()]);

        c.update(Msg::PurchaseCompleted {
            order: ValidPurchase {
                name: "Asha".into(),
                email: "a@b.c".into(),
                amount: 1.75e308,
            },
            result: Ok(PurchaseResponse {
                success: true,
                transaction_id: Some("TXN-FFFFFFFF".into()),
                gold_grams: None,
                total_cost: None,
                message: None,
            }),
        });
        let success = c.view().success.as_ref().expect("success modal open");
        assert_eq!(success.gst, CALCULATION_ERROR);
        assert_eq!(success.total, CALCULATION_ERROR);
        assert!(!success.total.contains("inf"));
    }

    #[test]
    fn test_purchase_failures_alert() {
        let mut c = controller(Profile::Usd);
        let order = ValidPurchase {
            name: "Sam".into(),
            email: "s@b.c".into(),
            amount: 5.0,
        };

        let commands = c.update(Msg::PurchaseCompleted {
            order: order.clone(),
            result: Err(ClientError::Api {
                status: 400,
                message: "Minimum purchase amount is $10".into(),
            }),
        });
        assert!(commands.is_empty());

        c.update(Msg::PurchaseCompleted {
            order: order.clone(),
            result: Ok(PurchaseResponse {
                success: false,
                transaction_id: None,
                gold_grams: None,
                total_cost: None,
                message: Some("Payment declined".into()),
            }),
        });
        c.update(Msg::PurchaseCompleted {
            order,
            result: Err(ClientError::Http("network down".into())),
        });

        assert_eq!(
            c.view().alerts,
            vec![
                "Minimum purchase amount is $10".to_string(),
                "Payment declined".to_string(),
                PURCHASE_UNAVAILABLE.to_string(),
            ]
        );
        assert!(c.view().success.is_none());
        assert_eq!(c.view().form_resets, 0);
    }

    #[test]
    fn test_navigation() {
        let mut c = controller(Profile::Inr);
        for section in Section::ALL {
            let commands = c.update(Msg::Navigate(section));
            assert_eq!(c.view().visible_sections(), vec![section]);
            assert_eq!(c.view().header, Some(section.header()));
            assert_eq!(c.state().active_section, section);
            let expected = if section == Section::Analytics { vec![Command::FetchAnalytics] } else { vec![] };
            assert_eq!(commands, expected, "section {section}");
        }

        // Re-entering analytics refreshes again
        c.update(Msg::Navigate(Section::Analytics));
        assert_eq!(c.update(Msg::Navigate(Section::Analytics)), vec![Command::FetchAnalytics]);
    }

    #[test]
    fn test_navigation_ignores_unavailable_sections() {
        let mut c = controller(Profile::Usd);
        c.update(Msg::Init);
        assert!(c.update(Msg::Navigate(Section::Portfolio)).is_empty());
        assert_eq!(c.state().active_section, Section::Chat);
        assert_eq!(c.view().visible_sections(), vec![Section::Chat]);
    }

    #[test]
    fn test_tick_refreshes_analytics_only_when_active() {
        let mut c = controller(Profile::Inr);
        assert_eq!(c.update(Msg::Tick), vec![Command::FetchPrice]);
        c.update(Msg::Navigate(Section::Analytics));
        assert_eq!(c.update(Msg::Tick), vec![Command::FetchPrice, Command::FetchAnalytics]);
    }

    #[test]
    fn test_analytics_respects_capabilities() {
        let mut c = Controller::with_session(
            Config::default(),
            Capabilities::default(),
            RecordingView::default(),
            SessionId::from_entropy(1),
        );
        c.update(Msg::AnalyticsLoaded(Ok(AnalyticsSnapshot {
            total_users: 10,
            ..AnalyticsSnapshot::default()
        })));
        c.update(Msg::PriceLoaded(Ok(price_response(Some(6000.0)))));
        assert!(c.view().analytics.is_empty());
        assert!(c.view().prices.is_empty());
        assert!(c.view().markets.is_empty());
        assert_eq!(c.state().analytics.as_ref().map(|a| a.total_users), Some(10));
        assert!(c.update(Msg::RefreshPortfolio).is_empty());
    }

    #[test]
    fn test_portfolio_refresh() {
        let mut c = controller(Profile::Inr);
        assert_eq!(
            c.update(Msg::RefreshPortfolio),
            vec![Command::FetchHolding("user_610000000".into())]
        );

        c.update(Msg::PortfolioLoaded(Err(ClientError::Api {
            status: 404,
            message: "User not found".into(),
        })));
        assert_eq!(c.view().portfolios, vec![PortfolioDisplay::Empty]);

        c.update(Msg::PortfolioLoaded(Err(ClientError::Http("offline".into()))));
        assert_eq!(c.view().portfolios.len(), 1);
    }
}
