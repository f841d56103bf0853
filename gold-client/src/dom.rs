//! Browser binding
//!
//! Wires the page's elements to the runtime: listeners push [`Msg`]s into
//! the event channel and [`DomView`] applies render calls to the DOM.
//! Configuration comes from `data-*` attributes on `<body>`, written by
//! the page host.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, KeyboardEvent, Window};

use crate::client::HttpClient;
use crate::config::Config;
use crate::controller::{Controller, Msg};
use crate::purchase::PurchaseForm;
use crate::quote::QuoteDisplay;
use crate::runtime::{self, EventSender};
use crate::section::{Section, SectionHeader};
use crate::view::html;
use crate::view::{
    AnalyticsDisplay, Capabilities, ChatMessage, MarketDisplay, PortfolioDisplay, SuccessDetails, View,
};

const TYPING_ID: &str = "typingIndicator";

/// Page entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let config = page_config(&window, &document).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let capabilities = detect_capabilities(&document);
    log::info!("Page capabilities: {capabilities:?}");

    let (tx, rx) = runtime::channel();
    bind_events(&window, &document, &tx, &config)?;
    emit(&tx, Msg::Init);

    let api = HttpClient::new(&config.api_base);
    let mut controller = Controller::new(config, capabilities, DomView::new(window, document));
    wasm_bindgen_futures::spawn_local(async move {
        runtime::run(&mut controller, &api, rx).await;
    });

    Ok(())
}

/// Read configuration from the `<body>` dataset
///
/// The backend defaults to the page's own origin.
fn page_config(window: &Window, document: &Document) -> crate::error::Result<Config> {
    let dataset = document.body().map(|body| body.dataset());
    let origin = window.location().origin().ok();

    Config::from_vars(|key| {
        let attr = match key {
            "API_BASE" => "apiBase",
            "PROFILE" => "profile",
            "GST_RATE" => "gstRate",
            "MIN_PURCHASE" => "minPurchase",
            "FALLBACK_PRICE" => "fallbackPrice",
            "REFRESH_INTERVAL_SECONDS" => "refreshInterval",
            _ => return None,
        };
        let value = dataset
            .as_ref()
            .and_then(|data| data.get(attr))
            .filter(|v| !v.trim().is_empty());
        match (key, value) {
            ("API_BASE", None) => origin.clone(),
            (_, value) => value,
        }
    })
}

/// Optional displays present on this page
fn detect_capabilities(document: &Document) -> Capabilities {
    let present = |id: &str| document.get_element_by_id(id).is_some();
    Capabilities {
        price_ticker: present("goldPrice"),
        analytics_panel: present("totalUsers"),
        market_panel: present("marketPrice"),
        portfolio_panel: present("portfolioHoldings"),
    }
}

fn emit(tx: &EventSender, msg: Msg) {
    if tx.unbounded_send(msg).is_err() {
        log::warn!("Controller stopped, dropping page event");
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn input_value(input: Option<&HtmlInputElement>) -> String {
    input.map(HtmlInputElement::value).unwrap_or_default()
}

fn bind_events(window: &Window, document: &Document, tx: &EventSender, config: &Config) -> Result<(), JsValue> {
    let composer = input(document, "messageInput");
    let amount = input(document, "purchaseAmount");

    if let Some(button) = document.get_element_by_id("sendButton") {
        let (tx, composer) = (tx.clone(), composer.clone());
        listen(&button, "click", move |_| {
            emit(&tx, Msg::SendMessage(input_value(composer.as_ref())));
        })?;
    }

    if let Some(field) = &composer {
        let (tx, composer) = (tx.clone(), field.clone());
        listen(field, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.key() == "Enter" && !key.shift_key() {
                event.prevent_default();
                emit(&tx, Msg::SendMessage(composer.value()));
            }
        })?;
    }

    if let Some(field) = &amount {
        let (tx, amount) = (tx.clone(), field.clone());
        listen(field, "input", move |_| emit(&tx, Msg::AmountInput(amount.value())))?;
    }

    let open_purchase = {
        let (tx, amount) = (tx.clone(), amount.clone());
        move |_: Event| {
            emit(&tx, Msg::OpenPurchase {
                amount: input_value(amount.as_ref()),
            });
        }
    };
    if let Some(button) = document.get_element_by_id("openPurchaseButton") {
        listen(&button, "click", open_purchase.clone())?;
    }

    // Call-to-action buttons are created with each bot message
    if let Some(chat) = document.get_element_by_id("chatMessages") {
        listen(&chat, "click", move |event| {
            let hit = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".cta-invest").ok().flatten());
            if hit.is_some() {
                open_purchase(event);
            }
        })?;
    }

    let buttons: [(&str, fn() -> Msg); 3] = [
        ("closePurchaseModal", || Msg::ClosePurchase),
        ("closeSuccessModal", || Msg::CloseSuccess),
        ("refreshPortfolio", || Msg::RefreshPortfolio),
    ];
    for (id, msg) in buttons {
        if let Some(button) = document.get_element_by_id(id) {
            let tx = tx.clone();
            listen(&button, "click", move |_| emit(&tx, msg()))?;
        }
    }

    if let Some(form) = document.get_element_by_id("purchaseForm") {
        let tx = tx.clone();
        let name = input(document, "userName");
        let email = input(document, "userEmail");
        let amount = amount.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            emit(
                &tx,
                Msg::SubmitPurchase(PurchaseForm {
                    name: input_value(name.as_ref()),
                    email: input_value(email.as_ref()),
                    amount: input_value(amount.as_ref()),
                }),
            );
        })?;
    }

    let nav = document.query_selector_all(".nav-item[data-section]")?;
    for i in 0..nav.length() {
        let Some(item) = nav.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(section) = item.get_attribute("data-section").as_deref().and_then(Section::parse) else {
            log::warn!("Ignoring nav item with unknown section");
            continue;
        };
        let tx = tx.clone();
        listen(&item, "click", move |event| {
            event.prevent_default();
            emit(&tx, Msg::Navigate(section));
        })?;
    }

    let tick = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || emit(&tx, Msg::Tick))
    };
    let interval_ms = i32::try_from(config.refresh_interval().as_millis()).unwrap_or(i32::MAX);
    window.set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), interval_ms)?;
    tick.forget();

    Ok(())
}

/// [`View`] over the live document
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_active(&self, id: &str, active: bool) {
        if let Some(el) = self.element(id) {
            if let Err(e) = el.class_list().toggle_with_force("active", active) {
                log::warn!("Failed to toggle #{id}: {e:?}");
            }
        }
    }

    /// Toggle `active` on every match, on for those `is_active` accepts
    fn set_active_where(&self, selector: &str, is_active: impl Fn(&Element) -> bool) {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = el.class_list().toggle_with_force("active", is_active(&el));
            }
        }
    }

    fn scroll_chat(&self, chat: &Element) {
        chat.set_scroll_top(chat.scroll_height());
    }
}

impl View for DomView {
    fn append_message(&mut self, message: &ChatMessage) {
        let Some(chat) = self.element("chatMessages") else {
            return;
        };
        let Ok(node) = self.document.create_element("div") else {
            return;
        };
        node.set_class_name(&html::message_class(message));
        node.set_inner_html(&html::message_body(message));

        // Keep the typing placeholder last
        let typing = self.element(TYPING_ID);
        if let Err(e) = chat.insert_before(&node, typing.as_deref()) {
            log::warn!("Failed to append message: {e:?}");
        }
        self.scroll_chat(&chat);
    }

    fn set_typing(&mut self, visible: bool) {
        let existing = self.element(TYPING_ID);
        match (visible, existing) {
            (true, None) => {
                let (Some(chat), Ok(node)) = (self.element("chatMessages"), self.document.create_element("div"))
                else {
                    return;
                };
                node.set_id(TYPING_ID);
                node.set_class_name("message bot-message typing-indicator");
                node.set_inner_html(html::TYPING_INDICATOR);
                let _ = chat.append_child(&node);
                self.scroll_chat(&chat);
            }
            (false, Some(node)) => node.remove(),
            _ => {}
        }
    }

    fn clear_composer(&mut self) {
        if let Some(field) = input(&self.document, "messageInput") {
            field.set_value("");
            let _ = field.focus();
        }
    }

    fn render_quote(&mut self, quote: &QuoteDisplay) {
        self.set_text("gramsPreview", &quote.grams);
        self.set_text("gstPreview", &quote.gst);
        self.set_text("totalPreview", &quote.total);
    }

    fn alert(&mut self, text: &str) {
        if let Err(e) = self.window.alert_with_message(text) {
            log::warn!("Alert failed: {e:?}");
        }
    }

    fn set_purchase_modal(&mut self, open: bool) {
        self.set_active("purchaseModal", open);
    }

    fn reset_purchase_form(&mut self) {
        if let Some(form) = self
            .element("purchaseForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn show_success(&mut self, details: &SuccessDetails) {
        self.set_text("successTransactionId", &details.transaction_id);
        self.set_text("successGrams", &details.grams);
        self.set_text("successAmount", &details.amount);
        self.set_text("successGst", &details.gst);
        self.set_text("successTotal", &details.total);
        self.set_text("successPrice", &details.price);
        self.set_active("successModal", true);
    }

    fn hide_success(&mut self) {
        self.set_active("successModal", false);
    }

    fn activate_section(&mut self, section: Section, header: SectionHeader) {
        let name = section.as_str();
        self.set_active_where(".nav-item[data-section]", |el| {
            el.get_attribute("data-section").as_deref() == Some(name)
        });
        let panel_id = format!("section-{name}");
        self.set_active_where(".content-section", |el| el.id() == panel_id);
        self.set_text("sectionTitle", header.title);
        self.set_text("sectionSubtitle", header.subtitle);
    }

    fn render_price(&mut self, price: &str) {
        self.set_text("goldPrice", price);
    }

    fn render_analytics(&mut self, analytics: &AnalyticsDisplay) {
        self.set_text("totalUsers", &analytics.users);
        self.set_text("totalTransactions", &analytics.transactions);
        self.set_text("totalGoldSold", &analytics.gold_sold);
        self.set_text("totalRevenue", &analytics.revenue);
    }

    fn render_market(&mut self, market: &MarketDisplay) {
        self.set_text("marketPrice", &market.price);
        self.set_text("marketUpdated", &market.updated);
        self.set_text("marketCurrency", &market.currency);
    }

    fn render_portfolio(&mut self, portfolio: &PortfolioDisplay) {
        if let Some(el) = self.element("portfolioHoldings") {
            el.set_inner_html(&html::portfolio(portfolio));
        }
    }
}

fn init_logging() {
    // Err only when a logger is already set
    let _ = console_log::init_with_level(log::Level::Info);
}
