//! HTML fragment templates
//!
//! Everything user- or backend-supplied is escaped before it lands in
//! markup; newlines in message text become `<br>`.

use super::{ChatMessage, PortfolioDisplay, Sender};

/// Escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of a chat message node
pub fn message_body(message: &ChatMessage) -> String {
    let text = escape(&message.text).replace('\n', "<br>");
    let avatar = match message.sender {
        Sender::User => "👤",
        Sender::Bot => "🤖",
    };
    let cta = if message.call_to_action {
        r#"
        <button type="button" class="cta-invest">💰 Start Investment</button>"#
    } else {
        ""
    };

    format!(
        r#"<div class="message-avatar">{avatar}</div>
    <div class="message-bubble">
        <div class="message-content">{text}</div>{cta}
        <div class="message-time">{time}</div>
    </div>"#,
        time = escape(&message.time),
    )
}

/// Class list of a chat message node
pub fn message_class(message: &ChatMessage) -> String {
    format!("message {}", message.sender.css_class())
}

pub const TYPING_INDICATOR: &str = r#"<div class="message-avatar">🤖</div>
    <div class="message-bubble typing">
        <span class="dot"></span><span class="dot"></span><span class="dot"></span>
    </div>"#;

/// Portfolio card markup
pub fn portfolio(display: &PortfolioDisplay) -> String {
    match display {
        PortfolioDisplay::Empty => {
            r#"<div class="empty-state">No holdings yet. Start a purchase from the chat.</div>"#.to_string()
        }
        PortfolioDisplay::Holding {
            transaction_id,
            grams,
            amount_paid,
            price,
            purchased,
            status,
        } => format!(
            r#"<div class="holding">
    <div class="holding-grams">{grams}</div>
    <div class="holding-row"><span>Invested</span><span>{amount_paid}</span></div>
    <div class="holding-row"><span>Price</span><span>{price}</span></div>
    <div class="holding-row"><span>Purchased</span><span>{purchased}</span></div>
    <div class="holding-row"><span>Transaction</span><span>{transaction_id}</span></div>
    <div class="holding-status">{status}</div>
</div>"#,
            grams = escape(grams),
            amount_paid = escape(amount_paid),
            price = escape(price),
            purchased = escape(purchased),
            transaction_id = escape(transaction_id),
            status = escape(status),
        ),
    }
}
