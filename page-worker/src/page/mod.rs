//! Page shell - gold chat web interface
//!
//! Static markup the wasm client binds to. Separated into HTML and CSS
//! submodules; behaviour lives entirely in the `gold-client` package
//! loaded by the module script.
//!
//! # Architecture
//! - `html.rs`: header, navigation, sections, modals
//! - `css.rs`: styling with CSS custom properties

mod css;
mod html;

use crate::config::PageConfig;

/// Module loader for the wasm-pack output served from `/pkg`
const LOADER: &str = r"import init from '/pkg/gold_client.js';
init();";

/// Escape text for element content and quoted attribute values
///
/// Same rules as the client's chat templates.
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

/// Generate the complete page HTML
pub fn page_html(config: &PageConfig) -> String {
    let attrs: String = config
        .data_attributes()
        .into_iter()
        .map(|(name, value)| format!(r#" {name}="{}""#, escape(&value)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Gold Investment Assistant</title>
    <style>
{css}
    </style>
</head>
<body{attrs}>
{html}
    <script type="module">
{loader}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::template(config.profile),
        loader = LOADER
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    fn page(profile: Profile) -> String {
        page_html(&PageConfig {
            profile,
            ..PageConfig::default()
        })
    }

    #[test]
    fn test_body_carries_config() {
        let html = page(Profile::Inr);
        assert!(html.contains(r#"<body data-api-base="http://localhost:8000" data-profile="inr">"#));
        assert!(html.contains("/pkg/gold_client.js"));
    }

    #[test]
    fn test_attributes_are_escaped() {
        let html = page_html(&PageConfig {
            api_base: r#"https://x.example"><script>alert(1)</script>"#.into(),
            ..PageConfig::default()
        });
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_escape_covers_quotes_and_markup() {
        assert_eq!(escape(r#"<a href='x'>"Tom & Jerry"</a>"#), "&lt;a href=&#39;x&#39;&gt;&quot;Tom &amp; Jerry&quot;&lt;/a&gt;");
        assert_eq!(escape("₹5,469.25"), "₹5,469.25");
    }

    #[test]
    fn test_client_bound_ids_present() {
        let html = page(Profile::Inr);
        for id in [
            "chatMessages",
            "messageInput",
            "sendButton",
            "sectionTitle",
            "sectionSubtitle",
            "goldPrice",
            "purchaseModal",
            "purchaseForm",
            "userName",
            "userEmail",
            "purchaseAmount",
            "gramsPreview",
            "gstPreview",
            "totalPreview",
            "openPurchaseButton",
            "closePurchaseModal",
            "successModal",
            "successTransactionId",
            "successGrams",
            "successAmount",
            "successGst",
            "successTotal",
            "successPrice",
            "closeSuccessModal",
            "totalUsers",
            "totalTransactions",
            "totalGoldSold",
            "totalRevenue",
            "portfolioHoldings",
            "refreshPortfolio",
            "marketPrice",
            "marketUpdated",
            "marketCurrency",
        ] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
    }

    #[test]
    fn test_sections_follow_profile() {
        let inr = page(Profile::Inr);
        for section in ["chat", "analytics", "portfolio", "market"] {
            assert!(inr.contains(&format!(r#"id="section-{section}""#)));
            assert!(inr.contains(&format!(r#"data-section="{section}""#)));
        }

        let usd = page(Profile::Usd);
        assert!(usd.contains(r#"id="section-analytics""#));
        assert!(!usd.contains(r#"id="section-portfolio""#));
        assert!(!usd.contains(r#"data-section="market""#));
        assert!(usd.contains("$--/g"));
    }

    #[test]
    fn test_exactly_one_active_section() {
        let html = page(Profile::Inr);
        assert_eq!(html.matches(r#"class="content-section active""#).count(), 1);
        assert!(html.contains(r#"<section class="content-section active" id="section-chat">"#));
    }
}
