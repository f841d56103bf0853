//! Page host configuration
//!
//! Loaded from Worker vars. Everything here ends up as a `data-*`
//! attribute on the page `<body>`, where the browser client reads it.

use worker::Env;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Deployment profile
///
/// Mirrors `gold_client::Profile` by name only. The Worker does not link
/// `gold-client`, whose `#[wasm_bindgen(start)]` entry expects a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Inr,
    Usd,
}

impl Profile {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inr" => Some(Profile::Inr),
            "usd" => Some(Profile::Usd),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Inr => "inr",
            Profile::Usd => "usd",
        }
    }

    /// Whether the portfolio and market sections are rendered
    pub fn has_extended_sections(self) -> bool {
        self == Profile::Inr
    }

    pub fn price_placeholder(self) -> &'static str {
        match self {
            Profile::Inr => "₹--/g",
            Profile::Usd => "$--/g",
        }
    }
}

/// Worker configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub api_base: String,
    pub profile: Profile,
    /// Optional client overrides, passed through verbatim
    pub gst_rate: Option<String>,
    pub min_purchase: Option<String>,
    pub fallback_price: Option<String>,
    pub refresh_interval_seconds: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            profile: Profile::Inr,
            gst_rate: None,
            min_purchase: None,
            fallback_price: None,
            refresh_interval_seconds: None,
        }
    }
}

impl PageConfig {
    /// Load configuration from environment
    pub fn from_env(env: &Env) -> Result<Self, String> {
        Self::from_vars(|key| env.var(key).ok().map(|v| v.to_string()))
    }

    /// Load configuration from a key lookup
    pub fn from_vars<F>(var: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let profile = match set("PROFILE") {
            Some(v) => Profile::parse(&v).ok_or_else(|| format!("unknown profile '{v}'"))?,
            None => Profile::Inr,
        };

        Ok(Self {
            api_base: set("API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            profile,
            gst_rate: set("GST_RATE"),
            min_purchase: set("MIN_PURCHASE"),
            fallback_price: set("FALLBACK_PRICE"),
            refresh_interval_seconds: set("REFRESH_INTERVAL_SECONDS"),
        })
    }

    /// `(attribute, value)` pairs for the page body
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("data-api-base", self.api_base.clone()),
            ("data-profile", self.profile.as_str().to_string()),
        ];
        let optional = [
            ("data-gst-rate", &self.gst_rate),
            ("data-min-purchase", &self.min_purchase),
            ("data-fallback-price", &self.fallback_price),
            ("data-refresh-interval", &self.refresh_interval_seconds),
        ];
        attrs.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.clone().map(|v| (name, v))),
        );
        attrs
    }
}
