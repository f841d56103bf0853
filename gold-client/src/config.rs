//! Configuration management for the client
//!
//! One controller serves both storefronts; the currency [`Profile`]
//! decides which price field is read, how amounts are posted, whether a
//! purchase minimum applies and which sections exist.

use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::format::Grouping;
use crate::section::Section;

/// Default backend when the page does not name one
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Currency/locale feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Primary storefront: rupees, purchase minimum, all four sections
    Inr,
    /// Simple storefront: dollars, no client-side minimum, chat + analytics
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

    pub fn symbol(self) -> &'static str {
        match self {
            Profile::Inr => "₹",
            Profile::Usd => "$",
        }
    }

    pub fn grouping(self) -> Grouping {
        match self {
            Profile::Inr => Grouping::Indian,
            Profile::Usd => Grouping::Western,
        }
    }

    /// Price used until the backend answers (or whenever it answers nonsense)
    pub fn default_fallback_price(self) -> f64 {
        match self {
            Profile::Inr => 5469.25,
            Profile::Usd => 65.50,
        }
    }

    pub fn default_min_purchase(self) -> Option<f64> {
        match self {
            Profile::Inr => Some(830.0),
            Profile::Usd => None,
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            Profile::Inr => &[Section::Chat, Section::Analytics, Section::Portfolio, Section::Market],
            Profile::Usd => &[Section::Chat, Section::Analytics],
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, no trailing slash
    pub api_base: String,

    pub profile: Profile,

    /// GST as a fraction (0.03 = 3%)
    pub gst_rate: f64,

    /// Smallest amount accepted before a purchase request is sent
    pub min_purchase: Option<f64>,

    pub fallback_price: f64,

    pub refresh_interval_seconds: u64,
}

impl Config {
    /// Defaults for a profile
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            profile,
            gst_rate: 0.03,
            min_purchase: profile.default_min_purchase(),
            fallback_price: profile.default_fallback_price(),
            refresh_interval_seconds: 30,
        }
    }

    /// Load configuration from a key lookup
    ///
    /// Unparseable or non-finite values fall back to the profile default.
    /// Only `MIN_PURCHASE=0` disables the minimum.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match var("PROFILE") {
            Some(v) => Profile::parse(&v)
                .ok_or_else(|| ClientError::Config(format!("unknown profile '{v}'")))?,
            None => Profile::Inr,
        };
        let defaults = Self::for_profile(profile);

        let config = Self {
            api_base: var("API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),

            profile,

            gst_rate: var("GST_RATE")
                .map(|v| v.trim().parse().unwrap_or(defaults.gst_rate))
                .unwrap_or(defaults.gst_rate),

            min_purchase: var("MIN_PURCHASE")
                .map(|v| match v.trim().parse::<f64>() {
                    Ok(min) if min == 0.0 => None,
                    Ok(min) if min.is_finite() => Some(min),
                    _ => defaults.min_purchase,
                })
                .unwrap_or(defaults.min_purchase),

            fallback_price: var("FALLBACK_PRICE")
                .map(|v| v.trim().parse().unwrap_or(defaults.fallback_price))
                .unwrap_or(defaults.fallback_price),

            refresh_interval_seconds: var("REFRESH_INTERVAL_SECONDS")
                .map(|v| v.trim().parse().unwrap_or(defaults.refresh_interval_seconds))
                .unwrap_or(defaults.refresh_interval_seconds),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(ClientError::Config("api_base must not be empty".into()));
        }
        if !(self.fallback_price.is_finite() && self.fallback_price > 0.0) {
            return Err(ClientError::Config("fallback_price must be a positive number".into()));
        }
        if !(0.0..1.0).contains(&self.gst_rate) {
            return Err(ClientError::Config("gst_rate must be in [0, 1)".into()));
        }
        if let Some(min) = self.min_purchase {
            if !(min.is_finite() && min > 0.0) {
                return Err(ClientError::Config("min_purchase must be a positive number".into()));
            }
        }
        if self.refresh_interval_seconds == 0 {
            return Err(ClientError::Config("refresh_interval_seconds must be positive".into()));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.profile.sections().contains(&section)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_profile(Profile::Inr)
    }
}
