// ---------------------------------------------------------------------------
// Process configuration
// ---------------------------------------------------------------------------

/// Ticker the dashboard reports on.
pub const SYMBOL: &str = "AAPL";

/// Reporting period requested from the provider.
pub const PERIOD: &str = "annual";

pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

const API_KEY_VAR: &str = "FMP_API_KEY";
const BASE_URL_VAR: &str = "FMP_BASE_URL";

/// Settings read once at startup and handed to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Read `FMP_API_KEY` and the optional `FMP_BASE_URL` override.
    ///
    /// A missing key is not fatal: the request goes out without one and the
    /// provider's rejection is handled like any other load failure.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        if api_key.trim().is_empty() {
            log::warn!("{API_KEY_VAR} is not set; the statement request will be rejected");
        }
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint for the annual income statements of [`SYMBOL`], without the
    /// query string.
    pub fn statements_url(&self) -> String {
        format!("{}/income-statement/{SYMBOL}", self.base_url)
    }
}
