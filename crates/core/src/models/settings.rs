use serde::{Deserialize, Serialize};

/// Backend origin used when no override was supplied at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Date shape of the browser's en-US `toLocaleDateString()` (e.g. "11/14/2023").
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Number of trailing days requested for the price chart. Not user-configurable.
pub const HISTORY_WINDOW_DAYS: u32 = 7;

/// Shortest query (in characters) that triggers a backend search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Client configuration, fixed when the binary is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Origin of the tracker backend, without a trailing path (e.g., "http://127.0.0.1:5000").
    /// Set `CRYPTO_TRACKER_API_URL` while compiling to change the default.
    pub api_base_url: String,

    /// chrono strftime pattern used to label history points.
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CRYPTO_TRACKER_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}
