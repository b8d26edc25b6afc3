use thiserror::Error;

/// Unified error type for the entire crypto-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // ── Payloads ────────────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Rendering ───────────────────────────────────────────────────
    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return CoreError::Api {
                status: status.as_u16(),
                message: e.to_string(),
            };
        }
        if e.is_decode() {
            return CoreError::Deserialization(e.to_string());
        }
        CoreError::Network(e.to_string())
    }
}
