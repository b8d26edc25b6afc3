use serde::{Deserialize, Serialize};

/// One entry of the autocomplete candidate list returned by `/search`.
///
/// The backend forwards extra fields from its upstream coin list; anything
/// beyond `id`, `name` and `symbol` is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Opaque backend-assigned identifier (e.g., "bitcoin", "usd-coin")
    pub id: String,

    /// Human-readable name, used as the option label
    pub name: String,

    /// Ticker symbol as delivered by the backend (case not normalized)
    #[serde(default)]
    pub symbol: String,
}

impl SearchResultItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Snapshot of one asset's current market statistics, as returned by
/// `/crypto/{id}`. All prices are in USD.
///
/// Every statistic is optional: the backend passes through `null` whenever
/// its upstream has no market data for a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetDetails {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,

    // ── Extended statistics ─────────────────────────────────────────
    /// All-time high
    #[serde(default)]
    pub ath: Option<f64>,
    /// All-time low
    #[serde(default)]
    pub atl: Option<f64>,
    /// 24h price change in percent
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    /// 24h trading volume
    #[serde(default)]
    pub volume: Option<f64>,
    /// Upstream timestamp of the snapshot, passed through as-is
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl AssetDetails {
    /// Details with the four core statistics set and no extended fields.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price: f64,
        market_cap: f64,
        high_24h: f64,
        low_24h: f64,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price: Some(price),
            market_cap: Some(market_cap),
            high_24h: Some(high_24h),
            low_24h: Some(low_24h),
            ..Self::default()
        }
    }
}
