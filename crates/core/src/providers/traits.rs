use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::{AssetDetails, SearchResultItem};
use crate::models::price::RawHistoryPoint;

/// Trait abstraction for the tracker backend.
///
/// The view only talks to this trait, so the HTTP implementation can be
/// swapped for a test double. Implementations are plain pass-through:
/// no caching, no retries, no request deduplication.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataClient: Send + Sync {
    /// Human-readable name of this client (for logs).
    fn name(&self) -> &str;

    /// Find assets whose identifier matches `query`.
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, CoreError>;

    /// Get the current market statistics of one asset.
    async fn get_details(&self, asset_id: &str) -> Result<AssetDetails, CoreError>;

    /// Get the trailing `days` of price samples for one asset,
    /// oldest first. Window boundaries are defined by the backend.
    async fn get_history(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<RawHistoryPoint>, CoreError>;
}
