use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::asset::{AssetDetails, SearchResultItem};
use crate::models::price::RawHistoryPoint;
use crate::models::settings::Settings;
use super::traits::MarketDataClient;

/// HTTP client for the tracker backend.
///
/// - **Endpoints**: `/search?query=`, `/crypto/{id}`, `/crypto/{id}/history?days=`
/// - **Auth**: none.
/// - **Timeouts**: none configured, a hung backend keeps the call pending.
///
/// Non-2xx responses and bodies that don't match the expected shape are
/// returned as errors; nothing is retried.
pub struct HttpBackendClient {
    client: Client,
    base_url: Url,
}

impl HttpBackendClient {
    /// Create a client for the origin configured in `settings`.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        Self::with_base_url(&settings.api_base_url)
    }

    /// Create a client for an explicit backend origin.
    pub fn with_base_url(base_url: &str) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(format!(
                "{base_url}: not usable as a base URL"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    /// Any path already present on the base URL is kept as a prefix.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                CoreError::InvalidUrl(format!("{}: not usable as a base URL", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// GET `url` and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CoreError> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                CoreError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "backend returned an error status");
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "unexpected response body");
            CoreError::from(e)
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataClient for HttpBackendClient {
    fn name(&self) -> &str {
        "HttpBackend"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, CoreError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut().append_pair("query", query);
        self.get_json(url).await
    }

    async fn get_details(&self, asset_id: &str) -> Result<AssetDetails, CoreError> {
        let url = self.endpoint(&["crypto", asset_id])?;
        self.get_json(url).await
    }

    async fn get_history(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<Vec<RawHistoryPoint>, CoreError> {
        let mut url = self.endpoint(&["crypto", asset_id, "history"])?;
        url.query_pairs_mut().append_pair("days", &days.to_string());
        self.get_json(url).await
    }
}
