use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::settings::{Settings, HISTORY_WINDOW_DAYS, MIN_QUERY_CHARS};
use crate::providers::traits::MarketDataClient;
use crate::services::chart_service::ChartService;

use super::render::{render, Screen};
use super::state::{
    TrackerState, MSG_DETAILS_FAILED, MSG_EMPTY_QUERY, MSG_NO_RESULTS, MSG_SEARCH_FAILED,
};

/// The tracker screen: owns the UI state and drives the backend client.
///
/// Handlers take `&self`, so a new action can start while an earlier one
/// is still waiting on the network. Nothing is cancelled: each handler
/// writes its outcome when its response arrives, and the last write wins.
/// The state lock is never held across an `.await`.
pub struct TrackerView<C: MarketDataClient> {
    client: C,
    chart_service: ChartService,
    state: Mutex<TrackerState>,
}

impl<C: MarketDataClient> std::fmt::Debug for TrackerView<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("TrackerView")
            .field("client", &self.client.name())
            .field("query", &state.query)
            .field("results", &state.results.len())
            .field("selected", &state.selected.as_ref().map(|s| &s.name))
            .field("loading", &state.loading)
            .finish()
    }
}

impl<C: MarketDataClient> TrackerView<C> {
    pub fn new(client: C, settings: &Settings) -> Self {
        Self {
            client,
            chart_service: ChartService::new(settings.date_format.clone()),
            state: Mutex::new(TrackerState::new()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.lock().clone()
    }

    /// Derive the screen from the current state.
    #[must_use]
    pub fn screen(&self) -> Screen {
        render(&self.lock(), &self.chart_service)
    }

    /// Render the details card chart as SVG, or `None` when no asset is selected.
    pub fn chart_svg(&self, size: (u32, u32)) -> Result<Option<String>, CoreError> {
        match self.screen().card {
            Some(card) => self.chart_service.render_svg(&card.chart, size).map(Some),
            None => Ok(None),
        }
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// The search box changed.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] only clear the candidate
    /// list and never reach the backend; longer ones run a search.
    pub async fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let too_short = query.chars().count() < MIN_QUERY_CHARS;
        {
            let mut state = self.lock();
            state.query = query;
            if too_short {
                state.results.clear();
            }
        }
        if !too_short {
            self.search().await;
        }
    }

    /// Search the backend for the current query and replace the candidates.
    pub async fn search(&self) {
        let query = {
            let mut state = self.lock();
            if state.query.is_empty() {
                state.error = MSG_EMPTY_QUERY.to_string();
                return;
            }
            state.loading = true;
            state.query.clone()
        };

        info!(%query, "searching");
        let outcome = self.client.search(&query).await;

        let mut state = self.lock();
        match outcome {
            Ok(results) => {
                debug!(%query, count = results.len(), "search finished");
                state.error = if results.is_empty() {
                    MSG_NO_RESULTS.to_string()
                } else {
                    String::new()
                };
                state.results = results;
            }
            Err(e) => {
                warn!(%query, error = %e, "search failed");
                state.error = MSG_SEARCH_FAILED.to_string();
            }
        }
        state.loading = false;
    }

    /// A candidate was picked: load its details, then its price history.
    ///
    /// The two requests run one after the other. If either fails the
    /// error line is set and whatever was already stored stays put.
    pub async fn select(&self, asset_id: &str) {
        self.lock().loading = true;
        info!(asset_id, "loading asset");

        if let Err(e) = self.load_asset(asset_id).await {
            warn!(asset_id, error = %e, "loading asset failed");
            self.lock().error = MSG_DETAILS_FAILED.to_string();
        }

        self.lock().loading = false;
    }

    async fn load_asset(&self, asset_id: &str) -> Result<(), CoreError> {
        let details = self.client.get_details(asset_id).await?;
        self.lock().selected = Some(details);

        let raw = self
            .client
            .get_history(asset_id, HISTORY_WINDOW_DAYS)
            .await?;
        let history = self.chart_service.transform_history(&raw);
        debug!(asset_id, points = history.len(), "history loaded");
        self.lock().history = history;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
