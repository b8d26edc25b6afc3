use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::asset::AssetDetails;
use crate::models::chart::PriceChart;
use crate::services::chart_service::ChartService;

use super::state::TrackerState;

pub const SCREEN_TITLE: &str = "Crypto Price Tracker";
pub const SEARCH_LABEL: &str = "Search Cryptocurrency";

/// One selectable entry in the autocomplete dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    pub id: String,
    pub label: String,
}

/// A "label: value" row on the details card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

impl StatLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// The card shown once an asset is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsCard {
    /// "Name (SYMBOL)"
    pub heading: String,
    pub stats: Vec<StatLine>,
    pub chart: PriceChart,
}

/// Everything visible on the tracker page, derived from [`TrackerState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub query: String,
    pub options: Vec<SearchOption>,
    /// Present iff the state carries an error
    pub error_line: Option<String>,
    pub loading: bool,
    /// Present iff an asset is selected
    pub card: Option<DetailsCard>,
}

/// Derive the screen from a state snapshot.
pub fn render(state: &TrackerState, chart_service: &ChartService) -> Screen {
    Screen {
        query: state.query.clone(),
        options: state
            .results
            .iter()
            .map(|item| SearchOption {
                id: item.id.clone(),
                label: item.name.clone(),
            })
            .collect(),
        error_line: state.has_error().then(|| state.error.clone()),
        loading: state.loading,
        card: state.selected.as_ref().map(|details| DetailsCard {
            heading: format!("{} ({})", details.name, details.symbol),
            stats: stat_lines(details),
            chart: chart_service.build_chart(state.history.clone()),
        }),
    }
}

fn stat_lines(details: &AssetDetails) -> Vec<StatLine> {
    let mut stats = vec![
        StatLine::new("Price", usd(details.price)),
        StatLine::new("Market Cap", usd(details.market_cap)),
        StatLine::new("24h High", usd(details.high_24h)),
        StatLine::new("24h Low", usd(details.low_24h)),
    ];

    // Extended statistics only when the backend supplied them
    if let Some(ath) = details.ath {
        stats.push(StatLine::new("All-Time High", usd(Some(ath))));
    }
    if let Some(atl) = details.atl {
        stats.push(StatLine::new("All-Time Low", usd(Some(atl))));
    }
    if let Some(change) = details.price_change_24h {
        stats.push(StatLine::new("Price Change (24h)", format!("{change:.2}%")));
    }
    if let Some(volume) = details.volume {
        stats.push(StatLine::new("Volume", usd(Some(volume))));
    }
    if let Some(updated) = &details.last_updated {
        stats.push(StatLine::new("Last Updated", updated.clone()));
    }
    stats
}

/// "$<value>", or a bare "$" when the backend had no number.
fn usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v}"),
        None => "$".to_string(),
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SCREEN_TITLE}")?;
        writeln!(f, "{SEARCH_LABEL}: {}", self.query)?;
        for option in &self.options {
            writeln!(f, "  - {} [{}]", option.label, option.id)?;
        }
        if let Some(error) = &self.error_line {
            writeln!(f, "! {error}")?;
        }
        if self.loading {
            writeln!(f, "Loading...")?;
        }
        if let Some(card) = &self.card {
            writeln!(f)?;
            writeln!(f, "{}", card.heading)?;
            for stat in &card.stats {
                writeln!(f, "{}: {}", stat.label, stat.value)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", card.chart.title)?;
            for point in &card.chart.points {
                writeln!(f, "  {:<12} {}", point.date, point.price)?;
            }
        }
        Ok(())
    }
}
