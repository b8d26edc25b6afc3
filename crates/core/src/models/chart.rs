use serde::{Deserialize, Serialize};

use super::price::HistoryPoint;

/// Line chart data for the details card: date on the x axis, price on the y axis.
///
/// The core computes the series — the front end only draws it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
    /// Heading shown above the chart (e.g., "7-Day Price Chart")
    pub title: String,

    /// Chronological points, in backend order
    pub points: Vec<HistoryPoint>,
}

impl PriceChart {
    pub fn new(title: impl Into<String>, points: Vec<HistoryPoint>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest price in the series, or `None` for an empty chart.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.points.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
