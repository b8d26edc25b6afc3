use plotters::prelude::*;

use crate::errors::CoreError;
use crate::models::chart::PriceChart;
use crate::models::price::{HistoryPoint, RawHistoryPoint};
use crate::models::settings::{DEFAULT_DATE_FORMAT, HISTORY_WINDOW_DAYS};

/// Default SVG canvas size for the details card chart.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (800, 300);

/// Line colour of the price series.
const LINE_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xd8);

/// Turns backend history into chart data and draws it.
///
/// The front end only has to embed the finished SVG.
pub struct ChartService {
    date_format: String,
}

impl ChartService {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Convert raw samples to display points, keeping backend order.
    pub fn transform_history(&self, raw: &[RawHistoryPoint]) -> Vec<HistoryPoint> {
        raw.iter()
            .map(|p| HistoryPoint::from_raw(p, &self.date_format))
            .collect()
    }

    /// Wrap display points into the details card chart.
    pub fn build_chart(&self, points: Vec<HistoryPoint>) -> PriceChart {
        PriceChart::new(format!("{HISTORY_WINDOW_DAYS}-Day Price Chart"), points)
    }

    /// Render a line chart as a standalone SVG document.
    ///
    /// The x axis is categorical: one tick per point, labelled with its
    /// display date. An empty chart still renders axes and caption.
    pub fn render_svg(&self, chart: &PriceChart, size: (u32, u32)) -> Result<String, CoreError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            root.fill(&WHITE).map_err(chart_err)?;

            let (y_min, y_max) = padded_range(chart.price_range());
            let last_index = chart.points.len().saturating_sub(1).max(1) as i32;
            let points = &chart.points;

            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 20).into_font())
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(80)
                .build_cartesian_2d(0..last_index, y_min..y_max)
                .map_err(chart_err)?;

            let x_label = |x: &i32| {
                usize::try_from(*x)
                    .ok()
                    .and_then(|i| points.get(i))
                    .map(|p| p.date.clone())
                    .unwrap_or_default()
            };
            ctx.configure_mesh()
                .x_labels(points.len().max(2))
                .x_label_formatter(&x_label)
                .y_label_formatter(&|y: &f64| format!("{y:.2}"))
                .x_desc("Date")
                .y_desc("Price")
                .draw()
                .map_err(chart_err)?;

            ctx.draw_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i as i32, p.price)),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(chart_err)?;

            root.present().map_err(chart_err)?;
        }
        Ok(svg)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// Y range with 5% headroom on both sides; flat or empty series get a unit band.
fn padded_range(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> CoreError {
    CoreError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_empty_is_unit_band() {
        assert_eq!(padded_range(None), (0.0, 1.0));
    }

    #[test]
    fn padded_range_flat_series() {
        assert_eq!(padded_range(Some((5.0, 5.0))), (4.0, 6.0));
    }

    #[test]
    fn padded_range_adds_five_percent() {
        let (lo, hi) = padded_range(Some((100.0, 200.0)));
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 205.0).abs() < 1e-9);
    }
}
