use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Text shown for a timestamp chrono cannot represent.
pub const INVALID_DATE: &str = "Invalid Date";

/// A history sample exactly as delivered by `/crypto/{id}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHistoryPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub price: f64,
}

/// A single chart point (display date → price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Date already formatted for display in the local timezone
    pub date: String,
    pub price: f64,
}

impl HistoryPoint {
    /// Project a raw sample to a chart point, formatting its timestamp
    /// with `date_format` (chrono strftime syntax).
    pub fn from_raw(raw: &RawHistoryPoint, date_format: &str) -> Self {
        Self {
            date: format_timestamp(raw.timestamp, date_format),
            price: raw.price,
        }
    }
}

/// Format a millisecond timestamp as a local-time date string.
/// Out-of-range timestamps yield [`INVALID_DATE`] instead of failing.
pub fn format_timestamp(timestamp_ms: i64, date_format: &str) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(&Local).format(date_format).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
