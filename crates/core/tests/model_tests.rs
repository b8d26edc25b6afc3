use crypto_tracker_core::models::asset::{AssetDetails, SearchResultItem};
use crypto_tracker_core::models::chart::PriceChart;
use crypto_tracker_core::models::price::{format_timestamp, HistoryPoint, RawHistoryPoint, INVALID_DATE};
use crypto_tracker_core::models::settings::{
    Settings, DEFAULT_API_BASE_URL, DEFAULT_DATE_FORMAT, HISTORY_WINDOW_DAYS, MIN_QUERY_CHARS,
};
use crypto_tracker_core::view::state::TrackerState;

fn hp(date: &str, price: f64) -> HistoryPoint {
    HistoryPoint {
        date: date.to_string(),
        price,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SearchResultItem
// ═══════════════════════════════════════════════════════════════════

mod search_result_item {
    use super::*;

    #[test]
    fn new_keeps_fields_verbatim() {
        let item = SearchResultItem::new("usd-coin", "USDC", "usdc");
        assert_eq!(item.id, "usd-coin");
        assert_eq!(item.name, "USDC");
        assert_eq!(item.symbol, "usdc");
    }

    #[test]
    fn deserialize_ignores_extra_fields() {
        let json = r#"{"id":"bitcoin","symbol":"btc","name":"Bitcoin","platforms":{"x":"y"}}"#;
        let item: SearchResultItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, SearchResultItem::new("bitcoin", "Bitcoin", "btc"));
    }

    #[test]
    fn deserialize_without_symbol() {
        let json = r#"{"id":"bitcoin","name":"Bitcoin"}"#;
        let item: SearchResultItem = serde_json::from_str(json).unwrap();
        assert!(item.symbol.is_empty());
    }

    #[test]
    fn deserialize_requires_id() {
        let json = r#"{"name":"Bitcoin","symbol":"btc"}"#;
        assert!(serde_json::from_str::<SearchResultItem>(json).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AssetDetails
// ═══════════════════════════════════════════════════════════════════

mod asset_details {
    use super::*;

    #[test]
    fn new_sets_core_stats_only() {
        let d = AssetDetails::new("Bitcoin", "BTC", 50000.0, 1e12, 51000.0, 49000.0);
        assert_eq!(d.price, Some(50000.0));
        assert_eq!(d.market_cap, Some(1e12));
        assert_eq!(d.high_24h, Some(51000.0));
        assert_eq!(d.low_24h, Some(49000.0));
        assert!(d.ath.is_none());
        assert!(d.last_updated.is_none());
    }

    #[test]
    fn deserialize_minimal_payload() {
        let json = r#"{"name":"Bitcoin","symbol":"BTC","price":50000,"market_cap":1000000000000,"high_24h":51000,"low_24h":49000}"#;
        let d: AssetDetails = serde_json::from_str(json).unwrap();
        assert_eq!(d, AssetDetails::new("Bitcoin", "BTC", 50000.0, 1e12, 51000.0, 49000.0));
    }

    #[test]
    fn deserialize_null_market_data() {
        let json = r#"{"name":"Obscure","symbol":"OBS","price":null,"market_cap":null,"high_24h":null,"low_24h":null}"#;
        let d: AssetDetails = serde_json::from_str(json).unwrap();
        assert!(d.price.is_none());
        assert!(d.market_cap.is_none());
    }

    #[test]
    fn deserialize_missing_stats_default_to_none() {
        let json = r#"{"name":"Obscure","symbol":"OBS"}"#;
        let d: AssetDetails = serde_json::from_str(json).unwrap();
        assert!(d.high_24h.is_none());
        assert!(d.volume.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  HistoryPoint / timestamp formatting
// ═══════════════════════════════════════════════════════════════════

mod history_point {
    use super::*;

    #[test]
    fn from_raw_keeps_price() {
        let raw = RawHistoryPoint {
            timestamp: 1_700_000_000_000,
            price: 42000.0,
        };
        let p = HistoryPoint::from_raw(&raw, DEFAULT_DATE_FORMAT);
        assert_eq!(p.price, 42000.0);
        assert_eq!(p.date, format_timestamp(raw.timestamp, DEFAULT_DATE_FORMAT));
    }

    #[test]
    fn default_format_is_month_day_year() {
        let date = format_timestamp(1_700_000_000_000, DEFAULT_DATE_FORMAT);
        let parts: Vec<&str> = date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], "2023");
        assert_eq!(parts[0], "11");
        // 2023-11-14T22:13:20Z is the 14th or 15th depending on local offset
        assert!(parts[1] == "14" || parts[1] == "15");
    }

    #[test]
    fn custom_format() {
        let date = format_timestamp(1_700_000_000_000, "%Y");
        assert_eq!(date, "2023");
    }

    #[test]
    fn out_of_range_timestamp_is_invalid_date() {
        assert_eq!(format_timestamp(i64::MAX, DEFAULT_DATE_FORMAT), INVALID_DATE);
    }

    #[test]
    fn raw_deserializes_from_backend_shape() {
        let json = r#"[{"timestamp":1700000000000,"price":42000}]"#;
        let raw: Vec<RawHistoryPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(raw[0].timestamp, 1_700_000_000_000);
        assert_eq!(raw[0].price, 42000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PriceChart
// ═══════════════════════════════════════════════════════════════════

mod price_chart {
    use super::*;

    #[test]
    fn empty_chart_has_no_range() {
        let chart = PriceChart::new("t", vec![]);
        assert!(chart.is_empty());
        assert_eq!(chart.price_range(), None);
    }

    #[test]
    fn range_over_unsorted_prices() {
        let chart = PriceChart::new("t", vec![hp("a", 3.0), hp("b", 1.0), hp("c", 7.5)]);
        assert_eq!(chart.price_range(), Some((1.0, 7.5)));
    }

    #[test]
    fn single_point_range() {
        let chart = PriceChart::new("t", vec![hp("a", 42.0)]);
        assert_eq!(chart.price_range(), Some((42.0, 42.0)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_date_format() {
        assert_eq!(Settings::default().date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn default_base_url_is_absolute() {
        let url = Settings::default().api_base_url;
        assert!(url.starts_with("http://") || url.starts_with("https://"));
        if option_env!("CRYPTO_TRACKER_API_URL").is_none() {
            assert_eq!(url, DEFAULT_API_BASE_URL);
        }
    }

    #[test]
    fn with_base_url_overrides_origin_only() {
        let s = Settings::with_base_url("https://tracker.example.com");
        assert_eq!(s.api_base_url, "https://tracker.example.com");
        assert_eq!(s.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn fixed_constants() {
        assert_eq!(HISTORY_WINDOW_DAYS, 7);
        assert_eq!(MIN_QUERY_CHARS, 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TrackerState
// ═══════════════════════════════════════════════════════════════════

mod tracker_state {
    use super::*;

    #[test]
    fn starts_empty() {
        let s = TrackerState::new();
        assert!(s.query.is_empty());
        assert!(s.results.is_empty());
        assert!(s.selected.is_none());
        assert!(s.history.is_empty());
        assert!(!s.loading);
        assert!(!s.has_error());
    }

    #[test]
    fn has_error_tracks_message() {
        let s = TrackerState {
            error: "boom".into(),
            ..TrackerState::default()
        };
        assert!(s.has_error());
    }
}
