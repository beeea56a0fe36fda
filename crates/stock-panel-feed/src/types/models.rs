/*
[INPUT]:  Feed schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - snapshot and bar definitions plus validation
[UPDATE]: When the feed schema changes or validation rules tighten
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use super::serde_helpers;

/// One OHLCV record for a time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl OhlcBar {
    /// Check the bar has reasonable values: no negative field, high >= low.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ];
        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(FeedError::InvalidSnapshot(format!(
                    "negative {name}: {value}"
                )));
            }
        }
        if self.high < self.low {
            return Err(FeedError::InvalidSnapshot(format!(
                "high {} below low {}",
                self.high, self.low
            )));
        }
        Ok(())
    }
}

/// The most recent full quote-plus-indicators record received from the feed.
///
/// The indicators are computed upstream and treated as opaque numbers here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub ohlc: Vec<OhlcBar>,
    pub sma: Decimal,
    pub ema: Decimal,
    pub rsi: Decimal,
}

impl StockSnapshot {
    /// Validate every bar; a snapshot with any bad bar is rejected whole.
    pub fn validate(&self) -> Result<()> {
        for bar in &self.ohlc {
            bar.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn bar(open: &str, high: &str, low: &str, close: &str, volume: &str) -> OhlcBar {
        OhlcBar {
            open: Decimal::from_str(open).unwrap(),
            high: Decimal::from_str(high).unwrap(),
            low: Decimal::from_str(low).unwrap(),
            close: Decimal::from_str(close).unwrap(),
            volume: Decimal::from_str(volume).unwrap(),
            timestamp: "2024-01-01T09:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_snapshot_decodes_feed_payload() {
        let payload = r#"{
            "symbol": "AAPL",
            "ohlc": [{"open": 1.005, "high": 1.01, "low": 0.99, "close": 1.0,
                      "volume": 100, "timestamp": "2024-01-01T09:30:00Z"}],
            "sma": 1.004, "ema": 1.006, "rsi": 55.123
        }"#;
        let snapshot: StockSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot.symbol.as_deref(), Some("AAPL"));
        assert_eq!(snapshot.ohlc.len(), 1);
        assert_eq!(snapshot.rsi, Decimal::from_str("55.123").unwrap());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_snapshot_without_symbol() {
        let payload = r#"{"ohlc": [], "sma": 1.0, "ema": 2.0, "rsi": 50.0}"#;
        let snapshot: StockSnapshot = serde_json::from_str(payload).unwrap();
        assert!(snapshot.symbol.is_none());
        assert!(snapshot.ohlc.is_empty());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_snapshot_missing_indicator_rejected() {
        let payload = r#"{"symbol": "IBM", "ohlc": [], "sma": 1.0, "ema": 2.0}"#;
        assert!(serde_json::from_str::<StockSnapshot>(payload).is_err());
    }

    #[rstest::rstest]
    #[case("1.0", "2.0", "0.5", "1.5", "10", true)]
    #[case("0", "0", "0", "0", "0", true)]
    #[case("1.0", "2.0", "0.5", "1.5", "-10", false)]
    #[case("-1.0", "2.0", "0.5", "1.5", "10", false)]
    #[case("1.0", "0.5", "2.0", "1.5", "10", false)]
    fn test_bar_validation(
        #[case] open: &str,
        #[case] high: &str,
        #[case] low: &str,
        #[case] close: &str,
        #[case] volume: &str,
        #[case] valid: bool,
    ) {
        let bar = bar(open, high, low, close, volume);
        assert_eq!(bar.validate().is_ok(), valid);
    }

    #[test]
    fn test_snapshot_with_bad_bar_rejected_whole() {
        let snapshot = StockSnapshot {
            symbol: Some("IBM".to_string()),
            ohlc: vec![
                bar("1.0", "2.0", "0.5", "1.5", "10"),
                bar("1.0", "2.0", "0.5", "1.5", "-1"),
            ],
            sma: Decimal::ONE,
            ema: Decimal::ONE,
            rsi: Decimal::from(50),
        };
        assert!(snapshot.validate().is_err());
    }
}
