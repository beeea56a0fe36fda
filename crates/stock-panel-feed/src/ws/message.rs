/*
[INPUT]:  Raw WebSocket frame text
[OUTPUT]: Parsed event envelopes and validated snapshots
[POS]:    WebSocket layer - message parsing and validation
[UPDATE]: When adding new event types or changing the wire format
*/

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::StockSnapshot;

/// Named-event envelope carried in each text frame.
///
/// The `stock_data` payload is itself JSON-encoded text; it must be decoded
/// with [`decode_snapshot`] before use.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum FeedEnvelope {
    #[serde(rename = "stock_data")]
    StockData(String),
    #[serde(other)]
    Other,
}

/// Decode and validate a `stock_data` payload.
///
/// Any failure means the whole frame is dropped; a partial snapshot is never
/// produced.
pub fn decode_snapshot(payload: &str) -> Result<StockSnapshot> {
    let snapshot: StockSnapshot = serde_json::from_str(payload)?;
    snapshot.validate()?;
    Ok(snapshot)
}
