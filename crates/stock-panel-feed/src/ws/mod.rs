/*
[INPUT]:  WebSocket configuration and the stock_data event stream
[OUTPUT]: Real-time snapshot updates
[POS]:    WebSocket layer - subscription lifecycle
[UPDATE]: When adding new events or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::StockFeedSocket;
pub use message::{FeedEnvelope, decode_snapshot};
