/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public stock quote feed crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod types;
pub mod ws;

// Re-export commonly used types
pub use error::{FeedError, Result};
pub use types::{OhlcBar, StockSnapshot};
pub use ws::{FeedEnvelope, StockFeedSocket, decode_snapshot};
