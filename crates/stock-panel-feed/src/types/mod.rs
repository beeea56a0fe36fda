/*
[INPUT]:  Feed schema definitions and serde requirements
[OUTPUT]: Typed snapshot model with serialization support
[POS]:    Data layer - type definitions for feed payloads
[UPDATE]: When the feed schema changes or new types are added
*/

pub mod models;
pub(crate) mod serde_helpers;

pub use models::{OhlcBar, StockSnapshot};
