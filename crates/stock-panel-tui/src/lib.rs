/*
[INPUT]:  Public API exports for the stock-panel-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod feed;
pub mod render;
pub mod tui;

// Re-export main types for convenience
pub use config::PanelConfig;
pub use feed::{ConnectionState, SnapshotCell};
