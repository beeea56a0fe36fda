/*
[INPUT]:  Snapshot cell receivers and the shared log buffer
[OUTPUT]: Ratatui-based panel for the latest quote snapshot
[POS]:    TUI module for the stock-panel-tui binary
[UPDATE]: When changing layout, keybindings, or the run loop
*/

pub mod app;
pub mod events;
pub mod runtime;
pub mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
