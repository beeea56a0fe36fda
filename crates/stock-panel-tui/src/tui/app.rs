/*
[INPUT]:  Latest snapshot, connection state, log buffer handle
[OUTPUT]: AppState helpers for TUI rendering and scrolling
[POS]:    TUI app state - two-state panel (empty / populated)
[UPDATE]: When changing panel state or scroll behavior
*/

use stock_panel_feed::StockSnapshot;

use crate::feed::ConnectionState;
use crate::tui::LogBufferHandle;

pub(super) struct AppState {
    pub(super) latest: Option<StockSnapshot>,
    pub(super) connection: ConnectionState,
    pub(super) scroll: usize,
    pub(super) status_message: String,
    pub(super) log_buffer: LogBufferHandle,
}

impl AppState {
    pub(super) fn new(log_buffer: LogBufferHandle) -> Self {
        Self {
            latest: None,
            connection: ConnectionState::Disconnected,
            scroll: 0,
            status_message: "Ready".to_string(),
            log_buffer,
        }
    }

    /// Replace the held snapshot wholesale. Old and new values are never
    /// merged; scroll is clamped to the new bar count.
    pub(super) fn apply_snapshot(&mut self, snapshot: Option<StockSnapshot>) {
        let bar_count = snapshot.as_ref().map(|s| s.ohlc.len()).unwrap_or(0);
        self.latest = snapshot;
        self.scroll = self.scroll.min(bar_count.saturating_sub(1));
    }

    pub(super) fn set_connection(&mut self, state: ConnectionState) {
        if state != self.connection {
            self.status_message = match state {
                ConnectionState::Connected => "Connected".to_string(),
                ConnectionState::Disconnected => "Disconnected".to_string(),
            };
            self.connection = state;
        }
    }

    pub(super) fn scroll_by(&mut self, delta: isize) {
        let bar_count = self.latest.as_ref().map(|s| s.ohlc.len()).unwrap_or(0);
        if bar_count == 0 {
            self.scroll = 0;
            return;
        }
        let current = self.scroll as isize;
        self.scroll = (current + delta).clamp(0, (bar_count - 1) as isize) as usize;
    }
}
