/*
[INPUT]:  Frame regions and AppState
[OUTPUT]: Full panel layout rendered into the ratatui frame
[POS]:    TUI UI layout and footer
[UPDATE]: When changing layout regions or the footer
*/

mod bars;
mod header;
mod logs;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::AppState;
use super::runtime::border_style;
use crate::feed::ConnectionState;

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .split(area);

    header::draw_header(frame, layout[0], app);
    bars::draw_bar_table(frame, layout[1], app);
    logs::draw_logs(frame, layout[2], &app.log_buffer);
    draw_footer(frame, layout[3], app);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let connection = match app.connection {
        ConnectionState::Connected => "connected",
        ConnectionState::Disconnected => "disconnected",
    };
    let footer = Paragraph::new(format!(
        "Hotkeys: [Up/Down] Scroll  [PgUp/PgDn] Page  [q] Quit  |  Feed: {connection}  |  Status: {}",
        app.status_message
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Hotkeys"),
    );
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use stock_panel_feed::decode_snapshot;

    use super::*;
    use crate::render::PLACEHOLDER_TEXT;
    use crate::tui::LogBuffer;

    const SAMPLE_PAYLOAD: &str = r#"{"symbol":"AAPL","ohlc":[{"open":1.005,"high":1.01,"low":0.99,"close":1.0,"volume":100,"timestamp":"2024-01-01T09:30:00Z"}],"sma":1.004,"ema":1.006,"rsi":55.123}"#;

    fn app() -> AppState {
        AppState::new(Arc::new(Mutex::new(LogBuffer::new(16))))
    }

    fn rendered_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw_ui(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_placeholder_rendered_before_first_message() {
        let text = rendered_text(&app());
        assert!(text.contains(PLACEHOLDER_TEXT));
        // No chips and no table until data arrives.
        assert!(!text.contains("SMA:"));
        assert!(!text.contains("Volume"));
    }

    #[test]
    fn test_snapshot_replaces_placeholder() {
        let mut app = app();
        app.apply_snapshot(Some(decode_snapshot(SAMPLE_PAYLOAD).unwrap()));

        let text = rendered_text(&app);
        assert!(!text.contains(PLACEHOLDER_TEXT));
        assert!(text.contains("SMA: 1.00"));
        assert!(text.contains("RSI: 55.12"));
        assert!(text.contains("AAPL Data - 2024-01-01"));
        assert!(text.contains("Volume"));
        assert!(text.contains("09:30"));
    }

    #[test]
    fn test_table_omitted_without_symbol() {
        let mut app = app();
        let mut snapshot = decode_snapshot(SAMPLE_PAYLOAD).unwrap();
        snapshot.symbol = None;
        app.apply_snapshot(Some(snapshot));

        let text = rendered_text(&app);
        assert!(text.contains("SMA: 1.00"));
        assert!(!text.contains("Volume"));
    }
}
