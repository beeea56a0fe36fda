/*
[INPUT]:  AppState latest snapshot
[OUTPUT]: Title and indicator chips rendered into the header region
[POS]:    TUI UI header rendering
[UPDATE]: When changing chips or the placeholder
*/

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::{PLACEHOLDER_TEXT, indicator_chips};
use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let chips_line = match app.latest.as_ref() {
        Some(snapshot) => {
            let mut spans = Vec::new();
            for (index, (label, value)) in indicator_chips(snapshot).into_iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(format!("{label}: "), header_style()));
                spans.push(Span::raw(value));
            }
            Line::from(spans)
        }
        None => Line::from(Span::raw(PLACEHOLDER_TEXT)),
    };

    let header = Paragraph::new(vec![chips_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Stock Technical Indicator"),
    );
    frame.render_widget(header, area);
}
