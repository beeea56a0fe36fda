/*
[INPUT]:  AppState latest snapshot and scroll offset
[OUTPUT]: OHLCV bar table rendered into the main region
[POS]:    TUI UI bar table rendering
[UPDATE]: When changing table columns or scroll handling
*/

use ratatui::layout::Constraint;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::render::{BAR_TABLE_COLUMNS, bar_rows, table_title};
use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_bar_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    // Table is omitted whenever there is no snapshot or no symbol.
    let snapshot = match app.latest.as_ref() {
        Some(snapshot) if snapshot.symbol.is_some() => snapshot,
        _ => {
            let empty = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style());
            frame.render_widget(empty, area);
            return;
        }
    };

    let title = table_title(snapshot).unwrap_or_default();
    let rows = bar_rows(snapshot);
    let visible = rows
        .into_iter()
        .skip(app.scroll)
        .map(|cells| Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    let header = Row::new(BAR_TABLE_COLUMNS.iter().map(|name| Cell::from(*name)).collect::<Vec<_>>())
        .style(header_style());

    let table = Table::new(
        visible,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title),
    );
    frame.render_widget(table, area);
}
