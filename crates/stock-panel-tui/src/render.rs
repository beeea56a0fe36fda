/*
[INPUT]:  Latest snapshot (or none) from the cell
[OUTPUT]: Formatted strings for chips, table title, and table rows
[POS]:    Rendering layer - pure formatting, no terminal handles
[UPDATE]: When changing rounding, time formats, or table columns
*/

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use stock_panel_feed::StockSnapshot;

/// Shown in the chips region until the first snapshot arrives.
pub const PLACEHOLDER_TEXT: &str = "Unable to fetch the data from the server.";

pub const BAR_TABLE_COLUMNS: [&str; 6] = ["Time", "Open", "High", "Low", "Close", "Volume"];

/// Round to `dp` decimals, midpoint away from zero, padded to exactly `dp`
/// places (`1.005` -> `"1.01"`, `100` -> `"100.00"`).
pub fn format_decimal(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Bar time column: hour and minute only.
pub fn format_bar_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Date shown next to the symbol in the table title.
pub fn format_header_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// The three indicator chips, label and two-decimal value.
pub fn indicator_chips(snapshot: &StockSnapshot) -> [(&'static str, String); 3] {
    [
        ("SMA", format_decimal(snapshot.sma, 2)),
        ("EMA", format_decimal(snapshot.ema, 2)),
        ("RSI", format_decimal(snapshot.rsi, 2)),
    ]
}

/// Table title, `None` when the snapshot carries no symbol (the table is
/// omitted in that case). With zero bars the date suffix is dropped.
pub fn table_title(snapshot: &StockSnapshot) -> Option<String> {
    let symbol = snapshot.symbol.as_deref()?;
    match snapshot.ohlc.first() {
        Some(bar) => Some(format!(
            "{symbol} Data - {}",
            format_header_date(&bar.timestamp)
        )),
        None => Some(format!("{symbol} Data")),
    }
}

/// One row of cells per bar, in table column order.
pub fn bar_rows(snapshot: &StockSnapshot) -> Vec<[String; 6]> {
    snapshot
        .ohlc
        .iter()
        .map(|bar| {
            [
                format_bar_time(&bar.timestamp),
                format_decimal(bar.open, 2),
                format_decimal(bar.high, 2),
                format_decimal(bar.low, 2),
                format_decimal(bar.close, 2),
                format_decimal(bar.volume, 2),
            ]
        })
        .collect()
}
