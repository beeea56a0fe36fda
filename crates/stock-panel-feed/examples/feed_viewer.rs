/*
[INPUT]:  Feed WebSocket URL (first CLI argument, local default otherwise)
[OUTPUT]: Accepted snapshots printed to stdout
[POS]:    Examples - feed subscription without the TUI
[UPDATE]: When the client API changes
*/

use stock_panel_feed::StockFeedSocket;

const DEFAULT_URL: &str = "ws://127.0.0.1:8080/ws";

/// Example: subscribe to a quote feed and print whatever it accepts.
///
/// Run against any server speaking the stock_data envelope format:
///   cargo run --example feed_viewer -- ws://127.0.0.1:8080/ws
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());
    println!("connecting to {url}");

    let mut socket = StockFeedSocket::new();
    let mut receiver = socket.take_receiver().expect("receiver already taken");

    if let Err(err) = socket.connect(&url).await {
        eprintln!("connect failed: {err}");
        return;
    }

    while let Some(snapshot) = receiver.recv().await {
        println!(
            "{} | bars: {} | sma: {} ema: {} rsi: {}",
            snapshot.symbol.as_deref().unwrap_or("-"),
            snapshot.ohlc.len(),
            snapshot.sma,
            snapshot.ema,
            snapshot.rsi,
        );
    }

    println!("feed ended");
}
