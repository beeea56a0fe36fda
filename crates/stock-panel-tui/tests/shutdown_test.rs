/*
[INPUT]:  Snapshot cell teardown scenarios
[OUTPUT]: Verification that no update is visible after teardown
[POS]:    Integration test layer - clean exit verification
[UPDATE]: When changing teardown logic
*/

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use stock_panel_feed::{StockSnapshot, decode_snapshot};
use stock_panel_tui::{ConnectionState, SnapshotCell};

const SAMPLE_PAYLOAD: &str = r#"{"symbol":"AAPL","ohlc":[{"open":1.005,"high":1.01,"low":0.99,"close":1.0,"volume":100,"timestamp":"2024-01-01T09:30:00Z"}],"sma":1.004,"ema":1.006,"rsi":55.123}"#;

fn snapshot(symbol: &str) -> StockSnapshot {
    let mut snapshot = decode_snapshot(SAMPLE_PAYLOAD).unwrap();
    snapshot.symbol = Some(symbol.to_string());
    snapshot
}

#[tokio::test]
async fn test_cell_publishes_latest_snapshot() {
    let (tx, rx) = mpsc::channel(8);
    let mut cell = SnapshotCell::new();
    let mut snapshot_rx = cell.subscribe();
    cell.start(rx, true);

    assert_eq!(
        *cell.subscribe_connection_state().borrow(),
        ConnectionState::Connected
    );

    tx.send(snapshot("AAPL")).await.unwrap();
    timeout(Duration::from_secs(5), snapshot_rx.changed())
        .await
        .expect("published before timeout")
        .expect("cell alive");
    assert_eq!(
        snapshot_rx.borrow().as_ref().unwrap().symbol.as_deref(),
        Some("AAPL")
    );

    // Replacement is wholesale.
    tx.send(snapshot("IBM")).await.unwrap();
    timeout(Duration::from_secs(5), snapshot_rx.changed())
        .await
        .expect("published before timeout")
        .expect("cell alive");
    assert_eq!(
        snapshot_rx.borrow().as_ref().unwrap().symbol.as_deref(),
        Some("IBM")
    );

    cell.shutdown();
    cell.join().await;
}

#[tokio::test]
async fn test_no_updates_after_teardown() {
    let (tx, rx) = mpsc::channel(8);
    let mut cell = SnapshotCell::new();
    let mut snapshot_rx = cell.subscribe();
    cell.start(rx, true);

    tx.send(snapshot("AAPL")).await.unwrap();
    timeout(Duration::from_secs(5), snapshot_rx.changed())
        .await
        .expect("published before timeout")
        .expect("cell alive");

    cell.shutdown();
    cell.join().await;

    // Messages buffered or sent after teardown are never processed.
    tx.send(snapshot("IBM")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!snapshot_rx.has_changed().unwrap_or(false));
    assert_eq!(
        snapshot_rx.borrow().as_ref().unwrap().symbol.as_deref(),
        Some("AAPL")
    );
}

#[tokio::test]
async fn test_buffered_messages_dropped_at_teardown() {
    let (tx, rx) = mpsc::channel(8);
    for _ in 0..8 {
        tx.send(snapshot("AAPL")).await.unwrap();
    }

    // Teardown races against a full channel: the worker starts with eight
    // messages already waiting and the cancellation already signalled. None
    // of them may reach the cell.
    let mut cell = SnapshotCell::new();
    let snapshot_rx = cell.subscribe();
    cell.shutdown();
    cell.start(rx, true);
    cell.join().await;

    assert!(snapshot_rx.borrow().is_none());
}

#[tokio::test]
async fn test_channel_close_marks_disconnected() {
    let (tx, rx) = mpsc::channel(8);
    let mut cell = SnapshotCell::new();
    let mut connection_rx = cell.subscribe_connection_state();
    cell.start(rx, true);

    drop(tx);
    timeout(Duration::from_secs(5), async {
        loop {
            if *connection_rx.borrow_and_update() == ConnectionState::Disconnected {
                break;
            }
            connection_rx.changed().await.expect("cell alive");
        }
    })
    .await
    .expect("disconnected before timeout");

    cell.join().await;
}

#[tokio::test]
async fn test_cell_starts_empty_when_never_connected() {
    let (_tx, rx) = mpsc::channel::<StockSnapshot>(8);
    let mut cell = SnapshotCell::new();
    let snapshot_rx = cell.subscribe();
    cell.start(rx, false);

    assert!(snapshot_rx.borrow().is_none());
    assert_eq!(
        *cell.subscribe_connection_state().borrow(),
        ConnectionState::Disconnected
    );

    cell.shutdown();
    cell.join().await;
}
