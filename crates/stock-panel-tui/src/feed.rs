/*
[INPUT]:  Snapshot channel from the feed socket + teardown token.
[OUTPUT]: Latest-snapshot cell via `watch` + connection state notifications.
[POS]:    Data layer - single observable cell between feed and view (no rendering).
[UPDATE]: When changing teardown semantics or connection state reporting.
*/

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use stock_panel_feed::StockSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

/// Holds the single observable cell the view redraws from.
///
/// Exactly one writer (the worker draining the socket channel) replaces the
/// cell wholesale per accepted message; consumers only ever see a complete
/// snapshot or none. Cancelling the token stops the worker, after which no
/// further publication happens.
#[derive(Debug)]
pub struct SnapshotCell {
    snapshot_tx: watch::Sender<Option<StockSnapshot>>,
    connection_tx: watch::Sender<ConnectionState>,
    shutdown: CancellationToken,
    worker_handle: Option<tokio::task::JoinHandle<()>>,
}

impl SnapshotCell {
    /// Create an empty cell; the panel starts with no snapshot.
    pub fn new() -> Self {
        let (snapshot_tx, _rx) = watch::channel(None);
        let (connection_tx, _rx) = watch::channel(ConnectionState::Disconnected);
        Self {
            snapshot_tx,
            connection_tx,
            shutdown: CancellationToken::new(),
            worker_handle: None,
        }
    }

    /// Subscribe to snapshot replacements.
    ///
    /// The receiver always contains the latest accepted snapshot, or `None`
    /// before the first one arrives.
    pub fn subscribe(&self) -> watch::Receiver<Option<StockSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to connection state changes.
    pub fn subscribe_connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.connection_tx.subscribe()
    }

    /// Start the worker draining `receiver` into the cell.
    ///
    /// `connected` reports whether the socket dial succeeded; with a dead
    /// channel the cell simply stays empty and the panel keeps its
    /// placeholder.
    pub fn start(&mut self, mut receiver: mpsc::Receiver<StockSnapshot>, connected: bool) {
        if connected {
            self.connection_tx.send_replace(ConnectionState::Connected);
        }

        let snapshot_tx = self.snapshot_tx.clone();
        let connection_tx = self.connection_tx.clone();
        let token = self.shutdown.clone();

        self.worker_handle = Some(tokio::spawn(async move {
            loop {
                // Cancellation must win over a buffered message, otherwise a
                // snapshot could still be published after shutdown.
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("snapshot cell worker cancelled");
                        break;
                    }
                    maybe = receiver.recv() => {
                        match maybe {
                            Some(snapshot) => {
                                debug!(
                                    symbol = snapshot.symbol.as_deref().unwrap_or("-"),
                                    bars = snapshot.ohlc.len(),
                                    "snapshot replaced"
                                );
                                snapshot_tx.send_replace(Some(snapshot));
                            }
                            None => {
                                info!("feed channel closed");
                                connection_tx.send_replace(ConnectionState::Disconnected);
                                break;
                            }
                        }
                    }
                }
            }
        }));
    }

    /// Stop the worker; the cell keeps whatever it last held.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the worker task to finish after [`shutdown`](Self::shutdown).
    pub async fn join(&mut self) {
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}
