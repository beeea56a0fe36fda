/*
[INPUT]:  WebSocket URL of the quote feed
[OUTPUT]: Validated snapshots via channel, one per accepted stock_data frame
[POS]:    WebSocket layer - real-time data stream handling
[UPDATE]: When changing connection logic or the drop policy for bad frames
*/

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{FeedError, Result};
use crate::types::StockSnapshot;
use crate::ws::message::{FeedEnvelope, decode_snapshot};

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Receive-only WebSocket client for the stock quote feed.
///
/// One subscription per client: connect once, read until disconnect. Frames
/// that fail to decode or validate are dropped with a logged warning; they
/// never reach the receiver.
#[derive(Debug)]
pub struct StockFeedSocket {
    message_tx: mpsc::Sender<StockSnapshot>,
    message_rx: Option<mpsc::Receiver<StockSnapshot>>,
    shutdown: Arc<Mutex<Option<CancellationToken>>>,
}

impl StockFeedSocket {
    /// Create a new feed client with the default channel capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new feed client with an explicit channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            message_tx: tx,
            message_rx: Some(rx),
            shutdown: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the snapshot receiver
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<StockSnapshot>> {
        self.message_rx.take()
    }

    /// Connect to the feed and start the reader task.
    pub async fn connect(&self, url: &str) -> Result<()> {
        let url = Url::parse(url)?;

        let token = CancellationToken::new();
        {
            let mut guard = self.shutdown.lock().await;
            if guard.is_some() {
                return Err(FeedError::AlreadyConnected);
            }
            *guard = Some(token.clone());
        }

        let connected = connect_async(url.as_str()).await;
        let (ws_stream, _response) = match connected {
            Ok(parts) => parts,
            Err(err) => {
                let mut guard = self.shutdown.lock().await;
                *guard = None;
                return Err(FeedError::WebSocket(err.to_string()));
            }
        };
        info!(url = %url, "connected to quote feed");

        let (mut write, mut read) = ws_stream.split();
        let message_tx = self.message_tx.clone();
        let shutdown_slot = self.shutdown.clone();

        tokio::spawn(async move {
            loop {
                // Cancellation must win over a ready frame so nothing is
                // delivered past disconnect.
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        let _ = write.send(WsMessage::Close(None)).await;
                        break;
                    }
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Close(_))) => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                info!("quote feed closed by server");
                                break;
                            }
                            Some(Ok(WsMessage::Ping(_))) | Some(Ok(WsMessage::Pong(_))) => {}
                            Some(Ok(message)) => {
                                if let Some(snapshot) = parse_frame(message)
                                    && message_tx.send(snapshot).await.is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(err)) => {
                                warn!(error = %err, "quote feed read failed");
                                break;
                            }
                            None => {
                                info!("quote feed stream ended");
                                break;
                            }
                        }
                    }
                }
            }

            let mut guard = shutdown_slot.lock().await;
            *guard = None;
        });

        Ok(())
    }

    /// Terminate the subscription immediately.
    pub async fn disconnect(&self) -> Result<()> {
        let guard = self.shutdown.lock().await;
        match guard.as_ref() {
            Some(token) => {
                token.cancel();
                Ok(())
            }
            None => Err(FeedError::NotConnected),
        }
    }

    /// Whether a reader task is currently live.
    pub async fn is_connected(&self) -> bool {
        self.shutdown.lock().await.is_some()
    }
}

impl Default for StockFeedSocket {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_frame(message: WsMessage) -> Option<StockSnapshot> {
    let text: String = match message {
        WsMessage::Text(text) => text.to_string(),
        WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok()?,
        _ => return None,
    };

    let envelope = match serde_json::from_str::<FeedEnvelope>(&text) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(error = %err, bytes = text.len(), "feed frame parse failed; dropped");
            return None;
        }
    };

    match envelope {
        FeedEnvelope::StockData(payload) => match decode_snapshot(&payload) {
            Ok(snapshot) => {
                debug!(
                    symbol = snapshot.symbol.as_deref().unwrap_or("-"),
                    bars = snapshot.ohlc.len(),
                    "stock_data accepted"
                );
                Some(snapshot)
            }
            Err(err) => {
                warn!(error = %err, "stock_data payload rejected; dropped");
                None
            }
        },
        FeedEnvelope::Other => {
            debug!("unrecognized feed event ignored");
            None
        }
    }
}
