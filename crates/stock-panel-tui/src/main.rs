/*
[INPUT]:  CLI arguments, optional YAML configuration file, quote feed endpoint
[OUTPUT]: Running quote panel TUI with clean teardown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or teardown handling
*/

use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stock_panel_feed::StockFeedSocket;
use stock_panel_tui::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
use stock_panel_tui::{PanelConfig, SnapshotCell};

#[derive(Parser, Debug)]
#[command(name = "stock-panel-tui", version, about = "Live stock quote panel")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "endpoint", value_name = "URL")]
    endpoint: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let log_buffer: LogBufferHandle =
        Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&args.log_level, log_buffer.clone())?;

    let mut config = match args.config_path.as_ref() {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            PanelConfig::from_file(path_str).context("load config")?
        }
        None => PanelConfig::default(),
    };
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    info!(endpoint = %config.endpoint, "starting stock panel");

    let mut socket = StockFeedSocket::with_capacity(config.channel_capacity);
    let receiver = socket
        .take_receiver()
        .context("feed receiver already taken")?;

    // A failed dial is not fatal: the panel runs and keeps its placeholder.
    let connected = match socket.connect(&config.endpoint).await {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "connection failed; panel stays in placeholder state");
            false
        }
    };

    let mut cell = SnapshotCell::new();
    let snapshot_rx = cell.subscribe();
    let connection_rx = cell.subscribe_connection_state();
    cell.start(receiver, connected);

    run_tui(snapshot_rx, connection_rx, log_buffer).await?;

    // Teardown order: subscription first, then the cell worker. Buffered
    // messages are not processed past this point.
    if socket.is_connected().await {
        let _ = socket.disconnect().await;
    }
    cell.shutdown();
    cell.join().await;
    info!("panel shutdown complete");

    Ok(())
}

fn init_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
