/*
[INPUT]:  Snapshot/connection watch receivers, crossterm input, log buffer
[OUTPUT]: Ratatui-based TUI run loop, terminal lifecycle, log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing the run loop, tick rate, or log routing
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use stock_panel_feed::StockSnapshot;

use super::app::AppState;
use super::events::handle_key_event;
use super::ui::draw_ui;
use crate::feed::ConnectionState;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Bounded ring of log lines; the log pane only ever shows the tail.
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `MakeWriter` adapter routing tracing output into the log pane.
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

/// Accumulates subscriber output and pushes one buffer line per newline.
pub struct LogWriter {
    buffer: LogBufferHandle,
    pending: String,
}

impl LogWriter {
    fn push(&self, mut line: String) {
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        let mut guard = self.buffer.lock().expect("log buffer lock");
        guard.push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.push_str(&String::from_utf8_lossy(buf));
        while let Some(newline) = self.pending.find('\n') {
            let remainder = self.pending.split_off(newline + 1);
            let line = std::mem::replace(&mut self.pending, remainder);
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.push(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            pending: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Raw-mode/alternate-screen lifetime tied to the run loop; the terminal is
/// restored on drop even when drawing errors out.
struct PanelTerminal {
    inner: Terminal<CrosstermBackend<io::Stdout>>,
}

impl PanelTerminal {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let inner = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { inner })
    }
}

impl Drop for PanelTerminal {
    fn drop(&mut self) {
        let _ = self.inner.show_cursor();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the panel until the user quits.
///
/// The loop is tick-driven: each pass pulls the latest value out of the
/// watch cells and redraws. Input arrives from a blocking poll thread so the
/// rendering task never blocks.
pub async fn run_tui(
    snapshot_rx: watch::Receiver<Option<StockSnapshot>>,
    connection_rx: watch::Receiver<ConnectionState>,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = PanelTerminal::enter()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(log_buffer);
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    should_quit = handle_key_event(&mut app, key);
                }
            }
        }

        app.apply_snapshot(snapshot_rx.borrow().clone());
        app.set_connection(connection_rx.borrow().clone());

        terminal.inner.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}
