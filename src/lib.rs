//! # trivia-viewer
//!
//! A terminal viewer that shows one random question from a trivia API, with
//! its four options and a key to fetch another.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_viewer::{ApiConfig, TriviaApp, TriviaError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TriviaError> {
//!     let config = ApiConfig::new("http://localhost:8000")?;
//!     TriviaApp::new(config).run().await
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
mod models;
pub mod terminal;
mod ui;
pub mod viewer;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use api::{FetchError, QuestionSource, TriviaClient};
pub use config::{ApiConfig, ConfigError};
pub use logging::LoggingError;
pub use models::Question;
pub use viewer::{QuestionViewer, ViewState};

use terminal::TerminalSession;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for viewer operations.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(#[from] LoggingError),
    #[error("request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Refresh,
    Quit,
    Ignore,
}

/// Map a key to its action. Refresh is `n`, `r` or Enter; quit is `q` or Esc.
pub fn key_action(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R')
        | KeyCode::Enter => KeyAction::Refresh,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// The viewer wired to a question source and a terminal.
pub struct TriviaApp {
    viewer: QuestionViewer,
    subtitle: String,
}

impl TriviaApp {
    /// Viewer backed by the HTTP API at `config`.
    pub fn new(config: ApiConfig) -> Self {
        let subtitle = config.base_url().to_string();
        Self::with_source(Arc::new(TriviaClient::new(config)), subtitle)
    }

    /// Viewer backed by any question source.
    pub fn with_source(source: Arc<dyn QuestionSource>, subtitle: impl Into<String>) -> Self {
        Self {
            viewer: QuestionViewer::new(source),
            subtitle: subtitle.into(),
        }
    }

    /// Take over the terminal until the user quits.
    pub async fn run(self) -> Result<(), TriviaError> {
        info!(api = %self.subtitle, "starting viewer");
        let mut session = TerminalSession::enter()?;

        // Fetch tasks are detached; quitting does not wait for them.
        let _ = self.viewer.mount().await;

        loop {
            {
                let state = self.viewer.state();
                let state = state.lock().await;
                session
                    .terminal()
                    .draw(|frame| ui::render(frame, &state, &self.subtitle))?;
            }

            if !event::poll(INPUT_POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key_action(key.code) {
                    KeyAction::Refresh => {
                        let _ = self.viewer.load_random().await;
                    }
                    KeyAction::Quit => break,
                    KeyAction::Ignore => {}
                }
            }
        }

        info!("viewer closed");
        Ok(())
    }
}

/// Probe `GET /healthz` once.
pub async fn check_health(config: ApiConfig) -> Result<(), TriviaError> {
    TriviaClient::new(config).health().await?;
    Ok(())
}
