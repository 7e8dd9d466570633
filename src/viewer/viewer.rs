//! The question viewer component.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::QuestionSource;

use super::state::ViewState;

/// Display state shared between the UI loop and in-flight fetches.
pub type SharedState = Arc<Mutex<ViewState>>;

/// Fetches random questions and keeps the display state current.
///
/// Every [`load_random`](Self::load_random) spawns one independent request.
/// Requests are never cancelled or sequenced, so when several overlap the
/// one that resolves last decides what is shown.
pub struct QuestionViewer {
    source: Arc<dyn QuestionSource>,
    state: SharedState,
}

impl QuestionViewer {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(ViewState::default())),
        }
    }

    /// Handle to the shared display state.
    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    /// Copy of the current display state.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// First load when the viewer is shown.
    pub async fn mount(&self) -> JoinHandle<()> {
        debug!("viewer mounted");
        self.load_random().await
    }

    /// Clear the error line and fetch a new random question.
    ///
    /// The error is cleared before this returns; the request itself runs on
    /// a spawned task. Dropping the returned handle does not abort it.
    pub async fn load_random(&self) -> JoinHandle<()> {
        self.state.lock().await.begin_fetch();
        info!("loading random question");

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = source.random_question().await;
            match &result {
                Ok(question) => debug!(question = %question.question, "question loaded"),
                Err(err) => warn!(error = %err, "failed to load question"),
            }
            state.lock().await.finish(result);
        })
    }
}
