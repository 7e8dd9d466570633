//! Display state of the viewer.

use crate::api::FetchError;
use crate::models::Question;

/// What the viewer currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing fetched yet and no error.
    #[default]
    Loading,

    /// Last fetch succeeded.
    Loaded(Question),

    /// Last fetch failed.
    Error {
        message: String,
        /// Question from an earlier success, still on screen.
        stale: Option<Question>,
    },
}

impl ViewState {
    /// Start of a fetch: drop the error but keep whatever question is shown.
    pub fn begin_fetch(&mut self) {
        if let Self::Error { stale, .. } = self {
            *self = match stale.take() {
                Some(question) => Self::Loaded(question),
                None => Self::Loading,
            };
        }
    }

    /// Apply the outcome of a fetch.
    pub fn finish(&mut self, result: Result<Question, FetchError>) {
        *self = match result {
            Ok(question) => Self::Loaded(question),
            Err(err) => Self::Error {
                message: err.to_string(),
                stale: self.take_question(),
            },
        };
    }

    /// The question on screen, if any.
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Loading => None,
            Self::Loaded(question) => Some(question),
            Self::Error { stale, .. } => stale.as_ref(),
        }
    }

    /// The error message, if the last fetch failed and it is non-empty.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// True when no question is available to show.
    pub fn is_loading(&self) -> bool {
        self.question().is_none()
    }

    fn take_question(&mut self) -> Option<Question> {
        match std::mem::take(self) {
            Self::Loading => None,
            Self::Loaded(question) => Some(question),
            Self::Error { stale, .. } => stale,
        }
    }
}
