//! The question viewer: fetch lifecycle and shared display state.

mod state;
mod viewer;

pub use state::ViewState;
pub use viewer::{QuestionViewer, SharedState};
