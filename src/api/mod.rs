//! HTTP access to the trivia API.

mod client;
mod error;

pub use client::{QuestionSource, TriviaClient};
pub use error::FetchError;
