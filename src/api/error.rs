use std::error::Error as StdError;

use thiserror::Error;

/// Why a request to the trivia API did not produce a usable answer.
///
/// The `Display` text is what the viewer shows on its error line.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// Connection, TLS or body transfer failure. The text includes the
    /// underlying causes, e.g. "Connection refused".
    #[error("{}", with_causes(.0))]
    Transport(#[from] reqwest::Error),
    /// The body was not a valid JSON record.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The health probe answered but reported `ok: false`.
    #[error("API reported unhealthy")]
    Unhealthy,
    /// Failure raised by a custom question source.
    #[error("{0}")]
    Other(String),
}

/// `err` followed by each `source()` whose text is not already present.
fn with_causes(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
