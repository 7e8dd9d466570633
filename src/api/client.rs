//! reqwest-backed client for the trivia API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::Question;

use super::FetchError;

const RANDOM_QUESTION_PATH: &str = "/questions/random";
const HEALTH_PATH: &str = "/healthz";

/// Anything that can hand the viewer one random question.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn random_question(&self) -> Result<Question, FetchError>;
}

#[derive(Debug, Deserialize)]
struct HealthStatus {
    ok: bool,
}

/// Client for the trivia HTTP API.
///
/// No timeout and no retries are configured: a request lives until the
/// server or the network ends it.
#[derive(Debug, Clone)]
pub struct TriviaClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl TriviaClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// `GET /questions/random`.
    pub async fn fetch_random(&self) -> Result<Question, FetchError> {
        let body = self.get_body(RANDOM_QUESTION_PATH).await?;
        let question: Question = serde_json::from_str(&body)?;
        Ok(question)
    }

    /// `GET /healthz`. Succeeds only when the API answers `{"ok": true}`.
    pub async fn health(&self) -> Result<(), FetchError> {
        let body = self.get_body(HEALTH_PATH).await?;
        let status: HealthStatus = serde_json::from_str(&body)?;
        if status.ok {
            Ok(())
        } else {
            Err(FetchError::Unhealthy)
        }
    }

    async fn get_body(&self, path: &str) -> Result<String, FetchError> {
        let url = self.config.endpoint(path);
        debug!(%url, "sending request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuestionSource for TriviaClient {
    async fn random_question(&self) -> Result<Question, FetchError> {
        self.fetch_random().await
    }
}
