//! Ollama-compatible `/api/generate` client.

use std::time::Duration;

use potato_config::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::http::check_response;
use crate::TextGenerator;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// HTTP client for a single model on an Ollama-compatible server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client from the `[llm]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, GenerateError> {
        Self::with_timeout(config.generate_url(), &config.model, config.timeout())
    }

    /// Build a client for a full generate URL with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Transport`] if the HTTP client cannot be built.
    pub fn with_timeout(
        url: impl Into<String>,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
            model: model.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        tracing::debug!(url = %self.url, model = %self.model, prompt_len = prompt.len(), "generate request");

        let resp = check_response(self.http.post(&self.url).json(&body).send().await?).await?;
        let data: GenerateResponse = resp.json().await?;
        Ok(data.response.trim().to_string())
    }
}
