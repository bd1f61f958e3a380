//! Text-generation service configuration.
//!
//! The service is any Ollama-compatible endpoint: requests go to
//! `{base_url}/api/generate`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_base_url() -> String {
    String::from("http://localhost:11434")
}

fn default_model() -> String {
    String::from("llama3")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

/// Default number of cached explanations.
const fn default_cache_capacity() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Service base address, without the `/api/generate` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of rendered explanations kept in memory.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the generate endpoint.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LlmConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.cache_capacity, 100);
    }

    #[test]
    fn generate_url_tolerates_trailing_slash() {
        let config = LlmConfig {
            base_url: "http://gpu-box:11434/".into(),
            ..Default::default()
        };
        assert_eq!(config.generate_url(), "http://gpu-box:11434/api/generate");
    }
}
