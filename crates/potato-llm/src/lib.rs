//! # potato-llm
//!
//! The external text-generation capability used by AskPOTATO.
//!
//! [`TextGenerator`] is the narrow seam: prompt in, text out, fallible, and
//! time-bounded by the implementation. [`OllamaClient`] talks to any
//! Ollama-compatible `/api/generate` endpoint. [`mock::ScriptedGenerator`]
//! is a deterministic in-process implementation for tests.

mod error;
mod http;
pub mod mock;
mod ollama;

pub use error::GenerateError;
pub use ollama::OllamaClient;

use std::future::Future;
use std::sync::Arc;

/// Something that turns a prompt into generated text.
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Implementations enforce their own timeout and report it as
    /// [`GenerateError::Timeout`].
    fn generate(&self, prompt: &str)
    -> impl Future<Output = Result<String, GenerateError>> + Send;
}

impl<T: TextGenerator> TextGenerator for Arc<T> {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send {
        (**self).generate(prompt)
    }
}
