//! Deterministic in-process generator for tests.
//!
//! Replies are queued and consumed in order; once the queue is empty every
//! call gets the fallback reply. Every prompt received is recorded.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::{GenerateError, TextGenerator};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scripted [`TextGenerator`] with call recording.
#[derive(Debug)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    fallback: Result<String, GenerateError>,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Generator that answers every prompt with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::always(Ok(reply.into()))
    }

    /// Generator that fails every prompt with `error`.
    #[must_use]
    pub fn failing(error: GenerateError) -> Self {
        Self::always(Err(error))
    }

    /// Generator that returns `outcome` once the queue is exhausted.
    #[must_use]
    pub fn always(outcome: Result<String, GenerateError>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: outcome,
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a one-shot outcome ahead of the fallback.
    #[must_use]
    pub fn then(self, outcome: Result<String, GenerateError>) -> Self {
        lock(&self.replies).push_back(outcome);
        self
    }

    /// Sleep before answering, to simulate a slow service.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        lock(&self.prompts).push(prompt.to_string());
        let outcome = lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        outcome
    }
}
