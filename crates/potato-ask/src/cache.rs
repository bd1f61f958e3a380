//! Bounded explanation cache keyed by the exact rendered prompt.
//!
//! Backed by a moka future cache with LRU eviction. Only successful
//! generations are stored, and concurrent misses on the same prompt share
//! one generation call.

use std::future::Future;
use std::sync::Arc;

use moka::future::Cache;
use moka::policy::EvictionPolicy;

#[derive(Debug, Clone)]
pub struct ExplanationCache {
    inner: Cache<String, String>,
}

impl ExplanationCache {
    /// Cache holding at most `capacity` explanations.
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .eviction_policy(EvictionPolicy::lru())
                .build(),
        }
    }

    /// Cached explanation for `prompt`, or run `init` and cache its success.
    ///
    /// An error from `init` is returned to every waiter and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the shared error produced by `init`.
    pub async fn get_or_try_insert<F, E>(&self, prompt: String, init: F) -> Result<String, Arc<E>>
    where
        F: Future<Output = Result<String, E>>,
        E: Send + Sync + 'static,
    {
        self.inner.try_get_with(prompt, init).await
    }

    pub async fn get(&self, prompt: &str) -> Option<String> {
        self.inner.get(prompt).await
    }

    /// Approximate number of entries; call [`Self::run_pending_tasks`] first
    /// for an exact figure.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Apply pending inserts and evictions.
    pub async fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks().await;
    }
}
