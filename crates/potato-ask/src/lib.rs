//! # potato-ask
//!
//! Turns a free-text question about the tracking store into a grounded answer.
//!
//! The pipeline runs one way:
//!
//! 1. [`normalizer`]: question to candidate intent label (model-backed or
//!    keyword-backed), sanitized, `UNKNOWN` on any failure.
//! 2. [`potato_core::intent::Intent::detect`]: strict membership check.
//! 3. [`retrieval`]: one read-only query per intent, storage errors become
//!    empty results.
//! 4. [`explainer`]: facts to prose through the text generator, cached by
//!    exact prompt, every failure mapped to a fixed message.
//!
//! [`AskPipeline::ask`] never fails; the worst case is a fixed apology.

pub mod cache;
pub mod explainer;
pub mod normalizer;
pub mod pipeline;
pub mod retrieval;

pub use cache::ExplanationCache;
pub use explainer::ExplanationRenderer;
pub use normalizer::{IntentNormalizer, KeywordNormalizer, ModelNormalizer, SelectedNormalizer};
pub use pipeline::{AskPipeline, OllamaPipeline};
pub use retrieval::RetrievalDispatcher;
