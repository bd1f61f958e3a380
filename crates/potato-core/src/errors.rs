//! Cross-cutting error types for AskPOTATO.
//!
//! Domain-specific errors (`DatabaseError`, `GenerateError`, `ConfigError`)
//! live in their respective crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any AskPOTATO crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (length, emptiness, vocabulary membership).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A status string did not match any known variant.
    #[error("Unknown {kind} status: '{value}'")]
    UnknownStatus { kind: &'static str, value: String },
}
