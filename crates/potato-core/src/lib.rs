//! # potato-core
//!
//! Core types shared across all AskPOTATO crates:
//! - Entity structs for the QA tracking store (scenarios, steps, defects, proofs)
//! - Step and defect status enums with their SQL representations
//! - The closed intent vocabulary and its validator ([`intent::Intent::detect`])
//! - Structured retrieval results handed from the store to the renderer
//! - CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod facts;
pub mod intent;
pub mod responses;
