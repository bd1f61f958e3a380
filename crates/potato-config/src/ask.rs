//! Question pipeline configuration.

use serde::{Deserialize, Serialize};

/// Which component turns a question into an intent label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Ask the text-generation service.
    #[default]
    Model,
    /// Match the question against each intent's example phrasings locally.
    Keywords,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AskConfig {
    #[serde(default)]
    pub classifier: ClassifierKind,
}
