//! Question to intent label.
//!
//! A normalizer returns a *candidate* label: one of the vocabulary labels or
//! [`UNKNOWN_LABEL`]. It never fails. The pipeline still runs the candidate
//! through [`Intent::detect`], so a normalizer that skips sanitization cannot
//! leak an unsupported label downstream.

use std::cmp::Reverse;
use std::future::Future;
use std::sync::Arc;

use potato_config::ClassifierKind;
use potato_core::intent::{Intent, UNKNOWN_LABEL};
use potato_llm::{GenerateError, TextGenerator};

/// Maps free text onto the intent vocabulary.
pub trait IntentNormalizer {
    /// Candidate label for `question`, `UNKNOWN` when unsure or on failure.
    fn normalize(&self, question: &str) -> impl Future<Output = String>;
}

/// Keep only `A-Z` and `_` after upper-casing.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '_')
        .collect()
}

/// Classification prompt listing every supported label.
#[must_use]
pub fn classification_prompt(question: &str) -> String {
    let labels: String = Intent::ALL
        .iter()
        .map(|intent| format!("- {intent}\n"))
        .collect();
    format!(
        "Normalize the user question into EXACTLY ONE of the following intent KEYS:\n\n\
         {labels}\n\
         Rules:\n\
         - Output ONLY the intent key\n\
         - No punctuation\n\
         - No explanation\n\
         - If unsure, output {UNKNOWN_LABEL}\n\n\
         User question:\n\
         {question}\n\n\
         Output:"
    )
}

// ---------------------------------------------------------------------------
// ModelNormalizer
// ---------------------------------------------------------------------------

/// Asks the text generator to classify the question.
#[derive(Debug, Clone)]
pub struct ModelNormalizer<G> {
    generator: G,
}

impl<G: TextGenerator> ModelNormalizer<G> {
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G: TextGenerator> IntentNormalizer for ModelNormalizer<G> {
    async fn normalize(&self, question: &str) -> String {
        let raw = match self.generator.generate(&classification_prompt(question)).await {
            Ok(raw) => raw,
            Err(GenerateError::Timeout) => {
                tracing::error!("intent classification timed out");
                return UNKNOWN_LABEL.to_string();
            }
            Err(GenerateError::Unreachable(detail)) => {
                tracing::error!(%detail, "text generation service unreachable during classification");
                return UNKNOWN_LABEL.to_string();
            }
            Err(error) => {
                tracing::error!(%error, "intent classification failed");
                return UNKNOWN_LABEL.to_string();
            }
        };

        let candidate = sanitize(&raw);
        if Intent::detect(&candidate).is_some() {
            tracing::info!(question, intent = %candidate, "question normalized");
            candidate
        } else {
            tracing::warn!(question, raw = %raw, sanitized = %candidate, "classifier answered outside the vocabulary");
            UNKNOWN_LABEL.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// KeywordNormalizer
// ---------------------------------------------------------------------------

/// Local classifier matching each intent's example phrases. No network.
///
/// The longest phrase found in the question wins; earlier intents win ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordNormalizer;

impl KeywordNormalizer {
    /// Lowercase, turn punctuation into spaces, and collapse whitespace.
    fn fold(text: &str) -> String {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn classify(question: &str) -> Option<Intent> {
        let padded = format!(" {} ", Self::fold(question));
        Intent::ALL
            .into_iter()
            .flat_map(|intent| intent.examples().iter().map(move |phrase| (intent, *phrase)))
            .filter(|(_, phrase)| padded.contains(&format!(" {phrase} ")))
            .min_by_key(|(_, phrase)| Reverse(phrase.len()))
            .map(|(intent, _)| intent)
    }
}

impl IntentNormalizer for KeywordNormalizer {
    async fn normalize(&self, question: &str) -> String {
        match Self::classify(question) {
            Some(intent) => {
                tracing::info!(question, intent = %intent, "question matched by keyword");
                intent.as_str().to_string()
            }
            None => {
                tracing::warn!(question, "no keyword matched");
                UNKNOWN_LABEL.to_string()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SelectedNormalizer
// ---------------------------------------------------------------------------

/// Normalizer chosen at runtime from `ask.classifier`.
#[derive(Debug, Clone)]
pub enum SelectedNormalizer<G> {
    Model(ModelNormalizer<G>),
    Keywords(KeywordNormalizer),
}

impl<G: TextGenerator> SelectedNormalizer<G> {
    pub fn from_kind(kind: ClassifierKind, generator: G) -> Self {
        match kind {
            ClassifierKind::Model => Self::Model(ModelNormalizer::new(generator)),
            ClassifierKind::Keywords => Self::Keywords(KeywordNormalizer),
        }
    }
}

impl<G: TextGenerator> IntentNormalizer for SelectedNormalizer<G> {
    async fn normalize(&self, question: &str) -> String {
        match self {
            Self::Model(inner) => inner.normalize(question).await,
            Self::Keywords(inner) => inner.normalize(question).await,
        }
    }
}

impl<T: IntentNormalizer> IntentNormalizer for Arc<T> {
    fn normalize(&self, question: &str) -> impl Future<Output = String> {
        (**self).normalize(question)
    }
}
