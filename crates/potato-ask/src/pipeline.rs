//! The question pipeline: normalize, validate, retrieve, explain.

use std::sync::Arc;

use potato_config::PotatoConfig;
use potato_core::intent::Intent;
use potato_core::responses::AskResponse;
use potato_db::retrieval::TrackingReader;
use potato_llm::{GenerateError, OllamaClient, TextGenerator};

use crate::cache::ExplanationCache;
use crate::explainer::ExplanationRenderer;
use crate::normalizer::{IntentNormalizer, SelectedNormalizer};
use crate::retrieval::RetrievalDispatcher;

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const UNKNOWN_INTENT_MESSAGE: &str = "I didn't quite understand that. Try asking about scenarios, defects, failed steps, or missing proofs.";

/// One-way question answering over a tracking store.
#[derive(Debug, Clone)]
pub struct AskPipeline<N, R, G> {
    normalizer: N,
    dispatcher: RetrievalDispatcher<R>,
    renderer: ExplanationRenderer<G>,
}

/// Pipeline wired to an Ollama-compatible server, as configured.
pub type OllamaPipeline<R> =
    AskPipeline<SelectedNormalizer<Arc<OllamaClient>>, R, Arc<OllamaClient>>;

impl<N, R, G> AskPipeline<N, R, G>
where
    N: IntentNormalizer,
    R: TrackingReader,
    G: TextGenerator,
{
    pub const fn new(normalizer: N, reader: R, renderer: ExplanationRenderer<G>) -> Self {
        Self {
            normalizer,
            dispatcher: RetrievalDispatcher::new(reader),
            renderer,
        }
    }

    #[must_use]
    pub const fn renderer(&self) -> &ExplanationRenderer<G> {
        &self.renderer
    }

    /// Answer `question`. Never fails; every failure becomes a fixed message.
    pub async fn ask(&self, question: &str) -> AskResponse {
        let question = question.trim();
        if question.is_empty() {
            return AskResponse {
                question: String::new(),
                intent: None,
                answer: EMPTY_QUESTION_MESSAGE.to_string(),
            };
        }
        tracing::info!(question, "question asked");

        let candidate = self.normalizer.normalize(question).await;
        let Some(intent) = Intent::detect(&candidate) else {
            tracing::info!(question, candidate = %candidate, "question not understood");
            return AskResponse {
                question: question.to_string(),
                intent: None,
                answer: UNKNOWN_INTENT_MESSAGE.to_string(),
            };
        };

        let facts = self.dispatcher.retrieve(intent).await;
        let answer = self.renderer.explain(question, &facts).await;
        AskResponse {
            question: question.to_string(),
            intent: Some(intent),
            answer,
        }
    }
}

impl<R: TrackingReader> OllamaPipeline<R> {
    /// Build the configured pipeline: one shared HTTP client for
    /// classification and explanation, classifier per `ask.classifier`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &PotatoConfig, reader: R) -> Result<Self, GenerateError> {
        let client = Arc::new(OllamaClient::new(&config.llm)?);
        let normalizer = SelectedNormalizer::from_kind(config.ask.classifier, Arc::clone(&client));
        let renderer = ExplanationRenderer::new(client, ExplanationCache::new(config.llm.cache_capacity));
        Ok(Self::new(normalizer, reader, renderer))
    }
}
