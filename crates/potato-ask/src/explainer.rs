//! Facts to prose.
//!
//! Empty facts short-circuit to the intent's fixed message. Otherwise the
//! question, intent label and pretty-printed facts are embedded in a fixed
//! prompt and sent to the text generator, with the answer cached by prompt.
//! No failure escapes: each class maps to its own fixed message.

use potato_core::facts::Facts;
use potato_llm::{GenerateError, TextGenerator};
use thiserror::Error;

use crate::cache::ExplanationCache;

pub const TIMEOUT_MESSAGE: &str = "AI is taking too long to respond. Please try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Cannot connect to AI service. Make sure the model server is running.";
pub const NO_RESPONSE_MESSAGE: &str = "AI returned no response.";

#[derive(Debug, Error)]
enum RenderFailure {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("empty generation")]
    Empty,
}

/// Rendering prompt for `question` answered from `facts`.
///
/// # Errors
///
/// Returns the `serde_json` error if the facts cannot be serialized.
pub fn explanation_prompt(question: &str, facts: &Facts) -> Result<String, serde_json::Error> {
    let data = facts.to_prompt_json()?;
    let intent = facts.intent();
    Ok(format!(
        "You are AskPOTATO, an internal QA assistant.\n\n\
         Rules:\n\
         - Explain ONLY using the provided data\n\
         - Do NOT invent facts\n\
         - Be concise and clear\n\
         - No greetings or sign-offs\n\
         - Use bullet points if listing multiple items\n\n\
         User question:\n\
         {question}\n\n\
         Intent:\n\
         {intent}\n\n\
         Data:\n\
         {data}\n\n\
         Answer:"
    ))
}

fn failure_message(failure: &RenderFailure) -> String {
    match failure {
        RenderFailure::Empty => {
            tracing::error!("text generator returned an empty explanation");
            NO_RESPONSE_MESSAGE.to_string()
        }
        RenderFailure::Generate(GenerateError::Timeout) => {
            tracing::error!("explanation request timed out");
            TIMEOUT_MESSAGE.to_string()
        }
        RenderFailure::Generate(GenerateError::Unreachable(detail)) => {
            tracing::error!(%detail, "cannot reach text generation service");
            UNREACHABLE_MESSAGE.to_string()
        }
        RenderFailure::Generate(GenerateError::Status { status, message }) => {
            tracing::error!(status, %message, "text generation service returned an error status");
            format!("AI error: HTTP {status}")
        }
        RenderFailure::Generate(other) => {
            tracing::error!(error = %other, "explanation failed");
            format!("AI explanation failed: {other}")
        }
    }
}

/// Turns retrieved facts into an answer through the text generator.
#[derive(Debug, Clone)]
pub struct ExplanationRenderer<G> {
    generator: G,
    cache: ExplanationCache,
}

impl<G: TextGenerator> ExplanationRenderer<G> {
    pub const fn new(generator: G, cache: ExplanationCache) -> Self {
        Self { generator, cache }
    }

    #[must_use]
    pub const fn cache(&self) -> &ExplanationCache {
        &self.cache
    }

    pub async fn explain(&self, question: &str, facts: &Facts) -> String {
        if facts.is_empty() {
            return facts.intent().empty_message().to_string();
        }

        let prompt = match explanation_prompt(question, facts) {
            Ok(prompt) => prompt,
            Err(error) => {
                tracing::error!(%error, "failed to serialize facts");
                return format!("AI explanation failed: {error}");
            }
        };

        let generation = async {
            let text = self.generator.generate(&prompt).await?;
            if text.trim().is_empty() {
                Err(RenderFailure::Empty)
            } else {
                Ok(text)
            }
        };

        match self.cache.get_or_try_insert(prompt.clone(), generation).await {
            Ok(text) => text,
            Err(failure) => failure_message(&failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potato_core::facts::ScenarioDefectCount;
    use potato_core::intent::Intent;
    use potato_llm::mock::ScriptedGenerator;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    fn renderer(generator: &Arc<ScriptedGenerator>) -> ExplanationRenderer<Arc<ScriptedGenerator>> {
        ExplanationRenderer::new(Arc::clone(generator), ExplanationCache::new(10))
    }

    fn names(list: &[&str]) -> Facts {
        Facts::Scenarios(list.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn prompt_embeds_question_intent_and_data() {
        let facts = Facts::MostDefects(Some(ScenarioDefectCount {
            name: "Checkout".into(),
            defect_count: 5,
        }));
        let prompt = explanation_prompt("worst scenario?", &facts).unwrap();
        assert!(prompt.starts_with("You are AskPOTATO, an internal QA assistant."));
        assert!(prompt.contains("- Do NOT invent facts"));
        assert!(prompt.contains("User question:\nworst scenario?\n"));
        assert!(prompt.contains("Intent:\nMOST_DEFECTS_SCENARIO\n"));
        assert!(prompt.contains("\"defect_count\": 5"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[rstest]
    #[case(Intent::ListScenarios, "No scenarios found.")]
    #[case(Intent::MostDefectsScenario, "No defects found.")]
    #[case(Intent::OpenDefects, "No open defects.")]
    #[case(Intent::FailedSteps, "No failed steps.")]
    #[case(Intent::NoProofSteps, "All steps have proof uploaded.")]
    #[tokio::test]
    async fn empty_facts_skip_the_generator(#[case] intent: Intent, #[case] expected: &str) {
        let generator = Arc::new(ScriptedGenerator::replying("should not be used"));
        let answer = renderer(&generator).explain("q", &Facts::empty(intent)).await;
        assert_eq!(answer, expected);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn identical_prompt_hits_cache() {
        let generator = Arc::new(ScriptedGenerator::replying("- Login\n- Checkout"));
        let renderer = renderer(&generator);
        let facts = names(&["Login", "Checkout"]);

        let first = renderer.explain("list scenarios", &facts).await;
        let second = renderer.explain("list scenarios", &facts).await;
        assert_eq!(first, "- Login\n- Checkout");
        assert_eq!(second, first);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn changed_data_is_not_served_from_cache() {
        let generator = Arc::new(
            ScriptedGenerator::replying("unused")
                .then(Ok("Checkout has 2 defects.".into()))
                .then(Ok("Checkout has 3 defects.".into())),
        );
        let renderer = renderer(&generator);
        let count = |n| {
            Facts::MostDefects(Some(ScenarioDefectCount {
                name: "Checkout".into(),
                defect_count: n,
            }))
        };

        let before = renderer.explain("most defects?", &count(2)).await;
        let after = renderer.explain("most defects?", &count(3)).await;
        assert_eq!(before, "Checkout has 2 defects.");
        assert_eq!(after, "Checkout has 3 defects.");
        assert_eq!(generator.calls(), 2);
    }

    #[rstest]
    #[case(GenerateError::Timeout, TIMEOUT_MESSAGE)]
    #[case(GenerateError::Unreachable("connection refused".into()), UNREACHABLE_MESSAGE)]
    #[case(GenerateError::Status { status: 503, message: "busy".into() }, "AI error: HTTP 503")]
    #[case(GenerateError::Malformed("expected value".into()), "AI explanation failed: malformed response: expected value")]
    #[tokio::test]
    async fn failures_map_to_fixed_messages(#[case] error: GenerateError, #[case] expected: &str) {
        let generator = Arc::new(ScriptedGenerator::failing(error));
        let answer = renderer(&generator).explain("q", &names(&["Login"])).await;
        assert_eq!(answer, expected);
    }

    #[tokio::test]
    async fn timeout_and_unreachable_are_distinct() {
        let timeout = Arc::new(ScriptedGenerator::failing(GenerateError::Timeout));
        let refused = Arc::new(ScriptedGenerator::failing(GenerateError::Unreachable(
            "refused".into(),
        )));
        let facts = names(&["Login"]);

        let a = renderer(&timeout).explain("q", &facts).await;
        let b = renderer(&refused).explain("q", &facts).await;
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn empty_generation_has_its_own_message_and_is_retried() {
        let generator = Arc::new(
            ScriptedGenerator::replying("- Login").then(Ok("   ".into())),
        );
        let renderer = renderer(&generator);
        let facts = names(&["Login"]);

        assert_eq!(renderer.explain("q", &facts).await, NO_RESPONSE_MESSAGE);
        assert_eq!(renderer.explain("q", &facts).await, "- Login");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let generator = Arc::new(
            ScriptedGenerator::replying("- Login").then(Err(GenerateError::Timeout)),
        );
        let renderer = renderer(&generator);
        let facts = names(&["Login"]);

        assert_eq!(renderer.explain("q", &facts).await, TIMEOUT_MESSAGE);
        assert_eq!(renderer.explain("q", &facts).await, "- Login");
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_call() {
        let generator = Arc::new(
            ScriptedGenerator::replying("- Login").with_delay(std::time::Duration::from_millis(50)),
        );
        let renderer = renderer(&generator);
        let facts = names(&["Login"]);

        let (a, b, c) = tokio::join!(
            renderer.explain("q", &facts),
            renderer.explain("q", &facts),
            renderer.explain("q", &facts),
        );
        assert_eq!(a, "- Login");
        assert_eq!(b, a);
        assert_eq!(c, a);
        assert_eq!(generator.calls(), 1);
    }
}
