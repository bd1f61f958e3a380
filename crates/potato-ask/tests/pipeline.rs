//! End-to-end question answering over an in-memory store and a scripted generator.

use std::sync::Arc;

use potato_ask::explainer::{TIMEOUT_MESSAGE, UNREACHABLE_MESSAGE};
use potato_ask::pipeline::{EMPTY_QUESTION_MESSAGE, UNKNOWN_INTENT_MESSAGE};
use potato_ask::{AskPipeline, ExplanationCache, ExplanationRenderer, KeywordNormalizer, ModelNormalizer};
use potato_config::{ClassifierKind, PotatoConfig};
use potato_core::intent::Intent;
use potato_db::PotatoDb;
use potato_llm::GenerateError;
use potato_llm::mock::ScriptedGenerator;
use pretty_assertions::assert_eq;

type ModelPipeline<'a> =
    AskPipeline<ModelNormalizer<Arc<ScriptedGenerator>>, &'a PotatoDb, Arc<ScriptedGenerator>>;

async fn seeded_db() -> PotatoDb {
    let db = PotatoDb::open_local(":memory:").await.unwrap();
    db.seed_sample_data().await.unwrap();
    db
}

fn model_pipeline<'a>(db: &'a PotatoDb, generator: &Arc<ScriptedGenerator>) -> ModelPipeline<'a> {
    AskPipeline::new(
        ModelNormalizer::new(Arc::clone(generator)),
        db,
        ExplanationRenderer::new(Arc::clone(generator), ExplanationCache::new(100)),
    )
}

#[tokio::test]
async fn blank_question_touches_nothing() {
    let db = seeded_db().await;
    let generator = Arc::new(ScriptedGenerator::replying("OPEN_DEFECTS"));
    let response = model_pipeline(&db, &generator).ask("   ").await;

    assert_eq!(response.answer, EMPTY_QUESTION_MESSAGE);
    assert_eq!(response.intent, None);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn open_defects_flow_grounds_the_prompt() {
    let db = seeded_db().await;
    let generator = Arc::new(
        ScriptedGenerator::replying("unused")
            .then(Ok(" open_defects ".into()))
            .then(Ok("- Three open defects, one per scenario.".into())),
    );
    let response = model_pipeline(&db, &generator)
        .ask("  which bugs are still open?  ")
        .await;

    assert_eq!(response.question, "which bugs are still open?");
    assert_eq!(response.intent, Some(Intent::OpenDefects));
    assert_eq!(response.answer, "- Three open defects, one per scenario.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("Intent:\nOPEN_DEFECTS"));
    assert!(prompts[1].contains("Issue in Login Functionality Test - Step 1"));
    assert!(prompts[1].contains("\"reported_by\": \"Jane Smith\""));
}

#[tokio::test]
async fn unknown_intent_gets_friendly_message() {
    let db = seeded_db().await;
    let generator = Arc::new(ScriptedGenerator::replying("WEATHER_REPORT"));
    let response = model_pipeline(&db, &generator).ask("is it raining?").await;

    assert_eq!(response.intent, None);
    assert_eq!(response.answer, UNKNOWN_INTENT_MESSAGE);
    assert_eq!(generator.calls(), 1);
    assert_eq!(
        serde_json::to_value(&response).unwrap()["intent"],
        "UNKNOWN"
    );
}

#[tokio::test]
async fn classification_timeout_degrades_to_unknown() {
    let db = seeded_db().await;
    let generator = Arc::new(ScriptedGenerator::failing(GenerateError::Timeout));
    let response = model_pipeline(&db, &generator).ask("open defects").await;

    assert_eq!(response.intent, None);
    assert_eq!(response.answer, UNKNOWN_INTENT_MESSAGE);
}

#[tokio::test]
async fn empty_store_answers_without_explanation_call() {
    let db = PotatoDb::open_local(":memory:").await.unwrap();
    let generator = Arc::new(ScriptedGenerator::replying("FAILED_STEPS"));
    let response = model_pipeline(&db, &generator).ask("what failed?").await;

    assert_eq!(response.intent, Some(Intent::FailedSteps));
    assert_eq!(response.answer, "No failed steps.");
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn explanation_failures_keep_the_intent() {
    let db = seeded_db().await;

    let slow = Arc::new(
        ScriptedGenerator::failing(GenerateError::Timeout).then(Ok("LIST_SCENARIOS".into())),
    );
    let response = model_pipeline(&db, &slow).ask("list scenarios").await;
    assert_eq!(response.intent, Some(Intent::ListScenarios));
    assert_eq!(response.answer, TIMEOUT_MESSAGE);

    let down = Arc::new(
        ScriptedGenerator::failing(GenerateError::Unreachable("refused".into()))
            .then(Ok("LIST_SCENARIOS".into())),
    );
    let response = model_pipeline(&db, &down).ask("list scenarios").await;
    assert_eq!(response.answer, UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn repeated_question_uses_cache_until_data_changes() {
    let db = seeded_db().await;
    let generator = Arc::new(
        ScriptedGenerator::replying("OPEN_DEFECTS")
            .then(Ok("OPEN_DEFECTS".into()))
            .then(Ok("three open".into()))
            .then(Ok("OPEN_DEFECTS".into()))
            .then(Ok("OPEN_DEFECTS".into()))
            .then(Ok("four open".into())),
    );
    let pipeline = model_pipeline(&db, &generator);

    assert_eq!(pipeline.ask("open defects?").await.answer, "three open");
    assert_eq!(pipeline.ask("open defects?").await.answer, "three open");
    assert_eq!(generator.calls(), 3);

    let scenario = db.list_scenarios(1, 1).await.unwrap().scenarios.remove(0);
    db.add_defect(scenario.id, 2, "Spinner never stops", None)
        .await
        .unwrap();

    assert_eq!(pipeline.ask("open defects?").await.answer, "four open");
    assert_eq!(generator.calls(), 5);
}

#[tokio::test]
async fn keyword_pipeline_only_calls_generator_to_explain() {
    let db = seeded_db().await;
    let generator = Arc::new(ScriptedGenerator::replying("- 15 steps lack proof"));
    let pipeline = AskPipeline::new(
        KeywordNormalizer,
        &db,
        ExplanationRenderer::new(Arc::clone(&generator), ExplanationCache::new(10)),
    );

    let response = pipeline.ask("Which steps need evidence?").await;
    assert_eq!(response.intent, Some(Intent::NoProofSteps));
    assert_eq!(response.answer, "- 15 steps lack proof");
    assert_eq!(generator.calls(), 1);
    assert!(generator.prompts()[0].contains("Intent:\nNO_PROOF_STEPS"));
}

#[tokio::test]
async fn from_config_builds_keyword_pipeline() {
    let db = seeded_db().await;
    let mut config = PotatoConfig::default();
    config.ask.classifier = ClassifierKind::Keywords;
    // Nothing listens here; only the explanation step would notice.
    config.llm.base_url = "http://127.0.0.1:9".into();

    let pipeline = potato_ask::OllamaPipeline::from_config(&config, &db).unwrap();
    let response = pipeline.ask("hello there").await;
    assert_eq!(response.intent, None);
    assert_eq!(response.answer, UNKNOWN_INTENT_MESSAGE);
}
