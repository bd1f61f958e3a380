//! Intent to facts.
//!
//! Each intent has exactly one handler over the tracking store. Handlers are
//! total: a storage error is logged and answered with the intent's empty
//! result, so a broken store reads as "nothing found".

use potato_core::facts::Facts;
use potato_core::intent::Intent;
use potato_db::retrieval::TrackingReader;

/// Routes an intent to its retrieval query.
#[derive(Debug, Clone)]
pub struct RetrievalDispatcher<R> {
    reader: R,
}

impl<R: TrackingReader> RetrievalDispatcher<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    pub async fn retrieve(&self, intent: Intent) -> Facts {
        let result = match intent {
            Intent::ListScenarios => self.reader.scenario_names().await.map(Facts::Scenarios),
            Intent::MostDefectsScenario => self
                .reader
                .most_defects_scenario()
                .await
                .map(Facts::MostDefects),
            Intent::OpenDefects => self.reader.open_defects().await.map(Facts::OpenDefects),
            Intent::FailedSteps => self.reader.failed_steps().await.map(Facts::FailedSteps),
            Intent::NoProofSteps => self
                .reader
                .steps_without_proof()
                .await
                .map(Facts::StepsWithoutProof),
        };

        match result {
            Ok(facts) => {
                tracing::debug!(intent = %intent, records = facts.len(), "facts retrieved");
                facts
            }
            Err(error) => {
                tracing::error!(intent = %intent, %error, "retrieval failed, answering with empty result");
                Facts::empty(intent)
            }
        }
    }
}
