//! Response types returned as JSON by `potato` commands.

use serde::{Deserialize, Serialize};

use crate::entities::{Defect, Proof, Scenario, Step};
use crate::intent::{Intent, serialize_label};

/// Response from `potato ask`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AskResponse {
    pub question: String,
    /// Resolved intent, `UNKNOWN` when the question fell outside the vocabulary.
    #[serde(serialize_with = "serialize_label")]
    pub intent: Option<Intent>,
    pub answer: String,
}

/// One page of `potato scenario list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioPage {
    pub scenarios: Vec<Scenario>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Response from `potato scenario get`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioDetail {
    pub scenario: Scenario,
    pub steps: Vec<Step>,
    pub defects: Vec<Defect>,
    pub proofs: Vec<Proof>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_response_writes_unknown_label() {
        let resp = AskResponse {
            question: "what is the weather".into(),
            intent: None,
            answer: "nope".into(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["intent"], "UNKNOWN");
    }

    #[test]
    fn ask_response_writes_intent_label() {
        let resp = AskResponse {
            question: "open bugs?".into(),
            intent: Some(Intent::OpenDefects),
            answer: "- Crash on login".into(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["intent"], "OPEN_DEFECTS");
    }
}
