//! Structured retrieval results.
//!
//! A [`Facts`] value is what a retrieval handler hands to the explanation
//! renderer: a small list or scalar record, never prose. Its JSON form is
//! embedded verbatim in the rendering prompt, so field order is fixed by the
//! struct definitions and output is pretty-printed for readability.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// The scenario with the highest defect count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioDefectCount {
    pub name: String,
    pub defect_count: u32,
}

/// An open defect joined to its scenario's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenDefect {
    pub title: String,
    pub reported_by: Option<String>,
    pub scenario: String,
}

/// A step joined to its scenario's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRef {
    pub step_name: String,
    pub step_number: u32,
    pub scenario: String,
}

/// Result of one retrieval, tagged by the intent that produced it.
///
/// Serializes untagged: the prompt sees only the inner data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Facts {
    Scenarios(Vec<String>),
    MostDefects(Option<ScenarioDefectCount>),
    OpenDefects(Vec<OpenDefect>),
    FailedSteps(Vec<StepRef>),
    StepsWithoutProof(Vec<StepRef>),
}

impl Facts {
    /// The empty result for `intent`.
    #[must_use]
    pub const fn empty(intent: Intent) -> Self {
        match intent {
            Intent::ListScenarios => Self::Scenarios(Vec::new()),
            Intent::MostDefectsScenario => Self::MostDefects(None),
            Intent::OpenDefects => Self::OpenDefects(Vec::new()),
            Intent::FailedSteps => Self::FailedSteps(Vec::new()),
            Intent::NoProofSteps => Self::StepsWithoutProof(Vec::new()),
        }
    }

    #[must_use]
    pub const fn intent(&self) -> Intent {
        match self {
            Self::Scenarios(_) => Intent::ListScenarios,
            Self::MostDefects(_) => Intent::MostDefectsScenario,
            Self::OpenDefects(_) => Intent::OpenDefects,
            Self::FailedSteps(_) => Intent::FailedSteps,
            Self::StepsWithoutProof(_) => Intent::NoProofSteps,
        }
    }

    /// Number of records carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scenarios(names) => names.len(),
            Self::MostDefects(top) => usize::from(top.is_some()),
            Self::OpenDefects(defects) => defects.len(),
            Self::FailedSteps(steps) | Self::StepsWithoutProof(steps) => steps.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stable, human-readable JSON for prompt embedding.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; the fact types contain only strings and
    /// integers, so this does not fail in practice.
    pub fn to_prompt_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_matches_intent() {
        for intent in Intent::ALL {
            let facts = Facts::empty(intent);
            assert_eq!(facts.intent(), intent);
            assert!(facts.is_empty());
        }
    }

    #[test]
    fn most_defects_counts_as_single_record() {
        let facts = Facts::MostDefects(Some(ScenarioDefectCount {
            name: "Checkout".into(),
            defect_count: 5,
        }));
        assert_eq!(facts.len(), 1);
        assert!(!facts.is_empty());
    }

    #[test]
    fn prompt_json_is_untagged_and_ordered() {
        let facts = Facts::FailedSteps(vec![StepRef {
            step_name: "Step 2".into(),
            step_number: 2,
            scenario: "Login".into(),
        }]);
        let json = facts.to_prompt_json().unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"step_name\": \"Step 2\",\n    \"step_number\": 2,\n    \"scenario\": \"Login\"\n  }\n]"
        );
    }

    #[test]
    fn prompt_json_for_scalar_record() {
        let facts = Facts::MostDefects(Some(ScenarioDefectCount {
            name: "B".into(),
            defect_count: 5,
        }));
        let value: serde_json::Value =
            serde_json::from_str(&facts.to_prompt_json().unwrap()).unwrap();
        assert_eq!(value["name"], "B");
        assert_eq!(value["defect_count"], 5);
    }
}
