//! The closed intent vocabulary.
//!
//! Every question the assistant can answer maps onto exactly one [`Intent`].
//! Anything else is unknown, which is modelled as `None` at the type level and
//! rendered as [`UNKNOWN_LABEL`] on the wire.
//!
//! [`Intent::detect`] is the validator: a pure, total parse from a candidate
//! label into the vocabulary. It is deliberately strict (exact, case-sensitive
//! match) so it stays a second line of defence behind whatever normalizer
//! produced the candidate.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Label used for anything outside the vocabulary.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// A supported question intent. Each variant maps one-to-one onto a retrieval handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    ListScenarios,
    MostDefectsScenario,
    OpenDefects,
    FailedSteps,
    NoProofSteps,
}

impl Intent {
    /// The whole vocabulary, in prompt order.
    pub const ALL: [Self; 5] = [
        Self::ListScenarios,
        Self::MostDefectsScenario,
        Self::OpenDefects,
        Self::FailedSteps,
        Self::NoProofSteps,
    ];

    /// Wire label, e.g. `OPEN_DEFECTS`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListScenarios => "LIST_SCENARIOS",
            Self::MostDefectsScenario => "MOST_DEFECTS_SCENARIO",
            Self::OpenDefects => "OPEN_DEFECTS",
            Self::FailedSteps => "FAILED_STEPS",
            Self::NoProofSteps => "NO_PROOF_STEPS",
        }
    }

    /// Return the intent if `candidate` is exactly one of the supported labels.
    #[must_use]
    pub fn detect(candidate: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == candidate)
    }

    /// One-line summary of what the intent answers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ListScenarios => "List all test scenarios",
            Self::MostDefectsScenario => "Find scenario with most defects",
            Self::OpenDefects => "List all open/unresolved defects",
            Self::FailedSteps => "Find all failed test steps",
            Self::NoProofSteps => "Find steps missing proof uploads",
        }
    }

    /// Typical phrasings of the intent, lowercase.
    #[must_use]
    pub const fn examples(self) -> &'static [&'static str] {
        match self {
            Self::ListScenarios => &[
                "list scenarios",
                "show scenarios",
                "what scenarios are there",
                "all scenarios",
                "show me all scenarios",
            ],
            Self::MostDefectsScenario => &[
                "most defects",
                "scenario with most defects",
                "which scenario is worst",
                "most buggy scenario",
                "highest defect count",
                "most bugs",
            ],
            Self::OpenDefects => &[
                "open defects",
                "show open bugs",
                "pending defects",
                "unresolved issues",
            ],
            Self::FailedSteps => &[
                "failed steps",
                "failing steps",
                "steps that failed",
                "which steps are failing",
            ],
            Self::NoProofSteps => &[
                "no proof",
                "steps without proof",
                "missing proof",
                "steps need evidence",
            ],
        }
    }

    /// Deterministic answer when the retrieval for this intent found nothing.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::ListScenarios => "No scenarios found.",
            Self::MostDefectsScenario => "No defects found.",
            Self::OpenDefects => "No open defects.",
            Self::FailedSteps => "No failed steps.",
            Self::NoProofSteps => "All steps have proof uploaded.",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire label for a possibly-unknown intent.
#[must_use]
pub fn label(intent: Option<Intent>) -> &'static str {
    intent.map_or(UNKNOWN_LABEL, Intent::as_str)
}

/// `serialize_with` adapter writing `None` as [`UNKNOWN_LABEL`].
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::ref_option)]
pub fn serialize_label<S: Serializer>(
    intent: &Option<Intent>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(label(*intent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serde_names() {
        for intent in Intent::ALL {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn unknown_label_for_none() {
        assert_eq!(label(None), "UNKNOWN");
        assert_eq!(label(Some(Intent::FailedSteps)), "FAILED_STEPS");
    }

    #[test]
    fn every_intent_has_examples_and_messages() {
        for intent in Intent::ALL {
            assert!(!intent.examples().is_empty());
            assert!(!intent.empty_message().is_empty());
            assert!(!intent.description().is_empty());
        }
    }
}
