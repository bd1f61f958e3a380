//! Validator behaviour over the closed intent vocabulary.

use potato_core::intent::{Intent, UNKNOWN_LABEL, label};
use rstest::rstest;

#[rstest]
#[case("LIST_SCENARIOS", Intent::ListScenarios)]
#[case("MOST_DEFECTS_SCENARIO", Intent::MostDefectsScenario)]
#[case("OPEN_DEFECTS", Intent::OpenDefects)]
#[case("FAILED_STEPS", Intent::FailedSteps)]
#[case("NO_PROOF_STEPS", Intent::NoProofSteps)]
fn detect_is_identity_on_vocabulary(#[case] candidate: &str, #[case] expected: Intent) {
    let detected = Intent::detect(candidate);
    assert_eq!(detected, Some(expected));
    assert_eq!(label(detected), candidate);
}

#[rstest]
#[case("")]
#[case("UNKNOWN")]
#[case("open_defects")]
#[case("Open_Defects")]
#[case("OPEN_DEFECTS!")]
#[case(" OPEN_DEFECTS")]
#[case("OPEN_DEFECTS\n")]
#[case("OPEN DEFECTS")]
#[case("OPENDEFECTSPLEASE")]
#[case("LIST_SCENARIOS,FAILED_STEPS")]
fn detect_rejects_everything_else(#[case] candidate: &str) {
    assert_eq!(Intent::detect(candidate), None);
    assert_eq!(label(Intent::detect(candidate)), UNKNOWN_LABEL);
}

#[test]
fn detect_handles_very_long_input() {
    let candidate = "OPEN_DEFECTS".repeat(10_000);
    assert_eq!(Intent::detect(&candidate), None);
}

#[test]
fn vocabulary_labels_are_distinct() {
    let mut labels: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Intent::ALL.len());
}
