use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::triage::domain::{AgeBracket, TriageInput};
use crate::triage::engine::{Predicate, Rule, RuleRepository, Tier, TriageEngine};
use crate::triage::intake::{IntakeGuard, TriageSubmission};
use crate::triage::vocabulary::Symptom;
use crate::triage::{triage_router, TriageService};

pub(super) fn input(age: AgeBracket, symptoms: &[Symptom]) -> TriageInput {
    TriageInput::new(age, symptoms.iter().copied(), "")
}

pub(super) fn engine() -> TriageEngine<'static> {
    TriageEngine::standard()
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn submission(age: &str, symptoms: &[&str]) -> TriageSubmission {
    TriageSubmission {
        age_bracket: Some(age.to_string()),
        symptoms: symptoms.iter().map(|code| code.to_string()).collect(),
        narrative: "Patient reports symptoms since yesterday evening".to_string(),
    }
}

pub(super) fn router() -> axum::Router {
    triage_router(Arc::new(TriageService::default()))
}

/// Small table where two rules in the same tier share a trigger symptom.
pub(super) fn overlapping_rules() -> RuleRepository {
    RuleRepository::new(vec![
        Rule {
            id: "medium.swelling_first",
            tier: Tier::Medium,
            predicate: Predicate::Has(Symptom::Swelling),
            referral_facility: Some("Health Center"),
            possible_conditions: &["Fluid retention"],
            immediate_actions: &["Elevate the affected limb"],
        },
        Rule {
            id: "high.swelling_with_pain",
            tier: Tier::High,
            predicate: Predicate::HasAll(&[Symptom::Swelling, Symptom::JointPain]),
            referral_facility: None,
            possible_conditions: &["Joint infection"],
            immediate_actions: &["Immobilize the joint"],
        },
        Rule {
            id: "medium.swelling_second",
            tier: Tier::Medium,
            predicate: Predicate::Has(Symptom::Swelling),
            referral_facility: Some("Dispensary"),
            possible_conditions: &["Allergic reaction"],
            immediate_actions: &["Remove tight jewelry"],
        },
    ])
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
