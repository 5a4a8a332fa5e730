use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AgeBracket, CaseDisposition, GuidanceBundle, TriageInput};
use super::engine::TriageOutcome;
use super::vocabulary::SymptomEntry;

/// Response shape shared by the HTTP API and the CLI's JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageAssessmentView {
    pub evaluated_at: DateTime<Utc>,
    pub age_bracket: AgeBracket,
    pub age_bracket_label: &'static str,
    pub symptoms: Vec<SymptomEntry>,
    pub rule_id: &'static str,
    pub risk_label: &'static str,
    pub badge_class: &'static str,
    pub disposition: CaseDisposition,
    pub guidance: GuidanceBundle,
}

impl TriageAssessmentView {
    pub fn new(input: &TriageInput, outcome: TriageOutcome, evaluated_at: DateTime<Utc>) -> Self {
        let risk_level = outcome.guidance.risk_level;
        Self {
            evaluated_at,
            age_bracket: input.age_bracket(),
            age_bracket_label: input.age_bracket().label(),
            symptoms: input
                .symptoms()
                .iter()
                .map(|symptom| SymptomEntry::from(*symptom))
                .collect(),
            rule_id: outcome.rule_id,
            risk_label: risk_level.label(),
            badge_class: risk_level.badge_class(),
            disposition: outcome.guidance.disposition(),
            guidance: outcome.guidance,
        }
    }

    /// Labels in recording order, for echoing the checklist back to the volunteer.
    pub fn symptom_labels(&self) -> Vec<&'static str> {
        self.symptoms.iter().map(|entry| entry.label).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracketView {
    pub code: AgeBracket,
    pub label: &'static str,
}

impl AgeBracketView {
    pub fn all() -> Vec<Self> {
        AgeBracket::ordered()
            .into_iter()
            .map(|code| Self {
                code,
                label: code.label(),
            })
            .collect()
    }
}
