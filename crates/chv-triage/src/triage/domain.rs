use serde::{Deserialize, Serialize};

use super::vocabulary::Symptom;

/// Age band captured on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBracket {
    Infant,
    Child,
    Youth,
    Adult,
    MiddleAge,
    Elderly,
}

impl AgeBracket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Infant,
            Self::Child,
            Self::Youth,
            Self::Adult,
            Self::MiddleAge,
            Self::Elderly,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Infant => "infant",
            Self::Child => "child",
            Self::Youth => "youth",
            Self::Adult => "adult",
            Self::MiddleAge => "middle-age",
            Self::Elderly => "elderly",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant => "Infant (0-1 years)",
            Self::Child => "Child (1-5 years)",
            Self::Youth => "Youth (5-18 years)",
            Self::Adult => "Adult (18-45 years)",
            Self::MiddleAge => "Middle Age (45-65 years)",
            Self::Elderly => "Elderly (65+ years)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|bracket| bracket.code() == code)
    }
}

/// Validated encounter handed to the triage engine.
///
/// Symptoms are unique and keep the order they were recorded in; matching
/// ignores that order. The narrative is carried along but never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageInput {
    age_bracket: AgeBracket,
    symptoms: Vec<Symptom>,
    narrative: String,
}

impl TriageInput {
    pub fn new(
        age_bracket: AgeBracket,
        symptoms: impl IntoIterator<Item = Symptom>,
        narrative: impl Into<String>,
    ) -> Self {
        let mut unique = Vec::new();
        for symptom in symptoms {
            if !unique.contains(&symptom) {
                unique.push(symptom);
            }
        }

        Self {
            age_bracket,
            symptoms: unique,
            narrative: narrative.into(),
        }
    }

    pub fn age_bracket(&self) -> AgeBracket {
        self.age_bracket
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn has(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}

/// Urgency assigned to an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::Critical => "CRITICAL",
        }
    }

    /// CSS class used by the dashboards for the colored risk badge.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "risk-badge-low",
            Self::Medium => "risk-badge-medium",
            Self::High => "risk-badge-high",
            Self::Critical => "risk-badge-critical",
        }
    }
}

/// How case management files an encounter once guidance exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseDisposition {
    Pending,
    Referred,
}

impl CaseDisposition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Referred => "Referred",
        }
    }
}

/// Complete guidance returned for one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceBundle {
    pub risk_level: RiskLevel,
    pub possible_conditions: Vec<String>,
    pub chv_instructions: Vec<String>,
    pub immediate_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_facility: Option<String>,
    pub disclaimer: String,
}

impl GuidanceBundle {
    pub fn disposition(&self) -> CaseDisposition {
        if self.referral_facility.is_some() {
            CaseDisposition::Referred
        } else {
            CaseDisposition::Pending
        }
    }
}
