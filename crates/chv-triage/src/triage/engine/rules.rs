use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::super::domain::{AgeBracket, RiskLevel, TriageInput};
use super::super::vocabulary::Symptom;

/// Priority band a rule belongs to. Tiers are consulted in [`Tier::ordered`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    High,
    Medium,
}

impl Tier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::High, Self::Medium]
    }

    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::Critical => RiskLevel::Critical,
            Self::High => RiskLevel::High,
            Self::Medium => RiskLevel::Medium,
        }
    }
}

const PEDIATRIC: &[AgeBracket] = &[AgeBracket::Infant, AgeBracket::Child];

/// Side-effect free test over the fields of a [`TriageInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Has(Symptom),
    HasAll(&'static [Symptom]),
    AgeIn(&'static [AgeBracket]),
    AgeNotIn(&'static [AgeBracket]),
    MinSymptoms(usize),
    All(&'static [Predicate]),
}

impl Predicate {
    pub fn matches(&self, input: &TriageInput) -> bool {
        match self {
            Predicate::Has(symptom) => input.has(*symptom),
            Predicate::HasAll(symptoms) => symptoms.iter().all(|symptom| input.has(*symptom)),
            Predicate::AgeIn(brackets) => brackets.contains(&input.age_bracket()),
            Predicate::AgeNotIn(brackets) => !brackets.contains(&input.age_bracket()),
            Predicate::MinSymptoms(count) => input.symptom_count() >= *count,
            Predicate::All(predicates) => predicates.iter().all(|inner| inner.matches(input)),
        }
    }
}

/// Declared classification rule and the clinical content it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: &'static str,
    pub tier: Tier,
    pub predicate: Predicate,
    pub referral_facility: Option<&'static str>,
    pub possible_conditions: &'static [&'static str],
    pub immediate_actions: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, input: &TriageInput) -> bool {
        self.predicate.matches(input)
    }
}

/// Immutable rule table partitioned by tier.
///
/// Within a tier the declaration order is kept; the first declared rule that
/// matches wins and later matches in the same tier are dropped.
#[derive(Debug, Clone)]
pub struct RuleRepository {
    rules: Vec<Rule>,
}

impl RuleRepository {
    /// Groups `rules` by tier while keeping declaration order inside each tier.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|rule| rule.tier);
        Self { rules }
    }

    /// The field protocol table, built once per process.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<RuleRepository> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(standard_rules()))
    }

    pub fn tier(&self, tier: Tier) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |rule| rule.tier == tier)
    }

    /// All rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> + '_ {
        Tier::ordered()
            .into_iter()
            .flat_map(move |tier| self.tier(tier))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn standard_rules() -> Vec<Rule> {
    STANDARD_RULES.to_vec()
}

const STANDARD_RULES: &[Rule] = &[
    Rule {
        id: "critical.difficulty_breathing",
        tier: Tier::Critical,
        predicate: Predicate::Has(Symptom::DifficultyBreathing),
        referral_facility: Some("Nearest Emergency Facility"),
        possible_conditions: &[
            "Respiratory distress",
            "Asthma attack",
            "Pneumonia",
            "COVID-19",
        ],
        immediate_actions: &[
            "Keep patient calm and seated upright",
            "Loosen any tight clothing",
            "Monitor breathing rate",
            "Prepare for emergency transport",
        ],
    },
    Rule {
        id: "critical.severe_bleeding",
        tier: Tier::Critical,
        predicate: Predicate::Has(Symptom::SevereBleeding),
        referral_facility: Some("Nearest Emergency Facility"),
        possible_conditions: &["Trauma", "Internal bleeding", "Hemorrhage"],
        immediate_actions: &[
            "Apply direct pressure to wound with clean cloth",
            "Elevate bleeding limb if possible",
            "Do not remove embedded objects",
            "Prepare for emergency transport",
        ],
    },
    Rule {
        id: "critical.pediatric_high_fever",
        tier: Tier::Critical,
        predicate: Predicate::All(&[
            Predicate::Has(Symptom::HighFever),
            Predicate::AgeIn(PEDIATRIC),
        ]),
        referral_facility: Some("Pediatric Emergency Unit"),
        possible_conditions: &["Malaria", "Typhoid", "Meningitis", "Severe infection"],
        immediate_actions: &[
            "Cool the child with lukewarm water sponge bath",
            "Remove excess clothing",
            "Give oral rehydration if conscious",
            "Monitor for seizures",
            "Transport to facility immediately",
        ],
    },
    Rule {
        id: "critical.unconscious",
        tier: Tier::Critical,
        predicate: Predicate::Has(Symptom::Unconscious),
        referral_facility: Some("Nearest Emergency Facility"),
        possible_conditions: &[
            "Head injury",
            "Stroke",
            "Diabetic emergency",
            "Poisoning",
        ],
        immediate_actions: &[
            "Check airway, breathing, and pulse",
            "Place in recovery position if breathing",
            "Do not give anything by mouth",
            "Call for emergency transport immediately",
        ],
    },
    Rule {
        id: "critical.chest_pain",
        tier: Tier::Critical,
        predicate: Predicate::Has(Symptom::ChestPain),
        referral_facility: Some("Cardiac Emergency Unit"),
        possible_conditions: &["Heart attack", "Angina", "Pulmonary embolism"],
        immediate_actions: &[
            "Keep patient calm and still",
            "Loosen tight clothing",
            "If available, give aspirin (unless allergic)",
            "Monitor vital signs",
            "Prepare for emergency transport",
        ],
    },
    Rule {
        id: "high.fever_with_headache",
        tier: Tier::High,
        predicate: Predicate::HasAll(&[Symptom::HighFever, Symptom::SevereHeadache]),
        referral_facility: Some("District Hospital"),
        possible_conditions: &["Malaria", "Meningitis", "Typhoid fever"],
        immediate_actions: &[
            "Keep patient hydrated",
            "Monitor temperature regularly",
            "Look for signs of neck stiffness",
            "Seek medical attention within 2 hours",
        ],
    },
    Rule {
        id: "high.pediatric_dehydration",
        tier: Tier::High,
        predicate: Predicate::All(&[
            Predicate::HasAll(&[Symptom::Vomiting, Symptom::Diarrhea]),
            Predicate::AgeIn(PEDIATRIC),
        ]),
        referral_facility: Some("Pediatric Unit"),
        possible_conditions: &["Gastroenteritis", "Cholera", "Food poisoning"],
        immediate_actions: &[
            "Start oral rehydration therapy immediately",
            "Give small, frequent sips of ORS",
            "Monitor for signs of dehydration",
            "Seek medical attention within 4 hours",
        ],
    },
    Rule {
        id: "high.abdominal_pain_with_fever",
        tier: Tier::High,
        predicate: Predicate::HasAll(&[Symptom::AbdominalPain, Symptom::HighFever]),
        referral_facility: Some("District Hospital"),
        possible_conditions: &["Appendicitis", "Intestinal infection", "Typhoid"],
        immediate_actions: &[
            "Do not give food until evaluated",
            "Monitor pain location and intensity",
            "Check for abdominal rigidity",
            "Seek medical attention within 4 hours",
        ],
    },
    Rule {
        id: "medium.persistent_cough",
        tier: Tier::Medium,
        predicate: Predicate::All(&[
            Predicate::Has(Symptom::PersistentCough),
            Predicate::MinSymptoms(2),
        ]),
        referral_facility: Some("Health Center"),
        possible_conditions: &[
            "Upper respiratory infection",
            "Bronchitis",
            "Early pneumonia",
        ],
        immediate_actions: &[
            "Ensure adequate rest",
            "Increase fluid intake",
            "Monitor for fever development",
            "Schedule clinic visit within 24-48 hours",
        ],
    },
    Rule {
        id: "medium.fever_over_five",
        tier: Tier::Medium,
        predicate: Predicate::All(&[
            Predicate::Has(Symptom::HighFever),
            Predicate::AgeNotIn(PEDIATRIC),
        ]),
        referral_facility: Some("Health Center"),
        possible_conditions: &["Viral infection", "Malaria", "Urinary tract infection"],
        immediate_actions: &[
            "Give paracetamol for fever",
            "Ensure adequate hydration",
            "Monitor temperature every 4 hours",
            "Visit clinic within 24 hours if fever persists",
        ],
    },
];
