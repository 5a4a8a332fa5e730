use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Symptoms a health volunteer can record on the triage checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symptom {
    DifficultyBreathing,
    SevereBleeding,
    ChestPain,
    Unconscious,
    HighFever,
    PersistentCough,
    SevereHeadache,
    Vomiting,
    Diarrhea,
    AbdominalPain,
    SkinRash,
    JointPain,
    Fatigue,
    Swelling,
}

impl Symptom {
    /// Checklist order shown to volunteers.
    pub const fn ordered() -> [Self; 14] {
        [
            Self::DifficultyBreathing,
            Self::SevereBleeding,
            Self::ChestPain,
            Self::Unconscious,
            Self::HighFever,
            Self::PersistentCough,
            Self::SevereHeadache,
            Self::Vomiting,
            Self::Diarrhea,
            Self::AbdominalPain,
            Self::SkinRash,
            Self::JointPain,
            Self::Fatigue,
            Self::Swelling,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::DifficultyBreathing => "difficulty-breathing",
            Self::SevereBleeding => "severe-bleeding",
            Self::ChestPain => "chest-pain",
            Self::Unconscious => "unconscious",
            Self::HighFever => "high-fever",
            Self::PersistentCough => "persistent-cough",
            Self::SevereHeadache => "severe-headache",
            Self::Vomiting => "vomiting",
            Self::Diarrhea => "diarrhea",
            Self::AbdominalPain => "abdominal-pain",
            Self::SkinRash => "skin-rash",
            Self::JointPain => "joint-pain",
            Self::Fatigue => "fatigue",
            Self::Swelling => "swelling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DifficultyBreathing => "Difficulty Breathing",
            Self::SevereBleeding => "Severe Bleeding",
            Self::ChestPain => "Chest Pain",
            Self::Unconscious => "Loss of Consciousness",
            Self::HighFever => "High Fever",
            Self::PersistentCough => "Persistent Cough",
            Self::SevereHeadache => "Severe Headache",
            Self::Vomiting => "Vomiting/Nausea",
            Self::Diarrhea => "Diarrhea",
            Self::AbdominalPain => "Abdominal Pain",
            Self::SkinRash => "Skin Rash",
            Self::JointPain => "Joint/Muscle Pain",
            Self::Fatigue => "Extreme Fatigue",
            Self::Swelling => "Swelling",
        }
    }

    /// Display hint for the checklist. Rules never consult this marker.
    pub const fn is_critical(self) -> bool {
        matches!(
            self,
            Self::DifficultyBreathing | Self::SevereBleeding | Self::ChestPain | Self::Unconscious
        )
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Registry row returned by [`SymptomVocabulary::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    pub code: Symptom,
    pub label: &'static str,
    pub critical: bool,
}

impl From<Symptom> for SymptomEntry {
    fn from(symptom: Symptom) -> Self {
        Self {
            code: symptom,
            label: symptom.label(),
            critical: symptom.is_critical(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("unknown symptom code '{0}'")]
    UnknownSymptom(String),
}

/// Read-only index from wire codes to registered symptoms.
#[derive(Debug)]
pub struct SymptomVocabulary {
    entries: Vec<SymptomEntry>,
    by_code: HashMap<&'static str, Symptom>,
}

impl SymptomVocabulary {
    fn build() -> Self {
        let entries: Vec<SymptomEntry> = Symptom::ordered()
            .into_iter()
            .map(SymptomEntry::from)
            .collect();
        let by_code = entries
            .iter()
            .map(|entry| (entry.code.code(), entry.code))
            .collect();

        Self { entries, by_code }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static Self {
        static VOCABULARY: OnceLock<SymptomVocabulary> = OnceLock::new();
        VOCABULARY.get_or_init(Self::build)
    }

    pub fn lookup(&self, code: &str) -> Result<SymptomEntry, VocabularyError> {
        self.by_code
            .get(code)
            .map(|symptom| SymptomEntry::from(*symptom))
            .ok_or_else(|| VocabularyError::UnknownSymptom(code.to_string()))
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn critical_codes(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.critical)
            .map(|entry| entry.code)
    }
}
