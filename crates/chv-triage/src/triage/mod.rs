//! Triage decision engine for community health volunteer encounters.
//!
//! A volunteer's form submission is validated by [`IntakeGuard`] into a
//! [`TriageInput`], which [`TriageEngine`] classifies against a fixed,
//! tiered rule table. The result is a [`GuidanceBundle`] carrying the risk
//! level, likely conditions, first-aid actions, volunteer instructions, an
//! optional referral facility and the standing advisory disclaimer.
//!
//! Evaluation is a pure function of the input: no I/O, no shared mutable
//! state, and the rule table and symptom vocabulary are built once per process.

pub mod domain;
pub mod engine;
pub mod intake;
pub mod router;
pub mod service;
pub mod views;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use domain::{AgeBracket, CaseDisposition, GuidanceBundle, RiskLevel, TriageInput};
pub use engine::{
    chv_instructions, evaluate, Predicate, Rule, RuleRepository, Selection, Tier, TriageEngine,
    TriageOutcome, DEFAULT_RULE_ID, DISCLAIMER,
};
pub use intake::{
    submissions_from_csv, BatchImportError, BatchRow, IntakeError, IntakeGuard, TriageSubmission,
};
pub use router::triage_router;
pub use service::TriageService;
pub use views::{AgeBracketView, TriageAssessmentView};
pub use vocabulary::{Symptom, SymptomEntry, SymptomVocabulary, VocabularyError};
