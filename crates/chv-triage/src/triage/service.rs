use chrono::Utc;

use super::engine::TriageEngine;
use super::intake::{IntakeError, IntakeGuard, TriageSubmission};
use super::views::TriageAssessmentView;

/// Facade composing intake validation with the rule engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageService {
    guard: IntakeGuard,
    engine: TriageEngine<'static>,
}

impl TriageService {
    /// Validate a form submission and evaluate it.
    pub fn assess(
        &self,
        submission: TriageSubmission,
    ) -> Result<TriageAssessmentView, IntakeError> {
        let input = self.guard.input_from_submission(submission)?;
        let outcome = self.engine.assess(&input);
        Ok(TriageAssessmentView::new(&input, outcome, Utc::now()))
    }
}
