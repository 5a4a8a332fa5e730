mod guidance;
mod rules;

pub use guidance::{chv_instructions, DISCLAIMER};
pub use rules::{Predicate, Rule, RuleRepository, Tier};

use super::domain::{GuidanceBundle, TriageInput};
use serde::Serialize;
use tracing::debug;

/// Identifier reported when no declared rule matched.
pub const DEFAULT_RULE_ID: &str = "default.low";

/// Stateless evaluator walking a [`RuleRepository`] in tier order.
#[derive(Debug, Clone, Copy)]
pub struct TriageEngine<'r> {
    rules: &'r RuleRepository,
}

impl TriageEngine<'static> {
    pub fn standard() -> Self {
        Self::new(RuleRepository::standard())
    }
}

impl Default for TriageEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which entry produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'r> {
    Rule(&'r Rule),
    Default,
}

impl Selection<'_> {
    pub fn rule_id(&self) -> &'static str {
        match self {
            Selection::Rule(rule) => rule.id,
            Selection::Default => DEFAULT_RULE_ID,
        }
    }
}

/// Guidance together with the id of the rule that produced it, for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    pub rule_id: &'static str,
    pub guidance: GuidanceBundle,
}

impl<'r> TriageEngine<'r> {
    pub fn new(rules: &'r RuleRepository) -> Self {
        Self { rules }
    }

    /// First matching rule in Critical, High, Medium order, or the default.
    pub fn select(&self, input: &TriageInput) -> Selection<'r> {
        let rules: &'r RuleRepository = self.rules;
        rules
            .iter()
            .find(|rule| rule.matches(input))
            .map_or(Selection::Default, Selection::Rule)
    }

    pub fn assess(&self, input: &TriageInput) -> TriageOutcome {
        let selection = self.select(input);
        let guidance = match selection {
            Selection::Rule(rule) => guidance::from_rule(rule),
            Selection::Default => guidance::default_low(),
        };

        debug!(
            rule_id = selection.rule_id(),
            risk_level = ?guidance.risk_level,
            symptom_count = input.symptom_count(),
            "triage rule selected"
        );

        TriageOutcome {
            rule_id: selection.rule_id(),
            guidance,
        }
    }

    pub fn evaluate(&self, input: &TriageInput) -> GuidanceBundle {
        self.assess(input).guidance
    }
}

/// Evaluates `input` against the standard rule table.
pub fn evaluate(input: &TriageInput) -> GuidanceBundle {
    TriageEngine::standard().evaluate(input)
}
