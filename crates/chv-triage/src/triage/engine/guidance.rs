use super::super::domain::{GuidanceBundle, RiskLevel};
use super::rules::Rule;

/// Advisory notice attached to every bundle.
pub const DISCLAIMER: &str = "IMPORTANT: This AI-powered guidance is for preliminary assessment only and does not constitute a medical diagnosis. Always seek professional medical care for proper evaluation and treatment.";

const CRITICAL_INSTRUCTIONS: &[&str] = &[
    "This is an EMERGENCY case requiring immediate referral",
    "Contact emergency services or arrange transport immediately",
    "Stay with the patient and monitor vital signs",
    "Document all observations for the receiving facility",
];

const HIGH_INSTRUCTIONS: &[&str] = &[
    "This case requires urgent medical attention",
    "Arrange transport to the recommended facility",
    "Provide first aid as indicated",
    "Monitor patient condition during transport",
];

const MEDIUM_INSTRUCTIONS: &[&str] = &[
    "Monitor the patient closely over the next 24 hours",
    "Provide supportive care as indicated",
    "Arrange clinic visit if symptoms worsen",
    "Educate patient/family on warning signs",
];

const LOW_INSTRUCTIONS: &[&str] = &[
    "Provide reassurance and basic health education",
    "Advise on home remedies and rest",
    "Schedule follow-up in 3-5 days if symptoms persist",
    "Educate on when to seek immediate care",
];

const DEFAULT_CONDITIONS: &[&str] = &[
    "Minor ailment",
    "Viral infection",
    "Stress-related symptoms",
];

const DEFAULT_ACTIONS: &[&str] = &[
    "Ensure adequate rest and hydration",
    "Monitor symptoms over the next few days",
    "Use over-the-counter remedies as appropriate",
    "Return if symptoms worsen or new symptoms develop",
];

/// Volunteer instructions for a risk level. Fixed prose, no patient data.
pub const fn chv_instructions(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Critical => CRITICAL_INSTRUCTIONS,
        RiskLevel::High => HIGH_INSTRUCTIONS,
        RiskLevel::Medium => MEDIUM_INSTRUCTIONS,
        RiskLevel::Low => LOW_INSTRUCTIONS,
    }
}

pub(crate) fn from_rule(rule: &Rule) -> GuidanceBundle {
    let risk_level = rule.tier.risk_level();
    GuidanceBundle {
        risk_level,
        possible_conditions: owned(rule.possible_conditions),
        chv_instructions: owned(chv_instructions(risk_level)),
        immediate_actions: owned(rule.immediate_actions),
        referral_facility: rule.referral_facility.map(str::to_string),
        disclaimer: DISCLAIMER.to_string(),
    }
}

pub(crate) fn default_low() -> GuidanceBundle {
    GuidanceBundle {
        risk_level: RiskLevel::Low,
        possible_conditions: owned(DEFAULT_CONDITIONS),
        chv_instructions: owned(chv_instructions(RiskLevel::Low)),
        immediate_actions: owned(DEFAULT_ACTIONS),
        referral_facility: None,
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_risk_level_has_its_own_template() {
        let levels = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ];
        for (index, level) in levels.iter().enumerate() {
            assert_eq!(chv_instructions(*level).len(), 4);
            for other in &levels[index + 1..] {
                assert_ne!(chv_instructions(*level), chv_instructions(*other));
            }
        }
        assert_eq!(
            chv_instructions(RiskLevel::Critical)[0],
            "This is an EMERGENCY case requiring immediate referral"
        );
    }

    #[test]
    fn disclaimer_text_is_stable() {
        assert!(DISCLAIMER.starts_with("IMPORTANT: "));
        assert!(DISCLAIMER.contains("does not constitute a medical diagnosis"));
    }

    #[test]
    fn default_bundle_has_no_referral() {
        let bundle = default_low();
        assert_eq!(bundle.risk_level, RiskLevel::Low);
        assert!(bundle.referral_facility.is_none());
        assert_eq!(bundle.possible_conditions[0], "Minor ailment");
        assert_eq!(bundle.disclaimer, DISCLAIMER);
    }
}
