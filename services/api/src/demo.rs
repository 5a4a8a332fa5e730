use crate::assess::render_assessment;
use chv_triage::error::AppError;
use chv_triage::triage::{TriageService, TriageSubmission};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every scenario's full guidance instead of a one-line summary
    #[arg(long)]
    pub(crate) verbose: bool,
}

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) age_bracket: &'static str,
    pub(crate) symptoms: &'static [&'static str],
    pub(crate) narrative: &'static str,
}

impl DemoScenario {
    fn submission(&self) -> TriageSubmission {
        TriageSubmission {
            age_bracket: Some(self.age_bracket.to_string()),
            symptoms: self.symptoms.iter().map(|code| code.to_string()).collect(),
            narrative: self.narrative.to_string(),
        }
    }
}

pub(crate) const SCENARIOS: &[DemoScenario] = &[
    DemoScenario {
        title: "Adult struggling to breathe",
        age_bracket: "adult",
        symptoms: &["difficulty-breathing"],
        narrative: "Short of breath after walking to the clinic",
    },
    DemoScenario {
        title: "Feverish toddler",
        age_bracket: "child",
        symptoms: &["high-fever"],
        narrative: "Hot to the touch since last night",
    },
    DemoScenario {
        title: "Adult with fever and headache",
        age_bracket: "adult",
        symptoms: &["high-fever", "severe-headache"],
        narrative: "Headache worsening over two days",
    },
    DemoScenario {
        title: "Adult with lingering cough",
        age_bracket: "adult",
        symptoms: &["persistent-cough", "fatigue"],
        narrative: "Coughing for a week, tired",
    },
    DemoScenario {
        title: "Adult with a rash",
        age_bracket: "adult",
        symptoms: &["skin-rash"],
        narrative: "Itchy rash on forearm",
    },
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = TriageService::default();

    println!("CHV triage demo");
    for (index, scenario) in SCENARIOS.iter().enumerate() {
        let view = service.assess(scenario.submission())?;
        println!("\n{}. {}", index + 1, scenario.title);
        if args.verbose {
            render_assessment(&view);
        } else {
            println!(
                "   {} -> {}",
                view.risk_label,
                view.guidance
                    .referral_facility
                    .as_deref()
                    .unwrap_or("manage at home")
            );
        }
    }

    Ok(())
}
