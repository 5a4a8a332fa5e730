use chrono::Local;
use chv_triage::error::AppError;
use chv_triage::triage::{
    submissions_from_csv, SymptomVocabulary, TriageAssessmentView, TriageService,
    TriageSubmission,
};
use clap::Args;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Age bracket code (infant, child, youth, adult, middle-age, elderly)
    #[arg(long)]
    pub(crate) age: String,
    /// Symptom code; repeat the flag or pass a comma-separated list
    #[arg(long = "symptom", value_delimiter = ',', required = true)]
    pub(crate) symptoms: Vec<String>,
    /// Free-text notes from the encounter
    #[arg(long, default_value = "")]
    pub(crate) narrative: String,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with age_bracket,symptoms,narrative columns; quote narratives containing commas
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        age,
        symptoms,
        narrative,
        json,
    } = args;

    let view = TriageService::default().assess(TriageSubmission {
        age_bracket: Some(age),
        symptoms,
        narrative,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_assessment(&view);
    }

    Ok(())
}

pub(crate) fn run_symptoms() {
    println!("Recognized symptom codes");
    for entry in SymptomVocabulary::global().entries() {
        let marker = if entry.critical { " [critical]" } else { "" };
        println!("- {:<22} {}{}", entry.code.code(), entry.label, marker);
    }
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let reader = BufReader::new(File::open(&args.csv)?);
    let report = triage_batch(reader, &TriageService::default())?;

    println!("Batch triage: {}", args.csv.display());
    for line in &report.lines {
        println!("{line}");
    }
    if report.rejected > 0 {
        println!("{} row(s) rejected", report.rejected);
    }

    Ok(())
}

#[derive(Debug, Default)]
pub(crate) struct BatchReport {
    pub(crate) lines: Vec<String>,
    pub(crate) rejected: usize,
}

impl BatchReport {
    fn skip(&mut self, row: usize, reason: &dyn Display) -> String {
        self.rejected += 1;
        format!("row {row}: skipped ({reason})")
    }
}

/// Assesses every row; unreadable or invalid rows are reported and skipped.
pub(crate) fn triage_batch<R: Read>(
    reader: R,
    service: &TriageService,
) -> Result<BatchReport, AppError> {
    let rows = submissions_from_csv(reader)?;
    let mut report = BatchReport::default();

    for (index, row) in rows.into_iter().enumerate() {
        let number = index + 1;
        let line = match row {
            Ok(submission) => match service.assess(submission) {
                Ok(view) => batch_line(number, &view),
                Err(err) => report.skip(number, &err),
            },
            Err(err) => report.skip(number, &err),
        };
        report.lines.push(line);
    }

    Ok(report)
}

pub(crate) fn batch_line(row: usize, view: &TriageAssessmentView) -> String {
    let referral = view
        .guidance
        .referral_facility
        .as_deref()
        .unwrap_or("no referral");
    format!(
        "row {row}: {} | {} | {} | {}",
        view.risk_label,
        view.age_bracket_label,
        referral,
        view.disposition.label()
    )
}

pub(crate) fn render_assessment(view: &TriageAssessmentView) {
    let symptoms = view.symptom_labels();

    println!("Triage assessment ({})", view.risk_label);
    println!(
        "Evaluated {} | rule {}",
        view.evaluated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        view.rule_id
    );
    println!("Patient: {}", view.age_bracket_label);
    println!("Symptoms: {}", symptoms.join(", "));

    match &view.guidance.referral_facility {
        Some(facility) => println!("Referral: {facility} ({})", view.disposition.label()),
        None => println!("Referral: none ({})", view.disposition.label()),
    }

    println!("\nPossible conditions");
    for condition in &view.guidance.possible_conditions {
        println!("- {condition}");
    }

    println!("\nImmediate actions");
    for action in &view.guidance.immediate_actions {
        println!("- {action}");
    }

    println!("\nCHV instructions");
    for instruction in &view.guidance.chv_instructions {
        println!("- {instruction}");
    }

    println!("\n{}", view.guidance.disclaimer);
}
