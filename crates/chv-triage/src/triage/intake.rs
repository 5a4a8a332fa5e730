use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{AgeBracket, TriageInput};
use super::vocabulary::{SymptomVocabulary, VocabularyError};

/// Raw triage form payload as submitted by a volunteer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSubmission {
    #[serde(default)]
    pub age_bracket: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub narrative: String,
}

/// Reasons a submission cannot be turned into a [`TriageInput`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("an age bracket must be selected")]
    MissingAgeBracket,
    #[error("unrecognized age bracket '{0}'")]
    InvalidAgeBracket(String),
    #[error(transparent)]
    UnknownSymptom(#[from] VocabularyError),
    #[error("at least one symptom must be selected")]
    NoSymptoms,
}

/// Validates form submissions against the symptom vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct IntakeGuard {
    vocabulary: &'static SymptomVocabulary,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::new(SymptomVocabulary::global())
    }
}

impl IntakeGuard {
    pub fn new(vocabulary: &'static SymptomVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn input_from_submission(
        &self,
        submission: TriageSubmission,
    ) -> Result<TriageInput, IntakeError> {
        let result = self.validate(submission);
        if let Err(err) = &result {
            warn!(error = %err, "triage submission rejected");
        }
        result
    }

    fn validate(&self, submission: TriageSubmission) -> Result<TriageInput, IntakeError> {
        let raw_bracket = submission
            .age_bracket
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(IntakeError::MissingAgeBracket)?;
        let age_bracket = AgeBracket::from_code(raw_bracket)
            .ok_or_else(|| IntakeError::InvalidAgeBracket(raw_bracket.to_string()))?;

        let symptoms = submission
            .symptoms
            .iter()
            .map(|code| self.vocabulary.lookup(code.trim()).map(|entry| entry.code))
            .collect::<Result<Vec<_>, _>>()?;
        if symptoms.is_empty() {
            return Err(IntakeError::NoSymptoms);
        }

        Ok(TriageInput::new(age_bracket, symptoms, submission.narrative))
    }
}

#[derive(Debug, Deserialize)]
struct SubmissionRow {
    age_bracket: Option<String>,
    #[serde(default)]
    symptoms: String,
    #[serde(default)]
    narrative: String,
}

impl From<SubmissionRow> for TriageSubmission {
    fn from(row: SubmissionRow) -> Self {
        let symptoms = row
            .symptoms
            .split(';')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            age_bracket: row.age_bracket,
            symptoms,
            narrative: row.narrative,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("invalid triage batch CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(
        "line {line}: expected at most {expected} fields but found {found}; \
         quote narratives that contain commas"
    )]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// One parsed CSV record; a bad record does not stop the rows after it.
pub type BatchRow = Result<TriageSubmission, BatchImportError>;

/// Reads `age_bracket,symptoms,narrative` rows; symptoms are `;`-separated codes.
///
/// Only an unreadable header fails the whole import. Narratives containing
/// commas must be quoted; records with more fields than the header are rejected.
pub fn submissions_from_csv<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        match record {
            Ok(record) => rows.push(submission_from_record(&record, &headers)),
            Err(err) => {
                let fatal = matches!(err.kind(), csv::ErrorKind::Io(_));
                rows.push(Err(err.into()));
                if fatal {
                    break;
                }
            }
        }
    }

    Ok(rows)
}

fn submission_from_record(
    record: &csv::StringRecord,
    headers: &csv::StringRecord,
) -> Result<TriageSubmission, BatchImportError> {
    if record.len() > headers.len() {
        return Err(BatchImportError::ExtraFields {
            line: record.position().map_or(0, csv::Position::line),
            expected: headers.len(),
            found: record.len(),
        });
    }

    let row: SubmissionRow = record.deserialize(Some(headers))?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::vocabulary::Symptom;

    #[test]
    fn csv_rows_split_symptom_lists() {
        let data = "age_bracket,symptoms,narrative\n\
                    adult,high-fever; severe-headache,\"Two days, worse at night\"\n\
                    child,,\n\
                    elderly,joint-pain\n";

        let rows = submissions_from_csv(data.as_bytes()).expect("header parses");
        let submissions: Vec<_> = rows
            .into_iter()
            .map(|row| row.expect("row parses"))
            .collect();

        assert_eq!(submissions.len(), 3);
        assert_eq!(submissions[0].age_bracket.as_deref(), Some("adult"));
        assert_eq!(
            submissions[0].symptoms,
            vec!["high-fever".to_string(), "severe-headache".to_string()]
        );
        assert_eq!(submissions[0].narrative, "Two days, worse at night");
        assert!(submissions[1].symptoms.is_empty());
        assert_eq!(submissions[2].symptoms, vec!["joint-pain".to_string()]);
        assert!(submissions[2].narrative.is_empty());
    }

    #[test]
    fn unquoted_commas_in_narrative_reject_the_record() {
        let data = "age_bracket,symptoms,narrative\n\
                    adult,chest-pain,sick, tired since monday\n\
                    adult,chest-pain,\"sick, tired since monday\"\n";

        let rows = submissions_from_csv(data.as_bytes()).expect("header parses");

        assert_eq!(rows.len(), 2);
        match &rows[0] {
            Err(BatchImportError::ExtraFields {
                line,
                expected,
                found,
            }) => {
                assert_eq!((*line, *expected, *found), (2, 3, 4));
            }
            other => panic!("expected extra fields error, got {other:?}"),
        }
        let quoted = rows[1].as_ref().expect("quoted narrative parses");
        assert_eq!(quoted.narrative, "sick, tired since monday");
    }

    #[test]
    fn malformed_record_does_not_drop_neighbours() {
        let mut data = b"age_bracket,symptoms,narrative\nadult,chest-pain,ok\nchild,high-fever,".to_vec();
        data.extend_from_slice(&[0xFF, 0xFE]);
        data.extend_from_slice(b"\nadult,skin-rash,fine\n");

        let rows = submissions_from_csv(data.as_slice()).expect("header parses");

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].as_ref().expect("first row parses").symptoms,
            vec!["chest-pain".to_string()]
        );
        assert!(matches!(rows[1], Err(BatchImportError::Csv(_))));
        assert_eq!(
            rows[2].as_ref().expect("third row parses").narrative,
            "fine"
        );
    }

    #[test]
    fn guard_trims_codes_before_lookup() {
        let submission = TriageSubmission {
            age_bracket: Some(" youth ".to_string()),
            symptoms: vec![" vomiting".to_string(), "diarrhea ".to_string()],
            narrative: String::new(),
        };

        let input = IntakeGuard::default()
            .input_from_submission(submission)
            .expect("valid submission");
        assert_eq!(input.age_bracket(), AgeBracket::Youth);
        assert_eq!(input.symptoms(), &[Symptom::Vomiting, Symptom::Diarrhea]);
    }
}
