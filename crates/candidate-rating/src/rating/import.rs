use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{ApplicationEvidence, ApplicationId, QuestionAnswer};

/// Failure while loading candidate evidence from an export.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceImportError {
    #[error("failed to read evidence: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answers CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid application JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    application_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    question: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Groups `application_id,question,answer` rows into per-application evidence.
///
/// Applications keep the order in which they first appear; answers keep row order.
pub fn parse_answer_rows<R: Read>(
    reader: R,
) -> Result<Vec<(ApplicationId, ApplicationEvidence)>, EvidenceImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut grouped: Vec<(ApplicationId, ApplicationEvidence)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        let index = *positions
            .entry(row.application_id.clone())
            .or_insert_with(|| {
                grouped.push((
                    ApplicationId(row.application_id.clone()),
                    ApplicationEvidence::default(),
                ));
                grouped.len() - 1
            });

        grouped[index].1.questions_and_answers.push(QuestionAnswer {
            question: row.question,
            answer: row.answer,
        });
    }

    Ok(grouped)
}

pub fn answer_rows_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(ApplicationId, ApplicationEvidence)>, EvidenceImportError> {
    let file = std::fs::File::open(path)?;
    parse_answer_rows(file)
}

/// Decodes one ATS application document, ignoring fields the engine does not read.
pub fn load_application_json<R: Read>(
    reader: R,
) -> Result<ApplicationEvidence, EvidenceImportError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn application_json_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<ApplicationEvidence, EvidenceImportError> {
    let file = std::fs::File::open(path)?;
    load_application_json(file)
}
