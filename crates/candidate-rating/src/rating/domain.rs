use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for applications rated in bulk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// A single application question paired with the candidate's free-text answer.
///
/// Either side may arrive as a plain string or as an ATS `{ "label": ... }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub answer: Option<String>,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    pub fn question_text(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }

    /// Answer text, or `None` when the pair carries nothing worth analysing.
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|answer| !answer.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelOrText {
    Text(String),
    Number(serde_json::Number),
    Labeled {
        #[serde(default)]
        label: Option<String>,
    },
    Other(serde::de::IgnoredAny),
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LabelOrText>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        LabelOrText::Text(text) => Some(text),
        LabelOrText::Number(number) => Some(number.to_string()),
        LabelOrText::Labeled { label } => label,
        LabelOrText::Other(_) => None,
    }))
}

/// Everything the rating engine reads for one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEvidence {
    #[serde(default)]
    pub questions_and_answers: Vec<QuestionAnswer>,
    #[serde(default)]
    pub resume_text: Option<String>,
    /// Resume text under the name some ATS payloads use instead of `resumeText`.
    #[serde(default)]
    pub parsed_resume: Option<String>,
    /// Carried for callers; not yet consulted by the calculation.
    #[serde(default)]
    pub cover_letter_text: Option<String>,
}

impl ApplicationEvidence {
    pub fn from_answers(questions_and_answers: Vec<QuestionAnswer>) -> Self {
        Self {
            questions_and_answers,
            ..Self::default()
        }
    }

    pub fn with_resume_text(mut self, resume_text: impl Into<String>) -> Self {
        self.resume_text = Some(resume_text.into());
        self
    }

    /// First non-empty resume text, preferring `resumeText` over `parsedResume`.
    pub fn fallback_text(&self) -> Option<&str> {
        [&self.resume_text, &self.parsed_resume]
            .into_iter()
            .filter_map(|text| text.as_deref())
            .find(|text| !text.is_empty())
    }
}

/// Education level inferred from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationSignal {
    pub level: String,
    pub score: u8,
}

/// Institution mention and whether it sits on the privileged list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionSignal {
    pub name: String,
    pub is_prestigious: bool,
}

/// Kind of evidence a signal contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalCategory {
    Education,
    Institution,
    Experience,
}

impl SignalCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SignalCategory::Education => "education",
            SignalCategory::Institution => "institution",
            SignalCategory::Experience => "experience",
        }
    }
}

/// Candidate field a signal was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvidenceSource {
    QuestionsAndAnswers,
    ResumeText,
}

impl EvidenceSource {
    pub const fn label(self) -> &'static str {
        match self {
            EvidenceSource::QuestionsAndAnswers => "questionsAndAnswers",
            EvidenceSource::ResumeText => "resumeText",
        }
    }
}

/// Records which source field produced which category of signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProvenanceTag {
    pub source: EvidenceSource,
    pub category: SignalCategory,
}

impl ProvenanceTag {
    pub const fn new(source: EvidenceSource, category: SignalCategory) -> Self {
        Self { source, category }
    }
}

impl fmt::Display for ProvenanceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source.label(), self.category.label())
    }
}

impl Serialize for ProvenanceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How many of the two scoring categories had usable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationBreakdown {
    pub score: u8,
    pub level: Option<String>,
    pub institution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceBreakdown {
    pub score: u8,
    pub years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    pub education: EducationBreakdown,
    pub experience: ExperienceBreakdown,
}

/// Final 0-10 candidate rating returned to callers verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResult {
    pub overall: f64,
    pub breakdown: RatingBreakdown,
    pub confidence: Confidence,
    pub data_source: Vec<ProvenanceTag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_answer_accepts_labeled_objects() {
        let pair: QuestionAnswer = serde_json::from_value(json!({
            "question": { "id": 7, "label": "Highest qualification?" },
            "answer": { "label": "BCom" }
        }))
        .expect("labeled pair decodes");

        assert_eq!(pair.question_text(), "Highest qualification?");
        assert_eq!(pair.answer_text(), Some("BCom"));
    }

    #[test]
    fn question_answer_tolerates_missing_and_null_fields() {
        let pair: QuestionAnswer =
            serde_json::from_value(json!({ "question": null, "answer": {} })).expect("decodes");

        assert_eq!(pair.question_text(), "");
        assert_eq!(pair.answer_text(), None);
    }

    #[test]
    fn numeric_answers_are_read_as_text() {
        let pair: QuestionAnswer =
            serde_json::from_value(json!({ "question": "Years of experience?", "answer": 12 }))
                .expect("decodes");

        assert_eq!(pair.answer_text(), Some("12"));
    }

    #[test]
    fn empty_answer_is_treated_as_absent() {
        let pair = QuestionAnswer::new("Years of experience?", "");
        assert_eq!(pair.answer_text(), None);
    }

    #[test]
    fn evidence_reads_parsed_resume_field() {
        let evidence: ApplicationEvidence = serde_json::from_value(json!({
            "questionsAndAnswers": [],
            "parsedResume": "MBA, 8 years in audit"
        }))
        .expect("evidence decodes");

        assert_eq!(evidence.fallback_text(), Some("MBA, 8 years in audit"));
        assert!(evidence.cover_letter_text.is_none());
    }

    #[test]
    fn empty_resume_text_defers_to_parsed_resume() {
        let evidence: ApplicationEvidence = serde_json::from_value(json!({
            "questionsAndAnswers": [],
            "resumeText": "",
            "parsedResume": "PhD, 12 years"
        }))
        .expect("both resume fields decode");

        assert_eq!(evidence.fallback_text(), Some("PhD, 12 years"));
    }

    #[test]
    fn resume_text_wins_when_both_are_present() {
        let evidence: ApplicationEvidence = serde_json::from_value(json!({
            "resumeText": "BCom, 3 years",
            "parsedResume": "PhD, 12 years"
        }))
        .expect("both resume fields decode");

        assert_eq!(evidence.fallback_text(), Some("BCom, 3 years"));
    }

    #[test]
    fn provenance_tag_serializes_as_source_and_category() {
        let tag = ProvenanceTag::new(EvidenceSource::ResumeText, SignalCategory::Experience);
        assert_eq!(
            serde_json::to_value(tag).expect("serializes"),
            json!("resumeText:experience")
        );
    }
}
