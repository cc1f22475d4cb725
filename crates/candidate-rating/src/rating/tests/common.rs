use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::rating::domain::{ApplicationEvidence, QuestionAnswer};
use crate::rating::{CandidateRater, RatingRules};

pub(super) fn rater() -> CandidateRater {
    CandidateRater::new(RatingRules::standard())
}

pub(super) fn qa(question: &str, answer: &str) -> QuestionAnswer {
    QuestionAnswer::new(question, answer)
}

pub(super) fn evidence(pairs: &[(&str, &str)]) -> ApplicationEvidence {
    ApplicationEvidence::from_answers(
        pairs
            .iter()
            .map(|(question, answer)| qa(question, answer))
            .collect(),
    )
}

/// Typical accounting applicant answering the standard screening questions.
pub(super) fn accountant_evidence() -> ApplicationEvidence {
    evidence(&[
        ("What is your highest level of education?", "BCom Honours in Accounting"),
        ("Which university did you attend?", "University of Johannesburg"),
        ("How many years of experience do you have?", "6 years in audit"),
    ])
}

pub(super) fn source_labels(tags: &[crate::rating::ProvenanceTag]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

pub(super) fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
