use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationEvidence, ApplicationId, RatingResult};
use super::CandidateRater;

/// Router exposing single and batch rating endpoints.
pub fn rating_router(rater: Arc<CandidateRater>) -> Router {
    Router::new()
        .route("/api/v1/candidates/rating", post(rate_handler))
        .route("/api/v1/candidates/ratings", post(batch_rate_handler))
        .with_state(rater)
}

#[derive(Debug, Deserialize)]
pub struct BatchRatingRequest {
    pub candidates: Vec<CandidateEvidence>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateEvidence {
    pub id: ApplicationId,
    #[serde(flatten)]
    pub evidence: ApplicationEvidence,
}

#[derive(Debug, Serialize)]
pub struct BatchRatingResponse {
    pub ratings: Vec<CandidateRating>,
}

#[derive(Debug, Serialize)]
pub struct CandidateRating {
    pub id: ApplicationId,
    pub rating: RatingResult,
}

pub(crate) async fn rate_handler(
    State(rater): State<Arc<CandidateRater>>,
    Json(evidence): Json<ApplicationEvidence>,
) -> Json<RatingResult> {
    Json(rater.rate(&evidence))
}

pub(crate) async fn batch_rate_handler(
    State(rater): State<Arc<CandidateRater>>,
    Json(request): Json<BatchRatingRequest>,
) -> Json<BatchRatingResponse> {
    let ratings = request
        .candidates
        .into_iter()
        .map(|candidate| CandidateRating {
            rating: rater.rate(&candidate.evidence),
            id: candidate.id,
        })
        .collect();

    Json(BatchRatingResponse { ratings })
}
