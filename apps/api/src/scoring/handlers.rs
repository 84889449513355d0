//! Axum route handlers for the ATS API.
//!
//! Input validation lives here, at the boundary; the scorer itself accepts anything.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::scoring::ats::AtsScore;
use crate::scoring::taxonomy::TaxonomyFile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreRequest {
    pub resume: ResumeContent,
    pub job_description: String,
    pub job_title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub ats_score: AtsScore,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores a structured resume against a job description and title.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        warn!("Rejected score request: empty job_description");
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let jd_chars = request.job_description.chars().count();
    let limit = state.config.max_job_description_chars;
    if jd_chars > limit {
        warn!("Rejected score request: job_description has {jd_chars} chars (limit {limit})");
        return Err(AppError::UnprocessableEntity(format!(
            "job_description exceeds {limit} characters"
        )));
    }

    let ats_score = state.scorer.score(
        &request.resume,
        &request.job_description,
        &request.job_title,
    );
    info!("Scored resume: overall {}/100", ats_score.overall);

    Ok(Json(ScoreResponse {
        ats_score,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// GET /api/v1/ats/taxonomy
///
/// Returns the skill vocabularies the active scorer matches against.
pub async fn handle_taxonomy(State(state): State<AppState>) -> Json<TaxonomyFile> {
    Json(state.scorer.taxonomy().to_file())
}
