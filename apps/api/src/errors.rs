use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::scoring::taxonomy::VocabularyKind;

/// Failures while loading or compiling a skill taxonomy. Startup-only; the scorer
/// itself has no error path.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to compile term pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Blank term in {0} vocabulary")]
    BlankTerm(VocabularyKind),

    #[error("The {0} vocabulary has no terms")]
    EmptyVocabulary(VocabularyKind),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("job_description cannot be empty".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_oversized_input_maps_to_unprocessable() {
        let response = AppError::UnprocessableEntity("too long".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_taxonomy_error_names_vocabulary() {
        let err = TaxonomyError::EmptyVocabulary(VocabularyKind::SoftSkills);
        assert_eq!(err.to_string(), "The soft_skills vocabulary has no terms");
    }
}
