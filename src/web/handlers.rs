// JSON handlers for the similarity API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::errors::SimilarityError;
use crate::output::format_percent;
use crate::web::{api_error, AppState};

/// POST /api/similarity request body.
///
/// Absent or null text fields are valid input and score as empty text.
#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub plagiarized_text: Option<String>,
    /// When set, score with this single algorithm instead of the ensemble.
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// POST /api/similarity — ensemble or single-algorithm scoring.
pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<SimilarityRequest>,
) -> Response {
    let original = request.original_text.as_deref().unwrap_or("");
    let suspect = request.plagiarized_text.as_deref().unwrap_or("");

    let ceiling = state.config.max_input_chars;
    if original.chars().count() > ceiling || suspect.chars().count() > ceiling {
        return api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            &format!("input exceeds the configured ceiling of {ceiling} characters"),
        );
    }

    let score = match &request.algorithm {
        Some(name) => match state.ensemble.score_with(original, suspect, name) {
            Ok(score) => score,
            Err(SimilarityError::AlgorithmNotFound(name)) => {
                return api_error(
                    StatusCode::NOT_FOUND,
                    &format!("unknown algorithm: {name}"),
                );
            }
            Err(error) => {
                tracing::error!(%error, "similarity computation failed");
                return api_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "similarity computation failed",
                );
            }
        },
        None => state.ensemble.score_all(original, suspect),
    };

    Json(serde_json::json!({
        "success": true,
        "similarity": score,
        "similarity_percent": format_percent(score),
        "algorithm": request.algorithm,
        "plagiarism_suspected": score >= state.config.threshold,
    }))
    .into_response()
}

/// GET /api/algorithms — registration-order name list.
pub async fn list_algorithms(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "algorithms": state.ensemble.algorithm_names() }))
}

/// GET /api/performance/stats — counters snapshot.
pub async fn performance_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.stats.report())
}

/// POST /api/performance/clear — zero the counters.
pub async fn clear_performance(State(state): State<AppState>) -> impl IntoResponse {
    state.stats.reset();
    Json(serde_json::json!({ "success": true }))
}
