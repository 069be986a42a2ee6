// HTTP API — a thin JSON adapter over the scoring core.
//
// All routes are stateless. A single Ensemble instance serves every
// request concurrently: scoring only touches call-local state.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::similarity::Ensemble;
use crate::stats::PerfStats;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub ensemble: Arc<Ensemble>,
    pub stats: Arc<PerfStats>,
    pub config: Arc<Config>,
}

/// Start the API server and block until it exits.
pub async fn run_server(
    config: Config,
    ensemble: Arc<Ensemble>,
    stats: Arc<PerfStats>,
    bind: &str,
    port: u16,
) -> Result<()> {
    let state = AppState {
        ensemble,
        stats,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("mimeo API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the router. Public so tests can drive it without a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/similarity", post(handlers::compare))
        .route("/api/algorithms", get(handlers::list_algorithms))
        .route("/api/performance/stats", get(handlers::performance_stats))
        .route("/api/performance/clear", post(handlers::clear_performance))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// JSON error body with the given status.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        axum::Json(serde_json::json!({ "success": false, "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let stats = Arc::new(PerfStats::new());
        AppState {
            ensemble: Arc::new(Ensemble::new(Arc::clone(&stats))),
            stats,
            config: Arc::new(Config::default()),
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn identical_pair_scores_one() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json(
                "/api/similarity",
                r#"{"original_text":"same text","plagiarized_text":"same text"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["similarity"], 1.0);
        assert_eq!(json["plagiarism_suspected"], true);
    }

    #[tokio::test]
    async fn absent_text_fields_are_valid() {
        let app = build_router(test_state());
        let response = app.oneshot(post_json("/api/similarity", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["similarity"], 0.0);
    }

    #[tokio::test]
    async fn unknown_algorithm_is_404() {
        let app = build_router(test_state());
        let response = app
            .oneshot(post_json(
                "/api/similarity",
                r#"{"original_text":"a","plagiarized_text":"b","algorithm":"not-a-real-algorithm"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_input_is_rejected() {
        let app = build_router(test_state());
        let big = "a".repeat(10_001);
        let body = serde_json::json!({ "original_text": big, "plagiarized_text": "b" });
        let response = app
            .oneshot(post_json("/api/similarity", &body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn algorithms_are_listed_in_order() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/algorithms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(
            json["algorithms"],
            serde_json::json!(["Cosine Similarity", "Levenshtein Distance", "Jaccard Similarity"])
        );
    }

    #[tokio::test]
    async fn performance_counters_round_trip() {
        let state = test_state();
        let app = build_router(state.clone());

        // One comparison, then the counters should show a call per algorithm.
        let _ = app
            .clone()
            .oneshot(post_json(
                "/api/similarity",
                r#"{"original_text":"alpha beta","plagiarized_text":"alpha gamma"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/performance/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["algorithms"][0]["calls"], 1);

        let response = app
            .oneshot(post_json("/api/performance/clear", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.stats.report().algorithms[0].calls, 0);
    }
}
