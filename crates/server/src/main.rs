use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use shared::{
    domain::Match,
    error::{ApiError, ErrorCode},
};
use tracing::info;

mod app_state;
mod config;
mod fixtures;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let results = fixtures::mock_results();
    info!(count = results.len(), "loaded mock result table");

    let state = AppState {
        results: Arc::new(results),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "results server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/results", get(list_results))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

// The table is static and served in source order; filtering and sorting
// are client-side concerns.
async fn list_results(State(state): State<Arc<AppState>>) -> Json<Vec<Match>> {
    Json(state.results.as_ref().clone())
}

async fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, "unknown route")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use shared::domain::MatchId;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(Arc::new(AppState {
            results: Arc::new(fixtures::mock_results()),
        }))
    }

    #[tokio::test]
    async fn healthz_responds_ok() {
        let response = test_app()
            .oneshot(
                Request::get("/healthz")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn results_route_returns_full_table_in_source_order() {
        let response = test_app()
            .oneshot(
                Request::get("/api/results")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let matches: Vec<Match> = serde_json::from_slice(&body).expect("json array");

        assert_eq!(matches.len(), 12);
        let ids: Vec<i64> = matches.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<i64>>());

        let first = &matches[0];
        assert_eq!(first.team1, "Team A");
        assert_eq!(first.team1_score, 2);
        assert_eq!(first.team2, "Team B");
        assert_eq!(first.team2_score, 1);
        assert_eq!(first.date.to_string(), "2024-02-10");
    }

    #[tokio::test]
    async fn results_wire_format_uses_camel_case_keys() {
        let response = test_app()
            .oneshot(
                Request::get("/api/results")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let raw: serde_json::Value = serde_json::from_slice(&body).expect("json");
        let first = &raw.as_array().expect("array")[0];
        assert!(first.get("team1Score").is_some());
        assert!(first.get("team2Score").is_some());
        assert_eq!(first.get("date").and_then(|v| v.as_str()), Some("2024-02-10"));
    }

    #[tokio::test]
    async fn unknown_route_returns_api_error_body() {
        let response = test_app()
            .oneshot(
                Request::get("/api/standings")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let error: ApiError = serde_json::from_slice(&body).expect("error body");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[test]
    fn fixture_ids_are_unique_and_stable() {
        let results = fixtures::mock_results();
        let ids: std::collections::HashSet<MatchId> = results.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), results.len());
    }
}
