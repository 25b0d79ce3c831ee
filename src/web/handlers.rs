use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::agent::tools::{get_tool_definitions, ToolCall, ToolDefinition, ToolExecutor, ToolResult};
use crate::analysis::evaluate;
use crate::models::Report;

use super::form::EvaluateParams;
use super::page::{render_page, Outcome};
use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Coerce the submitted values and evaluate them on the blocking pool.
///
/// Primality checks on large inputs are CPU-bound for seconds, so they
/// must not run on a runtime worker. Bad input maps to 400, overflow to
/// 422, a panicked or cancelled task to 500.
async fn run_agent(params: EvaluateParams) -> Result<Report, (StatusCode, String)> {
    tokio::task::spawn_blocking(move || {
        let (a, b) = params.parse().map_err(|e| {
            debug!("Rejected form input: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

        evaluate(a, b).map_err(|e| {
            warn!("Evaluation failed: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })
    })
    .await
    .map_err(|e| {
        error!("Evaluation task failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?
}

// --- Form ---

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let a = state.defaults.a.to_string();
    let b = state.defaults.b.to_string();
    Html(render_page(&state.page_title, &a, &b, Outcome::Empty))
}

pub async fn evaluate_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EvaluateParams>,
) -> (StatusCode, Html<String>) {
    let a = params.a.clone().unwrap_or_default();
    let b = params.b.clone().unwrap_or_default();

    match run_agent(params).await {
        Ok(report) => (
            StatusCode::OK,
            Html(render_page(&state.page_title, &a, &b, Outcome::Report(&report))),
        ),
        Err((status, message)) => (
            status,
            Html(render_page(&state.page_title, &a, &b, Outcome::Error(&message))),
        ),
    }
}

// --- JSON API ---

pub async fn api_evaluate(
    Query(params): Query<EvaluateParams>,
) -> Result<Json<Report>, (StatusCode, Json<ErrorResponse>)> {
    run_agent(params)
        .await
        .map(Json)
        .map_err(|(status, error)| (status, Json(ErrorResponse { error })))
}

pub async fn list_tools() -> Json<Vec<ToolDefinition>> {
    Json(get_tool_definitions())
}

pub async fn call_tool(
    Json(call): Json<ToolCall>,
) -> Result<Json<ToolResult>, (StatusCode, String)> {
    tokio::task::spawn_blocking(move || ToolExecutor::new().execute(&call))
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
