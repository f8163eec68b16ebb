use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::state::AppState;
use crate::scoring;
use crate::summary;

#[derive(Debug, Default, Deserialize)]
pub struct TextQuery {
    #[serde(default)]
    pub text: Option<String>,
}

/// A missing or non-string `text` field reads as empty.
fn body_text(body: &Value) -> &str {
    body.get("text").and_then(Value::as_str).unwrap_or("")
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /analyze?text=...
pub async fn analyze_query(Query(query): Query<TextQuery>) -> impl IntoResponse {
    analyze(query.text.as_deref().unwrap_or(""))
}

/// POST /analyze with `{"text": ...}`
pub async fn analyze_body(Json(body): Json<Value>) -> impl IntoResponse {
    analyze(body_text(&body))
}

/// GET /summary?text=...
pub async fn summary_query(
    State(state): State<AppState>,
    Query(query): Query<TextQuery>,
) -> impl IntoResponse {
    summarize(&state, query.text.as_deref().unwrap_or(""))
}

/// POST /summary with `{"text": ...}`
pub async fn summary_body(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    summarize(&state, body_text(&body))
}

fn analyze(text: &str) -> Json<crate::models::AnalysisResult> {
    let result = scoring::score(text);
    tracing::debug!(
        chars = text.chars().count(),
        score = result.score,
        label = %result.label,
        "Analyzed notice"
    );
    Json(result)
}

fn summarize(state: &AppState, text: &str) -> Json<summary::Summary> {
    let config = &state.config;
    let result = summary::summarize(text, config.preview_chars, config.frontend_base_url());
    tracing::debug!(
        chars = result.total_chars,
        truncated = result.truncated,
        score = result.score,
        label = %result.label,
        "Summarized notice"
    );
    Json(result)
}
