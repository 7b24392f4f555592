//! Axum route handlers for the ATS analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyzer::{analyze, AnalysisRequest, AnalysisResult};
use crate::analysis::issue::Issue;
use crate::analysis::tailoring::TailoringAnalysis;
use crate::errors::AppError;
use crate::fixes::{build_fix_command, FixCommand, FixStrategy};
use crate::live::engine::{live_score, LiveResult};
use crate::live::hints::{generate_hints, ScoreHint};
use crate::models::resume::ParsedResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub result: AnalysisResult,
}

#[derive(Debug, Deserialize)]
pub struct LiveScoreRequest {
    pub resume: ParsedResume,
    pub job_description: Option<String>,
    /// The caller keeps the previous result between keystrokes; hints come
    /// from diffing against it.
    pub previous: Option<LiveResult>,
}

#[derive(Debug, Serialize)]
pub struct LiveScoreResponse {
    pub result: LiveResult,
    pub hints: Vec<ScoreHint>,
}

#[derive(Debug, Deserialize)]
pub struct FixStrategyRequest {
    pub issue: Issue,
    pub tailoring: Option<TailoringAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct FixStrategyResponse {
    pub strategy: FixStrategy,
    pub command: FixCommand,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Runs the full batch analysis on an already-parsed résumé. A résumé with
/// no readable text is the fatal parse failure — everything past it degrades
/// instead of erroring.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "resume text could not be extracted".to_string(),
        ));
    }

    let result = analyze(state.llm.as_ref(), &request).await;

    Ok(Json(AnalyzeResponse {
        analysis_id: Uuid::new_v4(),
        result,
    }))
}

/// POST /api/v1/ats/live-score
///
/// Network-free scoring pass plus hints against the previous result. The
/// same computation the editor runs client-side; exposed for previews.
pub async fn handle_live_score(
    State(_state): State<AppState>,
    Json(request): Json<LiveScoreRequest>,
) -> Result<Json<LiveScoreResponse>, AppError> {
    let result = live_score(&request.resume, request.job_description.as_deref());
    let hints = generate_hints(&result, request.previous.as_ref());

    Ok(Json(LiveScoreResponse { result, hints }))
}

/// POST /api/v1/ats/fix-strategy
///
/// Resolves the remediation strategy and command for a flagged issue.
pub async fn handle_fix_strategy(
    State(_state): State<AppState>,
    Json(request): Json<FixStrategyRequest>,
) -> Result<Json<FixStrategyResponse>, AppError> {
    let command = build_fix_command(&request.issue, request.tailoring.as_ref());

    Ok(Json(FixStrategyResponse {
        strategy: command.strategy,
        command,
    }))
}
