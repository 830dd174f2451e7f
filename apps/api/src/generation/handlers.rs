//! Axum route handlers for the worksheet API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, ConfigError};
use crate::generation::arithmetic::Problem;
use crate::generation::long_division::{long_division, LongDivision};
use crate::generation::practice::{generate_problems, PracticeType, ProblemRequest, WorksheetMode};
use crate::generation::random::RandomSource;
use crate::layout::{build_layout, LayoutOptions, WorksheetLayout};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorksheetRequest {
    pub title: String,
    #[serde(flatten)]
    pub problems: ProblemRequest,
    pub layout: LayoutOptions,
}

impl Default for WorksheetRequest {
    fn default() -> Self {
        Self {
            title: "Arithmetic Practice".to_string(),
            problems: ProblemRequest::default(),
            layout: LayoutOptions::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorksheetResponse {
    pub worksheet_id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub mode: WorksheetMode,
    pub practice_type: PracticeType,
    pub problem_count: usize,
    pub layout: WorksheetLayout,
}

#[derive(Debug, Serialize)]
pub struct ProblemsResponse {
    pub problems: Vec<Problem>,
}

#[derive(Debug, Deserialize)]
pub struct LongDivisionRequest {
    pub dividend: u64,
    pub divisor: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/worksheets
///
/// Generates a fresh problem set and lays it out into pages and regions.
/// Two identical requests get different problems.
pub async fn handle_create_worksheet(
    State(state): State<AppState>,
    Json(request): Json<WorksheetRequest>,
) -> Result<Json<WorksheetResponse>, AppError> {
    let worksheet = build_worksheet(
        request,
        state.config.max_problem_count,
        &mut rand::rng(),
    )?;

    info!(
        "Built worksheet {} with {} problems on {} pages",
        worksheet.worksheet_id,
        worksheet.problem_count,
        worksheet.layout.pages.len()
    );
    Ok(Json(worksheet))
}

/// POST /api/v1/problems
///
/// Generates the problem list only, for callers that paginate themselves.
pub async fn handle_generate_problems(
    State(state): State<AppState>,
    Json(request): Json<ProblemRequest>,
) -> Result<Json<ProblemsResponse>, AppError> {
    let problems = generate_problems(
        &request,
        state.config.max_problem_count,
        &mut rand::rng(),
    )?;
    Ok(Json(ProblemsResponse { problems }))
}

/// POST /api/v1/long-division
///
/// Returns the step-by-step long-division trace. A zero divisor is rejected here
/// rather than silently treated as one.
pub async fn handle_long_division(
    Json(request): Json<LongDivisionRequest>,
) -> Result<Json<LongDivision>, AppError> {
    if request.divisor == 0 {
        return Err(ConfigError::ZeroDivisor.into());
    }
    Ok(Json(long_division(request.dividend, request.divisor)))
}

/// Generate → paginate → lay out. Synchronous so the RNG never crosses an await.
fn build_worksheet<R: RandomSource + ?Sized>(
    request: WorksheetRequest,
    max_count: usize,
    rng: &mut R,
) -> Result<WorksheetResponse, ConfigError> {
    let problems = generate_problems(&request.problems, max_count, rng)?;
    let layout = build_layout(&problems, request.problems.mode, &request.layout)?;

    Ok(WorksheetResponse {
        worksheet_id: Uuid::new_v4(),
        title: request.title,
        generated_at: Utc::now(),
        mode: request.problems.mode,
        practice_type: request.problems.practice_type,
        problem_count: problems.len(),
        layout,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
