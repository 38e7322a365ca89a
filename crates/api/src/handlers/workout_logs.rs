//! Handlers for the append-only completion log and its statistics
//! (`/workout-logs`).
//!
//! "Now" is captured exactly once per request at this edge and passed
//! down; the repository layer never reads the clock.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use ironlog_core::stats::StatsPeriod;
use ironlog_db::models::workout_log::{CreateWorkoutLog, DailyCount, StatsParams, TotalStats};
use ironlog_db::repositories::WorkoutLogRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stats payload: per-date counts for the requested window plus the
/// user's lifetime totals.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub period: &'static str,
    pub by_date: Vec<DailyCount>,
    pub totals: TotalStats,
}

/// POST /api/v1/workout-logs
///
/// Mark a plan completed now. A plan with zero exercises may still be
/// completed; a dangling plan id surfaces as a referential conflict.
pub async fn log_completion(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWorkoutLog>,
) -> AppResult<impl IntoResponse> {
    let completed_at = Utc::now();

    let log = WorkoutLogRepo::create(
        &state.pool,
        auth.user_id,
        input.workout_plan_id,
        input.notes.as_deref(),
        completed_at,
    )
    .await?;

    tracing::info!(
        log_id = log.id,
        plan_id = input.workout_plan_id,
        user_id = auth.user_id,
        "Workout completion logged"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}

/// GET /api/v1/workout-logs
///
/// The user's completion history, newest first, with plan names joined in.
pub async fn list_completions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let logs = WorkoutLogRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: logs }))
}

/// GET /api/v1/workout-logs/stats?period=week|month|all
///
/// Per-date completion counts for the window plus lifetime totals.
/// Unrecognized period values fall back to all-time, by contract.
pub async fn stats(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> AppResult<impl IntoResponse> {
    let period = StatsPeriod::parse(params.period.as_deref().unwrap_or("all"));
    let since = period.window_start(Utc::now());

    let by_date = WorkoutLogRepo::counts_by_date(&state.pool, auth.user_id, since).await?;
    let totals = WorkoutLogRepo::total_stats(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: StatsResponse {
            period: period.as_str(),
            by_date,
            totals,
        },
    }))
}
