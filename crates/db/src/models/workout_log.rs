//! Completion-log entity model, DTOs and aggregate row shapes.

use chrono::NaiveDate;
use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workout_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutLog {
    pub id: DbId,
    pub user_id: DbId,
    pub workout_plan_id: DbId,
    pub completed_at: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A log row joined with the name of the plan it completed.
///
/// List endpoints return this shape so clients render history without a
/// second lookup per entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutLogWithPlan {
    pub id: DbId,
    pub user_id: DbId,
    pub workout_plan_id: DbId,
    pub plan_name: String,
    pub completed_at: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for `POST /api/v1/workout-logs`.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutLog {
    pub workout_plan_id: DbId,
    pub notes: Option<String>,
}

/// Query params for `GET /api/v1/workout-logs/stats`.
#[derive(Debug, Default, Deserialize)]
pub struct StatsParams {
    /// "week", "month" or anything else for all-time.
    pub period: Option<String>,
}

// ---------------------------------------------------------------------------
// Aggregate row shapes
// ---------------------------------------------------------------------------

/// One day's completion count within a stats window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Lifetime totals for a user's log.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TotalStats {
    pub total_workouts: i64,
    pub unique_plans: i64,
    pub last_workout: Option<Timestamp>,
}
