//! Workout plan entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workout_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutPlan {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// One initial exercise entry supplied inline with plan creation.
///
/// Order is positional (`index + 1`); sets/reps/weight fall back to the
/// append defaults when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct InitialPlanExercise {
    pub exercise_id: DbId,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
}

/// DTO for `POST /api/v1/plans`.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutPlan {
    pub name: String,
    pub description: String,
    /// Optional initial exercises, added in list order after the plan row.
    #[serde(default)]
    pub exercises: Vec<InitialPlanExercise>,
}

/// DTO for `PUT /api/v1/plans/{id}` (name/description only).
#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutPlan {
    pub name: String,
    pub description: String,
}

/// Query parameters for `GET /api/v1/plans`.
///
/// Same permissive sort contract as the exercise catalog: unknown
/// `sort_by`/`sort_order` fall back to `name`/`asc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanListParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Case-insensitive substring filter on the name.
    pub name: Option<String>,
    /// Case-insensitive substring filter on the description.
    pub description: Option<String>,
}
