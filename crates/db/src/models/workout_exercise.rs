//! Plan-exercise entity model and DTOs.
//!
//! A workout exercise is one line item of a plan: a reference to a catalog
//! exercise plus its target sets/reps/weight and display order.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workout_exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutExercise {
    pub id: DbId,
    pub workout_plan_id: DbId,
    pub exercise_id: DbId,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    /// 1-based position within the plan. Contiguity is a convention the
    /// append path maintains, not a constraint.
    pub order_number: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/v1/workout-exercises` (explicit order).
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutExercise {
    pub workout_plan_id: DbId,
    pub exercise_id: DbId,
    pub sets: i32,
    pub reps: i32,
    /// Defaults to 0 when omitted.
    pub weight: Option<f64>,
    pub order_number: i32,
}

/// DTO for `POST /api/v1/plans/{id}/exercises` (append).
///
/// The order number is computed server-side as `count + 1`; sets, reps
/// and weight fall back to defaults when omitted.
#[derive(Debug, Deserialize)]
pub struct AppendPlanExercise {
    pub exercise_id: DbId,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
}

/// DTO for `PUT /api/v1/workout-exercises/{id}` (numeric fields + order).
#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutExercise {
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    pub order_number: i32,
}
