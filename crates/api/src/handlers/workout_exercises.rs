//! Handlers for standalone plan-exercise operations (`/workout-exercises`).
//!
//! This is the explicit-order surface: creation takes the order number
//! from the caller instead of appending. Update and delete address
//! entries by their own id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::workout_exercise::{CreateWorkoutExercise, UpdateWorkoutExercise};
use ironlog_db::repositories::{ExerciseRepo, WorkoutExerciseRepo, WorkoutPlanRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Reject invalid numeric targets or a non-positive order number.
fn validate_entry(sets: i32, reps: i32, weight: f64, order_number: i32) -> AppResult<()> {
    if sets <= 0 {
        return Err(AppError::Core(CoreError::Validation {
            field: "sets",
            reason: "must be a positive integer".into(),
        }));
    }
    if reps <= 0 {
        return Err(AppError::Core(CoreError::Validation {
            field: "reps",
            reason: "must be a positive integer".into(),
        }));
    }
    if weight < 0.0 {
        return Err(AppError::Core(CoreError::Validation {
            field: "weight",
            reason: "must not be negative".into(),
        }));
    }
    if order_number <= 0 {
        return Err(AppError::Core(CoreError::Validation {
            field: "order_number",
            reason: "must be a positive integer".into(),
        }));
    }
    Ok(())
}

/// POST /api/v1/workout-exercises
///
/// Create an entry with a caller-supplied order number. Both referenced
/// ids are resolved first; the two failure cases stay distinguishable.
pub async fn create_workout_exercise(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWorkoutExercise>,
) -> AppResult<impl IntoResponse> {
    let weight = input.weight.unwrap_or(0.0);
    validate_entry(input.sets, input.reps, weight, input.order_number)?;

    WorkoutPlanRepo::find_by_id(&state.pool, input.workout_plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlan",
            id: input.workout_plan_id,
        }))?;
    ExerciseRepo::find_by_id(&state.pool, input.exercise_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id: input.exercise_id,
        }))?;

    let entry = WorkoutExerciseRepo::create(
        &state.pool,
        input.workout_plan_id,
        input.exercise_id,
        input.sets,
        input.reps,
        weight,
        input.order_number,
    )
    .await?;

    tracing::info!(
        entry_id = entry.id,
        plan_id = input.workout_plan_id,
        user_id = auth.user_id,
        "Workout exercise created"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/v1/workout-exercises/{id}
///
/// Replace an entry's numeric targets and order.
pub async fn update_workout_exercise(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkoutExercise>,
) -> AppResult<impl IntoResponse> {
    validate_entry(input.sets, input.reps, input.weight, input.order_number)?;

    let entry = WorkoutExerciseRepo::update(
        &state.pool,
        id,
        input.sets,
        input.reps,
        input.weight,
        input.order_number,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "WorkoutExercise",
        id,
    }))?;

    tracing::info!(entry_id = id, "Workout exercise updated");

    Ok(Json(entry))
}

/// DELETE /api/v1/workout-exercises/{id}
pub async fn delete_workout_exercise(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WorkoutExerciseRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WorkoutExercise",
            id,
        }));
    }

    tracing::info!(entry_id = id, "Workout exercise deleted");

    Ok(Json(MessageResponse {
        message: "Workout exercise deleted",
    }))
}
