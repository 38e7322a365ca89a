//! Handlers for workout plans and their plan-nested exercise entries
//! (`/plans`).
//!
//! All routes require authentication. List and create scope to the
//! token's user; by-id operations resolve plans globally, matching the
//! original contract.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::workout_exercise::AppendPlanExercise;
use ironlog_db::models::workout_plan::{CreateWorkoutPlan, PlanListParams, UpdateWorkoutPlan};
use ironlog_db::repositories::{ExerciseRepo, WorkoutExerciseRepo, WorkoutPlanRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Default sets for an entry added without explicit targets.
const DEFAULT_SETS: i32 = 3;
/// Default reps for an entry added without explicit targets.
const DEFAULT_REPS: i32 = 12;

/// Reject non-positive sets/reps and negative weight before persistence.
fn validate_targets(sets: i32, reps: i32, weight: f64) -> AppResult<()> {
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
    Ok(())
}

/// Resolve a plan id or fail with the plan's NotFound error.
async fn require_plan(state: &AppState, id: DbId) -> AppResult<()> {
    WorkoutPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlan",
            id,
        }))?;
    Ok(())
}

/// Resolve an exercise id or fail with the exercise's NotFound error.
///
/// Kept distinct from [`require_plan`] so callers of the add-exercise
/// paths can tell "plan not found" from "exercise not found".
async fn require_exercise(state: &AppState, id: DbId) -> AppResult<()> {
    ExerciseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Plan CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/plans
///
/// List the authenticated user's plans.
pub async fn list_plans(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PlanListParams>,
) -> AppResult<impl IntoResponse> {
    let plans = WorkoutPlanRepo::list_for_user(&state.pool, auth.user_id, &params).await?;

    Ok(Json(plans))
}

/// POST /api/v1/plans
///
/// Create a plan, optionally seeded with an initial exercise list whose
/// order is positional (`index + 1`). Duplicate (owner, name) is 409.
pub async fn create_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWorkoutPlan>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation {
            field: "name",
            reason: "must not be empty".into(),
        }));
    }

    if WorkoutPlanRepo::find_by_owner_and_name(&state.pool, auth.user_id, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict {
            entity: "WorkoutPlan",
            field: "name",
        }));
    }

    // Resolve every referenced exercise before creating anything, so a
    // bad reference cannot leave a half-seeded plan behind.
    for entry in &input.exercises {
        require_exercise(&state, entry.exercise_id).await?;
        validate_targets(
            entry.sets.unwrap_or(DEFAULT_SETS),
            entry.reps.unwrap_or(DEFAULT_REPS),
            entry.weight.unwrap_or(0.0),
        )?;
    }

    let plan =
        WorkoutPlanRepo::create(&state.pool, auth.user_id, &input.name, &input.description).await?;

    for (index, entry) in input.exercises.iter().enumerate() {
        WorkoutExerciseRepo::create(
            &state.pool,
            plan.id,
            entry.exercise_id,
            entry.sets.unwrap_or(DEFAULT_SETS),
            entry.reps.unwrap_or(DEFAULT_REPS),
            entry.weight.unwrap_or(0.0),
            index as i32 + 1,
        )
        .await?;
    }

    tracing::info!(
        plan_id = plan.id,
        user_id = auth.user_id,
        exercises = input.exercises.len(),
        "Workout plan created"
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/plans/{id}
pub async fn get_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let plan = WorkoutPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlan",
            id,
        }))?;

    Ok(Json(plan))
}

/// PUT /api/v1/plans/{id}
///
/// Rename a plan / replace its description. A rename that collides with
/// another of the owner's plans surfaces as 409 via the unique constraint.
pub async fn update_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkoutPlan>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation {
            field: "name",
            reason: "must not be empty".into(),
        }));
    }

    let plan = WorkoutPlanRepo::update(&state.pool, id, &input.name, &input.description)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlan",
            id,
        }))?;

    tracing::info!(plan_id = id, "Workout plan updated");

    Ok(Json(plan))
}

/// DELETE /api/v1/plans/{id}
///
/// Transactionally removes the plan and all its entries. A plan with
/// logged completions is blocked (409) by `fk_workout_logs_plan`.
pub async fn delete_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WorkoutPlanRepo::delete_cascade(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlan",
            id,
        }));
    }

    tracing::info!(plan_id = id, user_id = auth.user_id, "Workout plan deleted");

    Ok(Json(MessageResponse {
        message: "Workout plan deleted",
    }))
}

// ---------------------------------------------------------------------------
// Plan-nested exercise entries
// ---------------------------------------------------------------------------

/// GET /api/v1/plans/{id}/exercises (also served at /workout-exercises/{plan_id})
///
/// The plan's entries in execution order.
pub async fn list_plan_exercises(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(plan_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_plan(&state, plan_id).await?;

    let entries = WorkoutExerciseRepo::list_for_plan(&state.pool, plan_id).await?;

    Ok(Json(entries))
}

/// POST /api/v1/plans/{id}/exercises
///
/// Append an exercise to the plan. The order number is computed as
/// `count + 1`; concurrent appends may race to the same number, which is
/// an accepted limitation -- listing stays deterministic either way.
pub async fn append_plan_exercise(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(plan_id): Path<DbId>,
    Json(input): Json<AppendPlanExercise>,
) -> AppResult<impl IntoResponse> {
    require_plan(&state, plan_id).await?;
    require_exercise(&state, input.exercise_id).await?;

    let sets = input.sets.unwrap_or(DEFAULT_SETS);
    let reps = input.reps.unwrap_or(DEFAULT_REPS);
    let weight = input.weight.unwrap_or(0.0);
    validate_targets(sets, reps, weight)?;

    let count = WorkoutExerciseRepo::count_for_plan(&state.pool, plan_id).await?;
    let entry = WorkoutExerciseRepo::create(
        &state.pool,
        plan_id,
        input.exercise_id,
        sets,
        reps,
        weight,
        count as i32 + 1,
    )
    .await?;

    tracing::info!(
        plan_id,
        entry_id = entry.id,
        user_id = auth.user_id,
        order_number = entry.order_number,
        "Exercise appended to plan"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}
