//! Handlers for the exercise catalog (`/exercises`).
//!
//! The catalog is unauthenticated: exercises are shared reference data,
//! not user-owned. All writes validate before touching the database and
//! pre-check uniqueness; the `uq_`/`fk_` constraints backstop races.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ironlog_core::catalog::DifficultyLevel;
use ironlog_core::error::CoreError;
use ironlog_core::types::DbId;
use ironlog_db::models::exercise::{
    CreateExercise, ExerciseListParams, UpdateExercise, UpdateExerciseImage,
};
use ironlog_db::repositories::ExerciseRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Reject an empty or whitespace-only required string field.
fn require_non_empty(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation {
            field,
            reason: "must not be empty".into(),
        }));
    }
    Ok(())
}

/// Parse the difficulty string, rejecting unknown levels before any
/// persistence call.
fn parse_difficulty(raw: &str) -> AppResult<DifficultyLevel> {
    raw.parse::<DifficultyLevel>()
        .map_err(|reason| AppError::Core(CoreError::Validation {
            field: "difficulty_level",
            reason,
        }))
}

/// GET /api/v1/exercises
///
/// List the catalog with optional filters and whitelisted sorting.
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(params): Query<ExerciseListParams>,
) -> AppResult<impl IntoResponse> {
    let exercises = ExerciseRepo::list(&state.pool, &params).await?;

    Ok(Json(exercises))
}

/// POST /api/v1/exercises
///
/// Create a catalog exercise. Duplicate names are rejected with 409.
pub async fn create_exercise(
    State(state): State<AppState>,
    Json(input): Json<CreateExercise>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    let difficulty = parse_difficulty(&input.difficulty_level)?;

    if ExerciseRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict {
            entity: "Exercise",
            field: "name",
        }));
    }

    let muscles = input.target_muscles.into_list();
    let exercise = ExerciseRepo::create(
        &state.pool,
        &input.name,
        &input.description,
        &input.category,
        difficulty.as_str(),
        &muscles,
        input.image_url.as_deref(),
    )
    .await?;

    tracing::info!(exercise_id = exercise.id, name = %exercise.name, "Exercise created");

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /api/v1/exercises/{id}
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let exercise = ExerciseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;

    Ok(Json(exercise))
}

/// PUT /api/v1/exercises/{id}
///
/// Full-field update; an omitted image keeps its stored value.
pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExercise>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    let difficulty = parse_difficulty(&input.difficulty_level)?;

    let muscles = input.target_muscles.into_list();
    let exercise = ExerciseRepo::update(
        &state.pool,
        id,
        &input.name,
        &input.description,
        &input.category,
        difficulty.as_str(),
        &muscles,
        input.image_url.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Exercise",
        id,
    }))?;

    tracing::info!(exercise_id = id, "Exercise updated");

    Ok(Json(exercise))
}

/// PUT /api/v1/exercises/{id}/image
///
/// Replace only the image reference. The stored image asset itself is
/// managed by the upload layer, not here.
pub async fn update_exercise_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExerciseImage>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("image_url", &input.image_url)?;

    let exercise = ExerciseRepo::update_image(&state.pool, id, &input.image_url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }))?;

    tracing::info!(exercise_id = id, "Exercise image updated");

    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/{id}
///
/// Deleting an exercise still referenced by a plan is blocked; the
/// foreign-key violation maps to 409.
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ExerciseRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Exercise",
            id,
        }));
    }

    tracing::info!(exercise_id = id, "Exercise deleted");

    Ok(Json(MessageResponse {
        message: "Exercise deleted",
    }))
}
