//! Exercise catalog entity model and DTOs.

use ironlog_core::catalog::split_muscle_list;
use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Canonical difficulty string (`Beginner`, `Intermediate`, `Advanced`).
    pub difficulty_level: String,
    pub target_muscles: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Target muscles arrive either as a ready list or as one comma-separated
/// string; both shapes are accepted on input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TargetMuscles {
    List(Vec<String>),
    Single(String),
}

impl TargetMuscles {
    /// Normalize into a list: a single string is split on commas and
    /// trimmed, a list passes through untouched.
    pub fn into_list(self) -> Vec<String> {
        match self {
            TargetMuscles::List(list) => list,
            TargetMuscles::Single(raw) => split_muscle_list(&raw),
        }
    }
}

/// DTO for creating an exercise.
#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub target_muscles: TargetMuscles,
    pub image_url: Option<String>,
}

/// DTO for the full-field update. `image_url` is the one exception to
/// "full": when omitted, the stored value is kept (COALESCE semantics).
#[derive(Debug, Deserialize)]
pub struct UpdateExercise {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub target_muscles: TargetMuscles,
    pub image_url: Option<String>,
}

/// DTO for the image-only update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateExerciseImage {
    pub image_url: String,
}

/// Query parameters for `GET /api/v1/exercises`.
///
/// Unknown `sort_by`/`sort_order` values silently fall back to
/// `name`/`asc` in the repository; that permissive contract is intentional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseListParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Case-insensitive substring filter on the name.
    pub name: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
    /// Exact difficulty filter.
    pub difficulty_level: Option<String>,
}
