//! Repository for the `exercises` table (the exercise catalog).

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::exercise::{Exercise, ExerciseListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category, difficulty_level, \
                       target_muscles, image_url, created_at, updated_at";

/// Provides CRUD operations for catalog exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert a new exercise, returning the created row.
    ///
    /// Callers pre-check the name for duplicates; the `uq_exercises_name`
    /// constraint is the backstop for races.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        category: &str,
        difficulty_level: &str,
        target_muscles: &[String],
        image_url: Option<&str>,
    ) -> Result<Exercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises \
                (name, description, category, difficulty_level, target_muscles, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .bind(description)
            .bind(category)
            .bind(difficulty_level)
            .bind(target_muscles)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an exercise by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an exercise by its exact name. Used for the duplicate pre-check.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE name = $1");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List exercises with optional filters and whitelisted sorting.
    ///
    /// Unknown `sort_by` values fall back to `name` and unknown
    /// `sort_order` values to `ASC` -- silently, by contract.
    pub async fn list(
        pool: &PgPool,
        params: &ExerciseListParams,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        let sort_column = match params.sort_by.as_deref() {
            Some("category") => "category",
            Some("difficulty") => "difficulty_level",
            Some("created_at") => "created_at",
            _ => "name",
        };
        let sort_dir = match params.sort_order.as_deref() {
            Some("desc") => "DESC",
            _ => "ASC",
        };

        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 0;
        if params.name.is_some() {
            bind_idx += 1;
            conditions.push(format!("name ILIKE '%' || ${bind_idx} || '%'"));
        }
        if params.category.is_some() {
            bind_idx += 1;
            conditions.push(format!("category = ${bind_idx}"));
        }
        if params.difficulty_level.is_some() {
            bind_idx += 1;
            conditions.push(format!("difficulty_level = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM exercises{where_clause} ORDER BY {sort_column} {sort_dir}"
        );

        let mut q = sqlx::query_as::<_, Exercise>(&query);
        if let Some(name) = &params.name {
            q = q.bind(name.clone());
        }
        if let Some(category) = &params.category {
            q = q.bind(category.clone());
        }
        if let Some(difficulty) = &params.difficulty_level {
            q = q.bind(difficulty.clone());
        }
        q.fetch_all(pool).await
    }

    /// Full-field update. `image_url` keeps its stored value when `None`
    /// (COALESCE); every other field is overwritten.
    ///
    /// Returns `None` if no row with the given `id` exists.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        description: &str,
        category: &str,
        difficulty_level: &str,
        target_muscles: &[String],
        image_url: Option<&str>,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises SET \
                name = $2, \
                description = $3, \
                category = $4, \
                difficulty_level = $5, \
                target_muscles = $6, \
                image_url = COALESCE($7, image_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .bind(category)
            .bind(difficulty_level)
            .bind(target_muscles)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Replace only the image reference, leaving every other field alone.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_image(
        pool: &PgPool,
        id: DbId,
        image_url: &str,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises SET image_url = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exercise by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any workout_exercises row
    /// still references the exercise (`fk_workout_exercises_exercise` is
    /// ON DELETE RESTRICT).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
