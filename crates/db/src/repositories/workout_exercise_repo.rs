//! Repository for the `workout_exercises` table (ordered plan line items).

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::workout_exercise::WorkoutExercise;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, workout_plan_id, exercise_id, sets, reps, weight, \
                       order_number, created_at, updated_at";

/// Provides CRUD operations for plan-exercise entries.
pub struct WorkoutExerciseRepo;

impl WorkoutExerciseRepo {
    /// Insert a new entry, returning the created row.
    ///
    /// Referential existence of the plan and exercise is pre-checked by the
    /// caller; the `fk_` constraints are the backstop for races.
    pub async fn create(
        pool: &PgPool,
        workout_plan_id: DbId,
        exercise_id: DbId,
        sets: i32,
        reps: i32,
        weight: f64,
        order_number: i32,
    ) -> Result<WorkoutExercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_exercises \
                (workout_plan_id, exercise_id, sets, reps, weight, order_number) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutExercise>(&query)
            .bind(workout_plan_id)
            .bind(exercise_id)
            .bind(sets)
            .bind(reps)
            .bind(weight)
            .bind(order_number)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutExercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_exercises WHERE id = $1");
        sqlx::query_as::<_, WorkoutExercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a plan's entries in execution order.
    ///
    /// Secondary sort on id keeps the result deterministic if two racing
    /// appends ever produced the same order_number.
    pub async fn list_for_plan(
        pool: &PgPool,
        workout_plan_id: DbId,
    ) -> Result<Vec<WorkoutExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_exercises \
             WHERE workout_plan_id = $1 \
             ORDER BY order_number ASC, id ASC"
        );
        sqlx::query_as::<_, WorkoutExercise>(&query)
            .bind(workout_plan_id)
            .fetch_all(pool)
            .await
    }

    /// Count a plan's entries. The append path derives the next
    /// order_number as `count + 1`.
    pub async fn count_for_plan(pool: &PgPool, workout_plan_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workout_exercises WHERE workout_plan_id = $1",
        )
        .bind(workout_plan_id)
        .fetch_one(pool)
        .await
    }

    /// Update an entry's numeric fields and order.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        sets: i32,
        reps: i32,
        weight: f64,
        order_number: i32,
    ) -> Result<Option<WorkoutExercise>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_exercises SET \
                sets = $2, reps = $3, weight = $4, order_number = $5, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutExercise>(&query)
            .bind(id)
            .bind(sets)
            .bind(reps)
            .bind(weight)
            .bind(order_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
