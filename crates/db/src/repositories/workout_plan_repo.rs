//! Repository for the `workout_plans` table.

use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::workout_plan::{PlanListParams, WorkoutPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, created_at, updated_at";

/// Provides CRUD operations for workout plans.
pub struct WorkoutPlanRepo;

impl WorkoutPlanRepo {
    /// Insert a new plan for the given owner, returning the created row.
    ///
    /// Callers pre-check the (owner, name) pair; `uq_workout_plans_user_name`
    /// is the backstop for races.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
        description: &str,
    ) -> Result<WorkoutPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_plans (user_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(user_id)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Find a plan by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkoutPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_plans WHERE id = $1");
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a plan by owner and exact name. Used for the duplicate pre-check.
    pub async fn find_by_owner_and_name(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<WorkoutPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_plans WHERE user_id = $1 AND name = $2");
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List one user's plans with optional filters and whitelisted sorting.
    ///
    /// Same permissive contract as the exercise catalog: unknown `sort_by`
    /// falls back to `name`, unknown `sort_order` to `ASC`.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        params: &PlanListParams,
    ) -> Result<Vec<WorkoutPlan>, sqlx::Error> {
        let sort_column = match params.sort_by.as_deref() {
            Some("created_at") => "created_at",
            Some("updated_at") => "updated_at",
            _ => "name",
        };
        let sort_dir = match params.sort_order.as_deref() {
            Some("desc") => "DESC",
            _ => "ASC",
        };

        let mut conditions = vec!["user_id = $1".to_string()];
        let mut bind_idx = 1;
        if params.name.is_some() {
            bind_idx += 1;
            conditions.push(format!("name ILIKE '%' || ${bind_idx} || '%'"));
        }
        if params.description.is_some() {
            bind_idx += 1;
            conditions.push(format!("description ILIKE '%' || ${bind_idx} || '%'"));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM workout_plans WHERE {} ORDER BY {sort_column} {sort_dir}",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, WorkoutPlan>(&query).bind(user_id);
        if let Some(name) = &params.name {
            q = q.bind(name.clone());
        }
        if let Some(description) = &params.description {
            q = q.bind(description.clone());
        }
        q.fetch_all(pool).await
    }

    /// Update a plan's name and description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        description: &str,
    ) -> Result<Option<WorkoutPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_plans SET name = $2, description = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plan and all its plan-exercise entries in one transaction.
    ///
    /// Returns `true` if the plan row was removed. A crash between the two
    /// statements cannot leave orphaned entries: either both deletes commit
    /// or neither does. Fails with a foreign-key violation if the plan has
    /// logged completions (`fk_workout_logs_plan` is ON DELETE RESTRICT).
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM workout_exercises WHERE workout_plan_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM workout_plans WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
