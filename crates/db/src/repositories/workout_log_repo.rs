//! Repository for the `workout_logs` table and its aggregates.
//!
//! The log is append-only: there is no update or delete here. Every
//! function that involves "now" takes it as a parameter so tests can
//! inject deterministic timestamps.

use sqlx::PgPool;

use ironlog_core::types::{DbId, Timestamp};

use crate::models::workout_log::{DailyCount, TotalStats, WorkoutLog, WorkoutLogWithPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, workout_plan_id, completed_at, notes, created_at, updated_at";

/// Provides append and aggregate queries for completion logs.
pub struct WorkoutLogRepo;

impl WorkoutLogRepo {
    /// Append a completion record, returning the created row.
    ///
    /// `completed_at` is captured by the caller at the request edge. The
    /// plan id is not pre-checked: a dangling reference surfaces as a
    /// foreign-key violation on `fk_workout_logs_plan`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        workout_plan_id: DbId,
        notes: Option<&str>,
        completed_at: Timestamp,
    ) -> Result<WorkoutLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_logs (user_id, workout_plan_id, notes, completed_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutLog>(&query)
            .bind(user_id)
            .bind(workout_plan_id)
            .bind(notes)
            .bind(completed_at)
            .fetch_one(pool)
            .await
    }

    /// List one user's completions, newest first, each joined with the
    /// name of the plan it completed.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WorkoutLogWithPlan>, sqlx::Error> {
        sqlx::query_as::<_, WorkoutLogWithPlan>(
            "SELECT l.id, l.user_id, l.workout_plan_id, p.name AS plan_name, \
                    l.completed_at, l.notes, l.created_at, l.updated_at \
             FROM workout_logs l \
             JOIN workout_plans p ON p.id = l.workout_plan_id \
             WHERE l.user_id = $1 \
             ORDER BY l.completed_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Completion counts per calendar date, newest date first.
    ///
    /// `since` is the inclusive lower bound of the window (`None` means
    /// all-time); the caller derives it from the requested period.
    pub async fn counts_by_date(
        pool: &PgPool,
        user_id: DbId,
        since: Option<Timestamp>,
    ) -> Result<Vec<DailyCount>, sqlx::Error> {
        sqlx::query_as::<_, DailyCount>(
            "SELECT completed_at::date AS date, COUNT(*) AS count \
             FROM workout_logs \
             WHERE user_id = $1 AND ($2::timestamptz IS NULL OR completed_at >= $2) \
             GROUP BY completed_at::date \
             ORDER BY date DESC",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Lifetime totals: overall count, distinct plans, latest completion.
    ///
    /// The aggregate row always exists; for a user with no logs it carries
    /// zero counts and a NULL `last_workout`.
    pub async fn total_stats(pool: &PgPool, user_id: DbId) -> Result<TotalStats, sqlx::Error> {
        sqlx::query_as::<_, TotalStats>(
            "SELECT COUNT(*) AS total_workouts, \
                    COUNT(DISTINCT workout_plan_id) AS unique_plans, \
                    MAX(completed_at) AS last_workout \
             FROM workout_logs \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
