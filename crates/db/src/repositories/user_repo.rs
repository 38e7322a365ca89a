//! Repository for the `users` table (accounts and profile data).

use chrono::NaiveDate;
use sqlx::PgPool;

use ironlog_core::types::DbId;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, password_hash, username, goal, weight_history, created_at, updated_at";

/// Provides account and profile operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Callers pre-check the email for duplicates; `uq_users_email` is the
    /// backstop for races.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, username) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Replace the user's training goal (may be cleared with `None`).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_goal(
        pool: &PgPool,
        id: DbId,
        goal: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET goal = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(goal)
            .fetch_optional(pool)
            .await
    }

    /// Append a `{date, weight}` entry to the JSONB weight history.
    ///
    /// The history is append-only; `date` is captured by the caller so
    /// tests control it. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn append_weight(
        pool: &PgPool,
        id: DbId,
        date: NaiveDate,
        weight: f64,
    ) -> Result<Option<User>, sqlx::Error> {
        let entry = serde_json::json!({ "date": date, "weight": weight });
        let query = format!(
            "UPDATE users SET weight_history = weight_history || $2::jsonb, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(entry)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored password hash.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
