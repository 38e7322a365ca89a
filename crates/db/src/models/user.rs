//! User entity model and DTOs.

use ironlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub username: String,
    /// Free-text training goal, set from the profile screen.
    pub goal: Option<String>,
    /// Append-only JSONB array of `{date, weight}` entries.
    pub weight_history: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub goal: Option<String>,
    pub weight_history: serde_json::Value,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            username: user.username,
            goal: user.goal,
            weight_history: user.weight_history,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/v1/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// DTO for `POST /api/v1/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// DTO for `PUT /api/v1/user/me` (training goal only).
#[derive(Debug, Deserialize)]
pub struct UpdateGoal {
    pub goal: Option<String>,
}

/// DTO for `POST /api/v1/user/me/weight`.
#[derive(Debug, Deserialize)]
pub struct AddWeight {
    pub weight: f64,
}

/// DTO for `PUT /api/v1/user/me/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}
