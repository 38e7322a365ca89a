//! Handlers for the authenticated user's profile (`/user/me`).

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use ironlog_core::error::CoreError;
use ironlog_db::models::user::{AddWeight, ChangePassword, UpdateGoal, UserProfile};
use ironlog_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// NotFound for the token's own user id. Only reachable if the account
/// was deleted after the token was issued.
fn user_not_found(id: ironlog_core::types::DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /api/v1/user/me
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    Ok(Json(user.into()))
}

/// PUT /api/v1/user/me
///
/// Replace (or clear) the training goal.
pub async fn update_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::update_goal(&state.pool, auth.user_id, input.goal.as_deref())
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = auth.user_id, "Training goal updated");

    Ok(Json(user.into()))
}

/// POST /api/v1/user/me/weight
///
/// Append a dated body-weight entry to the history.
pub async fn add_weight(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddWeight>,
) -> AppResult<Json<UserProfile>> {
    if input.weight <= 0.0 || input.weight.is_nan() {
        return Err(AppError::Core(CoreError::Validation {
            field: "weight",
            reason: "must be a positive number".into(),
        }));
    }

    let today = Utc::now().date_naive();
    let user = UserRepo::append_weight(&state.pool, auth.user_id, today, input.weight)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = auth.user_id, weight = input.weight, "Weight entry added");

    Ok(Json(user.into()))
}

/// PUT /api/v1/user/me/password
///
/// Change the password after verifying the old one.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePassword>,
) -> AppResult<Json<MessageResponse>> {
    if input.new_password.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation {
            field: "new_password",
            reason: "must not be empty".into(),
        }));
    }

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    let old_valid = verify_password(&input.old_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(AppError::Core(CoreError::Validation {
            field: "old_password",
            reason: "does not match the current password".into(),
        }));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, auth.user_id, &new_hash).await?;

    tracing::info!(user_id = auth.user_id, "Password changed");

    Ok(Json(MessageResponse {
        message: "Password updated",
    }))
}
