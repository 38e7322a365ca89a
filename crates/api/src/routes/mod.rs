pub mod auth;
pub mod exercises;
pub mod health;
pub mod plans;
pub mod user;
pub mod workout_exercises;
pub mod workout_logs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /exercises                     catalog list, create (public)
/// /exercises/{id}                get, update, delete
/// /exercises/{id}/image          image-only update (PUT)
///
/// /plans                         list, create (auth required)
/// /plans/{id}                    get, update, delete
/// /plans/{id}/exercises          list entries, append entry
///
/// /workout-exercises             create with explicit order (POST)
/// /workout-exercises/{plan_id}   list a plan's entries (GET)
/// /workout-exercises/{id}        update, delete
///
/// /workout-logs                  history list, log completion
/// /workout-logs/stats            period stats + lifetime totals
///
/// /user/me                       profile get, goal update
/// /user/me/weight                append weight entry (POST)
/// /user/me/password              change password (PUT)
/// ```
///
/// Authentication is enforced per-handler through the `AuthUser`
/// extractor; the auth and catalog surfaces are public.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/exercises", exercises::router())
        .nest("/plans", plans::router())
        .nest("/workout-exercises", workout_exercises::router())
        .nest("/workout-logs", workout_logs::router())
        .nest("/user", user::router())
}
