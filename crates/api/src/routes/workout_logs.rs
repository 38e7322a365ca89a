//! Route definitions for the completion log and its statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::workout_logs;
use crate::state::AppState;

/// Routes mounted at `/workout-logs`.
///
/// ```text
/// GET  /        -> list_completions
/// POST /        -> log_completion
/// GET  /stats   -> stats (?period=week|month|all)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(workout_logs::list_completions).post(workout_logs::log_completion),
        )
        .route("/stats", get(workout_logs::stats))
}
