//! Route definitions for the standalone plan-exercise surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{plans, workout_exercises};
use crate::state::AppState;

/// Routes mounted at `/workout-exercises`.
///
/// ```text
/// POST   /            -> create_workout_exercise (explicit order)
/// GET    /{plan_id}   -> list_plan_exercises (same handler as /plans/{id}/exercises)
/// PUT    /{id}        -> update_workout_exercise
/// DELETE /{id}        -> delete_workout_exercise
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(workout_exercises::create_workout_exercise))
        .route(
            "/{id}",
            get(plans::list_plan_exercises)
                .put(workout_exercises::update_workout_exercise)
                .delete(workout_exercises::delete_workout_exercise),
        )
}
