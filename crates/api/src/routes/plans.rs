//! Route definitions for workout plans and their nested exercise entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::plans;
use crate::state::AppState;

/// Plan routes mounted at `/plans`.
///
/// ```text
/// GET    /                 -> list_plans
/// POST   /                 -> create_plan
/// GET    /{id}             -> get_plan
/// PUT    /{id}             -> update_plan
/// DELETE /{id}             -> delete_plan
/// GET    /{id}/exercises   -> list_plan_exercises
/// POST   /{id}/exercises   -> append_plan_exercise (order = count + 1)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list_plans).post(plans::create_plan))
        .route(
            "/{id}",
            get(plans::get_plan)
                .put(plans::update_plan)
                .delete(plans::delete_plan),
        )
        .route(
            "/{id}/exercises",
            get(plans::list_plan_exercises).post(plans::append_plan_exercise),
        )
}
