//! Route definitions for the exercise catalog.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Catalog routes mounted at `/exercises`.
///
/// ```text
/// GET    /             -> list_exercises
/// POST   /             -> create_exercise
/// GET    /{id}         -> get_exercise
/// PUT    /{id}         -> update_exercise
/// DELETE /{id}         -> delete_exercise
/// PUT    /{id}/image   -> update_exercise_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/{id}",
            get(exercises::get_exercise)
                .put(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
        .route("/{id}/image", put(exercises::update_exercise_image))
}
