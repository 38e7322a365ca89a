//! Route definitions for the authenticated user's profile.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Profile routes mounted at `/user`.
///
/// ```text
/// GET  /me            -> get_profile
/// PUT  /me            -> update_goal
/// POST /me/weight     -> add_weight
/// PUT  /me/password   -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(user::get_profile).put(user::update_goal))
        .route("/me/weight", post(user::add_weight))
        .route("/me/password", put(user::change_password))
}
