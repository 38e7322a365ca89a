use crate::types::DbId;

/// Domain error taxonomy shared by every component.
///
/// Handlers map these onto HTTP statuses; repositories stay on
/// `sqlx::Error` and the api crate translates at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. Carries the entity type so
    /// callers can tell "plan not found" from "exercise not found".
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A request field failed validation before any persistence call.
    #[error("Validation failed on {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A uniqueness rule was violated (duplicate name, taken email).
    #[error("{entity} with this {field} already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
