//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for list and aggregate
/// endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ... }` body returned by DELETE endpoints.
///
/// DELETE returns 200 with this record rather than 204; clients depend
/// on the body being present.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
