//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "success": true }` acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}
