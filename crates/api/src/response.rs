//! Shared response bodies for API handlers.
//!
//! Campaign resources are returned bare, field-for-field as the browser
//! client reads them; only confirmations use a dedicated shape.

use serde::Serialize;

/// `{ "message": "..." }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
