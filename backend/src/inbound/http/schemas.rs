//! Shared response body types for the HTTP adapter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation envelope returned by delete and cancel endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// Human-readable confirmation.
    #[schema(example = "Reservation cancelled successfully")]
    pub message: String,
}

impl MessageBody {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
