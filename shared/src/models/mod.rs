//! Data models
//!
//! Shared between the server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` assigned by the store; timestamps are Unix millis.
//!
//! Wire keys follow the lunch-app frontend contract: restaurants and request
//! payloads use PascalCase (`ID`, `Name`, `RestaurantID`, ...), while the
//! visit projection uses the camelCase keys the frontend renders.

pub mod restaurant;
pub mod visit;

// Re-exports
pub use restaurant::*;
pub use visit::*;

use serde::{Deserialize, Serialize};

/// Plain acknowledgement body: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
