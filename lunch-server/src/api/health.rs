//! Health check endpoint
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "timestamp": "2024-01-01T10:00:00.000Z",
//!   "service": "lunch-app-backend",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use chrono::{SecondsFormat, Utc};

pub const SERVICE_NAME: &str = "lunch-app-backend";

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
