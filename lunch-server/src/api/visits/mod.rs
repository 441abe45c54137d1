//! Visit API
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /api/visits, /api/visits/ | GET | [`handler::list`] |
//! | /api/visits, /api/visits/ | POST | [`handler::create`] |
//! | /api/visits/{id} | PUT | [`handler::update`] |
//! | /api/visits/{id} | DELETE | [`handler::delete`] |

mod handler;

use axum::Router;
use axum::routing::{get, put};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/visits", get(handler::list).post(handler::create))
        .route("/api/visits/", get(handler::list).post(handler::create))
        .route(
            "/api/visits/{id}",
            put(handler::update).delete(handler::delete),
        )
}
