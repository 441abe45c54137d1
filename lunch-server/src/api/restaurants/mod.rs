//! Restaurant API
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /api/restaurants, /api/restaurants/ | GET | [`handler::list`] |
//! | /api/restaurants, /api/restaurants/ | POST | [`handler::create`] |
//! | /api/restaurants/{id} | GET | [`handler::get_by_id`] |
//! | /api/restaurants/{id} | DELETE | [`handler::delete`] |

mod handler;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/restaurants", get(handler::list).post(handler::create))
        .route("/api/restaurants/", get(handler::list).post(handler::create))
        .route(
            "/api/restaurants/{id}",
            get(handler::get_by_id).delete(handler::delete),
        )
}
