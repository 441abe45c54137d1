//! Business services
//!
//! Each service holds the injected connection pool and is cloned into the
//! application state once at startup.

pub mod restaurant;
pub mod visit;

pub use restaurant::RestaurantService;
pub use visit::VisitService;
