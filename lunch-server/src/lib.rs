//! lunch-server — restaurant and visit-record service
//!
//! - Restaurant CRUD with soft delete
//! - Visit records tied to a restaurant, projected for display in a single
//!   canonical timezone, tolerating restaurants deleted after the visit
//! - SQLite (embedded) or PostgreSQL storage, selected by `DATABASE_URL`

pub mod api;
pub mod config;
pub mod db;
pub mod middleware;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

pub use config::{Config, DatabaseTarget};
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
