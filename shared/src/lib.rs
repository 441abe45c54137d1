//! Shared types for the lunch service
//!
//! Wire models and the unified error system used by the server and its tests.

pub mod error;
pub mod models;
pub mod util;
