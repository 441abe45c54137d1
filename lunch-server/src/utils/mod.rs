//! Utility module
//!
//! - [`time`] - visit date parsing, timezone normalization and display formatting
//! - [`validation`] - input text checks shared by the services
//! - [`logger`] - tracing subscriber setup

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
