//! Input validation helpers
//!
//! Centralized text length limits and checks used by the services.

use super::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Restaurant names
pub const MAX_NAME_LEN: usize = 200;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Short text: phone, category
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Required text: fails with `empty_message` when blank, or a length error when too long.
pub fn validate_required_text(
    value: &str,
    empty_message: &str,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(empty_message));
    }
    validate_max_len(value, field, max_len)
}

/// Length check on characters, not bytes (Korean text is 3 bytes per char).
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}
