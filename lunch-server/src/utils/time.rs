//! Timezone handling for visit dates
//!
//! Incoming dates are RFC 3339 instants. They are normalized into the
//! service's display timezone before being written, and the repository layer
//! only sees `i64` Unix millis. Display strings are produced from millis in
//! the same timezone.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a client-supplied visit date (RFC 3339, any offset)
pub fn parse_visit_date(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|_| AppError::validation("VisitDate must be an RFC 3339 timestamp"))
}

/// Re-express an instant in the display timezone (the instant itself is unchanged)
pub fn normalize(date: DateTime<FixedOffset>, tz: Tz) -> DateTime<Tz> {
    date.with_timezone(&tz)
}

/// Stored millis → local time in the display timezone
///
/// Out-of-range millis fall back to the Unix epoch.
pub fn from_millis(millis: i64, tz: Tz) -> DateTime<Tz> {
    let utc = match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt,
        None => {
            tracing::warn!(millis, "Stored visit date out of range, showing Unix epoch");
            DateTime::<Utc>::default()
        }
    };
    utc.with_timezone(&tz)
}

/// `YYYY-MM-DD` in the display timezone
pub fn format_date(millis: i64, tz: Tz) -> String {
    from_millis(millis, tz).format(DATE_FORMAT).to_string()
}

/// `HH:MM` in the display timezone
pub fn format_time(millis: i64, tz: Tz) -> String {
    from_millis(millis, tz).format(TIME_FORMAT).to_string()
}
