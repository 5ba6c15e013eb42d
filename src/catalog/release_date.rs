//! Release-date normalization to the `DD.MM.YYYY` display format.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Plain date layouts seen on storefront detail pages, tried in order.
const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];

/// Normalize a raw release-date value to `DD.MM.YYYY`.
///
/// Accepts epoch-millisecond strings, ISO 8601 timestamps (with or
/// without an offset) and the plain date layouts in [`DATE_FORMATS`].
/// Returns `None` when nothing parses, so the field stays absent
/// instead of carrying junk.
pub fn normalize_release_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }

    // Epoch milliseconds, as embedded in the storefront's product JSON.
    if trimmed.len() >= 12 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(formatted) = trimmed
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        {
            return Some(formatted);
        }
    }

    if trimmed.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.format(DISPLAY_FORMAT).to_string());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.format(DISPLAY_FORMAT).to_string());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.format(DISPLAY_FORMAT).to_string());
        }
    }

    None
}
