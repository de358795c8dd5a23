//! Timestamp helpers.
//!
//! History is ordered by comparing timestamp strings, which only matches
//! chronological order when every timestamp shares one format. Server-side
//! timestamps use [`TIMESTAMP_FORMAT`] in UTC, and client timestamps are
//! rewritten into it when they parse.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Fixed-precision UTC format, e.g. `2024-05-01T08:30:00.000000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Current time in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Format a UTC instant in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Rewrite `raw` into [`TIMESTAMP_FORMAT`].
///
/// RFC 3339 input is converted to UTC. Naive `YYYY-MM-DDTHH:MM:SS[.f]` input,
/// with either a `T` or a space separator, is taken as UTC. Anything else is
/// returned unchanged.
#[must_use]
pub fn normalize_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return format_timestamp(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map_or_else(|| raw.to_string(), |naive| format_timestamp(naive.and_utc()))
}
