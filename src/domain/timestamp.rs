//! Timestamp parsing shared by schema validation and record construction.

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Parse an RFC 3339 timestamp such as `2024-04-07T21:08:23+00:00`, keeping its offset.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Render a timestamp in the service's wire format.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
