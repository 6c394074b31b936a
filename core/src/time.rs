//! Time related utils.

/// DateTime in UTC, the only zone signatures are computed in.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Take the current time in UTC.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a date stamp like `20220313`.
///
/// This is the first component of a credential scope.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a basic ISO 8601 timestamp like `20220313T072004Z`.
///
/// The vendor expects no separators; the first 8 characters are always
/// equal to [`format_date`] of the same instant.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
