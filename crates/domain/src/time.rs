//! Timestamps and their text form.
//!
//! Dates cross process boundaries (database columns, DEP payloads) as
//! RFC 3339 strings and are normalised to UTC on the way in.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp, e.g. the date a device was assigned to the account.
pub type Timestamp = DateTime<Utc>;

/// Parse an RFC 3339 string with any offset into a UTC [`Timestamp`].
///
/// # Errors
///
/// Returns [`chrono::ParseError`] if `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|date| date.with_timezone(&Utc))
}

/// Render a [`Timestamp`] as RFC 3339 with second precision and a `Z` suffix.
#[must_use]
pub fn to_rfc3339(value: &Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
