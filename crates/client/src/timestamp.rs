use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse a Canvas ISO-8601 timestamp into a UTC instant.
///
/// Canvas writes UTC with a `Z` suffix; explicit offsets are normalised to
/// UTC and an offset-less timestamp is assumed to already be UTC. Anything
/// else is `None`.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
