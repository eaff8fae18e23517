use canvas_client::timestamp::parse_utc;
use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

#[test]
fn z_suffix_is_utc() {
    assert_eq!(
        parse_utc("2026-03-01T12:00:00Z"),
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn explicit_offsets_are_normalised_to_utc() {
    assert_eq!(
        parse_utc("2026-03-01T14:00:00+02:00"),
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn offsetless_timestamps_are_assumed_utc() {
    assert_eq!(
        parse_utc("2026-03-01T12:00:00"),
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn fractional_seconds_are_accepted() {
    assert_eq!(
        parse_utc("2026-03-01T12:00:00.500Z"),
        Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() + Duration::milliseconds(500))
    );
}

#[test]
fn garbage_is_none() {
    assert_eq!(parse_utc("not-a-date"), None);
    assert_eq!(parse_utc(""), None);
    assert_eq!(parse_utc("2026-13-40T99:00:00Z"), None);
}
