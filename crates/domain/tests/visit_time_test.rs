use chrono::{TimeZone, Utc};
use ferrous_visits_domain::visit_time::{format_visit_time, visit_time_now};

#[test]
fn test_format_applies_fixed_offset() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 1, 4, 5, 6).unwrap();
    assert_eq!(format_visit_time(instant), "2024-03-01 12:05:06");
}

#[test]
fn test_format_rolls_over_midnight() {
    let instant = Utc.with_ymd_and_hms(2024, 12, 31, 20, 30, 0).unwrap();
    assert_eq!(format_visit_time(instant), "2025-01-01 04:30:00");
}

#[test]
fn test_format_discards_sub_second_precision() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 59).unwrap()
        + chrono::Duration::milliseconds(999);
    assert_eq!(format_visit_time(instant), "2024-06-15 08:00:59");
}

#[test]
fn test_now_has_canonical_shape() {
    let now = visit_time_now();

    assert_eq!(now.len(), 19);
    assert!(chrono::NaiveDateTime::parse_from_str(&now, "%Y-%m-%d %H:%M:%S").is_ok());
}
