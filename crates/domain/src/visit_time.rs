use chrono::{DateTime, FixedOffset, Utc};

/// Civil offset every stored timestamp is expressed in (UTC+8, no DST).
pub const VISIT_TIME_OFFSET_SECS: i32 = 8 * 3600;

pub const VISIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const VISIT_OFFSET: FixedOffset = match FixedOffset::east_opt(VISIT_TIME_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("visit time offset out of range"),
};

/// Formats an instant as `YYYY-MM-DD HH:MM:SS` in the fixed visit offset,
/// dropping sub-second precision. The host timezone plays no part.
pub fn format_visit_time(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&VISIT_OFFSET)
        .format(VISIT_TIME_FORMAT)
        .to_string()
}

pub fn visit_time_now() -> String {
    format_visit_time(Utc::now())
}
