//! Time helpers: parsing, formatting, offsets and epoch math.
//!
//! Zone conversions go through the IANA database, so daylight saving is
//! applied: New York is -05:00 in winter and -04:00 in summer.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{LessonError, Result};

pub const STAMP_INPUT: &str = "%Y-%m-%d %H:%M:%S";
pub const STAMP_OUTPUT: &str = "%a %Y-%m-%d %I:%M:%S %Z";

pub fn new_york() -> Tz {
    chrono_tz::America::New_York
}

pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, STAMP_INPUT).map_err(|err| LessonError::parse(input, err))
}

pub fn format_stamp<Z: TimeZone>(time: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    time.format(STAMP_OUTPUT).to_string()
}

pub fn in_utc(unix_secs: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(unix_secs, 0)
        .single()
        .ok_or_else(|| LessonError::parse(unix_secs.to_string(), "timestamp out of range"))
}

pub fn in_new_york(unix_secs: i64) -> Result<DateTime<Tz>> {
    Ok(in_utc(unix_secs)?.with_timezone(&new_york()))
}

pub fn unix_millis(time: &DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}
