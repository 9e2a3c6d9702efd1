//! Timestamp handling in the store's timezone.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, ParseError, Utc};

use crate::config::StoreTimeZone;

/// Layouts tried, after RFC 3339, for timestamps that carry no offset.
/// These are read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a Vend timestamp and expresses it in `time_zone`.
///
/// Named zones resolve the offset in force at that instant, so the result
/// carries `+13:00` in an Auckland summer and `+12:00` in winter.
///
/// Accepts RFC 3339 (`2019-03-01T10:00:00+00:00`, `...Z`) and the offset-less
/// `2019-03-01 10:00:00` form, which is taken to be UTC.
///
/// # Errors
///
/// Returns [`ParseError`] if `dt` matches none of the accepted layouts.
///
/// # Example
///
/// ```rust
/// use vend_api::time::parse_vend_datetime;
/// use vend_api::StoreTimeZone;
///
/// let tz: StoreTimeZone = "+13:00".parse().unwrap();
/// let local = parse_vend_datetime("2019-03-01T10:00:00Z", tz).unwrap();
/// assert_eq!(local.to_rfc3339(), "2019-03-01T23:00:00+13:00");
/// ```
pub fn parse_vend_datetime(
    dt: &str,
    time_zone: StoreTimeZone,
) -> Result<DateTime<FixedOffset>, ParseError> {
    let parsed = parse_utc(dt.trim())?;
    Ok(match time_zone {
        StoreTimeZone::Local => {
            let local = parsed.with_timezone(&Local);
            parsed.with_timezone(local.offset())
        }
        StoreTimeZone::Utc => parsed.with_timezone(&Utc.fix()),
        StoreTimeZone::Fixed(offset) => parsed.with_timezone(&offset),
        StoreTimeZone::Named(tz) => {
            let zoned = parsed.with_timezone(&tz);
            parsed.with_timezone(&zoned.offset().fix())
        }
    })
}

fn parse_utc(dt: &str) -> Result<DateTime<Utc>, ParseError> {
    let mut last_error = match DateTime::parse_from_rfc3339(dt) {
        Ok(parsed) => return Ok(parsed.with_timezone(&Utc)),
        Err(e) => e,
    };
    for layout in NAIVE_LAYOUTS {
        match NaiveDateTime::parse_from_str(dt, layout) {
            Ok(naive) => return Ok(naive.and_utc()),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}
