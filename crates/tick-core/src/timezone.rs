use crate::error::CoreError;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| {
        CoreError::InvalidInput(format!(
            "Invalid timezone: '{}'. Use IANA timezone names like 'Europe/Berlin'",
            timezone
        ))
    })
}

/// The "today" window for `now` as seen in `tz`.
///
/// Returns `[start, start + 24h)` where `start` is local midnight of the
/// current calendar day. When midnight falls into a DST gap the first hour
/// that exists that day is used instead.
pub fn day_bounds(tz: Tz, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let local_date = now.with_timezone(&tz).date_naive();

    let start = (0..24)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| tz.from_local_datetime(&local_date.and_time(time)).earliest())
        .map(|local| local.with_timezone(&Utc))
        // Every zone has at least one valid hour per day; keep the window
        // anchored on `now` if that somehow fails.
        .unwrap_or(now);

    (start, start + Duration::hours(24))
}
