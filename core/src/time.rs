//! Display formatting for timestamps.
//!
//! The caller picks the time zone by converting before formatting; nothing
//! here reads the host clock or locale.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `09:05 AM` style, two-digit 12-hour clock.
pub fn format_time<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format("%I:%M %p").to_string()
}

/// `Oct 3, 2026` style.
pub fn format_date<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.format("%b %-d, %Y").to_string()
}

/// Coarsest-unit relative time: minutes below an hour, hours below a day,
/// days otherwise. Each unit is floored from the one below it, so
/// 90 minutes is "1 hour ago" and 47 hours is "1 day ago".
///
/// Timestamps after `now` clamp to "0 minutes ago".
pub fn format_relative<Tz1, Tz2>(ts: &DateTime<Tz1>, now: &DateTime<Tz2>) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let elapsed = now.clone().signed_duration_since(ts.clone());
    let minutes = elapsed.num_seconds().max(0) / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{suffix} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_relative_minutes() {
        let now = now();
        assert_eq!(format_relative(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(format_relative(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative(&now, &now), "0 minutes ago");
        assert_eq!(format_relative(&(now - Duration::seconds(59)), &now), "0 minutes ago");
    }

    #[test]
    fn test_relative_hours_floor() {
        let now = now();
        assert_eq!(format_relative(&(now - Duration::minutes(90)), &now), "1 hour ago");
        assert_eq!(format_relative(&(now - Duration::minutes(60)), &now), "1 hour ago");
        assert_eq!(format_relative(&(now - Duration::hours(23)), &now), "23 hours ago");
    }

    #[test]
    fn test_relative_days() {
        let now = now();
        assert_eq!(format_relative(&(now - Duration::hours(24)), &now), "1 day ago");
        assert_eq!(format_relative(&(now - Duration::hours(47)), &now), "1 day ago");
        assert_eq!(format_relative(&(now - Duration::days(14)), &now), "14 days ago");
    }

    #[test]
    fn test_relative_future_clamps() {
        let now = now();
        assert_eq!(format_relative(&(now + Duration::hours(2)), &now), "0 minutes ago");
    }

    #[test]
    fn test_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 0).unwrap();
        assert_eq!(format_time(&ts), "09:05 AM");
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 0, 15, 0).unwrap();
        assert_eq!(format_time(&ts), "12:15 AM");
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap();
        assert_eq!(format_time(&ts), "02:30 PM");
    }

    #[test]
    fn test_time_uses_given_offset() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_time(&ts.with_timezone(&offset)), "09:30 AM");
    }

    #[test]
    fn test_date() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 3, 8, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Oct 3, 2026");
        let ts = Utc.with_ymd_and_hms(2026, 1, 21, 23, 59, 0).unwrap();
        assert_eq!(format_date(&ts), "Jan 21, 2026");
    }
}
