use chrono::{DateTime, Utc};

/// Units in descending order of size, in seconds.
const PERIODS: [(i64, &str); 6] = [
    (60 * 60 * 24 * 365, "year"),
    (60 * 60 * 24 * 30, "month"),
    (60 * 60 * 24 * 7, "week"),
    (60 * 60 * 24, "day"),
    (60 * 60, "hour"),
    (60, "minute"),
];

/// Coarse label for the time since `past`, eg: "3 hours ago" or "4 weeks ago".
pub fn relative_time(past: DateTime<Utc>) -> String {
    relative_time_at(past, Utc::now())
}

/// Like [`relative_time`], measured against an explicit `now`.
///
/// Only the largest non-zero unit is reported. Anything under a minute, or
/// in the future, is "now".
pub fn relative_time_at(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(past).num_seconds();
    if elapsed < 0 {
        return "now".to_string();
    }

    for (seconds, unit) in PERIODS {
        let since = elapsed / seconds;
        if since != 0 {
            let plural = if since == 1 { "" } else { "s" };
            return format!("{} {}{} ago", since, unit, plural);
        }
    }
    "now".to_string()
}
