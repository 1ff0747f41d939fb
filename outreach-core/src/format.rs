//! Display formatting: initials fallback and the three time renderings used
//! by the inbox (clock time, calendar time, relative label).

use chrono::{DateTime, Utc};

/// Initials for the avatar fallback: first character of each whitespace-
/// separated token, uppercased. Empty input yields an empty string.
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Clock-time rendering for a message, e.g. "10:30 AM".
pub fn format_message_time(time: &DateTime<Utc>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Calendar rendering for a scheduled send, e.g. "Sep 10, 2:30 PM".
pub fn format_scheduled_date(time: &DateTime<Utc>) -> String {
    time.format("%b %-d, %-I:%M %p").to_string()
}

/// Recency label for a conversation relative to `now`: "just now" under a
/// minute, then "N min ago" / "N hour(s) ago" / "N day(s) ago". Timestamps
/// at or after `now` render as "just now".
pub fn format_relative_time(time: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *time).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" });
    }
    let days = hours / 24;
    format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
}
