/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, Utc};

/// Image shown when a doctor has no profile picture.
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date_human(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Avatar URL, falling back to [`DEFAULT_AVATAR`] when absent or blank.
pub fn avatar_src(profile_picture: Option<&str>) -> &str {
    profile_picture
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_AVATAR)
}

/// "1 review" / "10 reviews".
pub fn format_review_count(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{count} reviews")
    }
}

/// Map a filter text field to a constraint; blank input clears it.
pub fn text_filter_value(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
