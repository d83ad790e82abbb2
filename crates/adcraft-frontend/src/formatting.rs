use chrono::{DateTime, Local, NaiveDateTime};

/// Size in kilobytes with one decimal, as shown next to generated images.
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Size in whole kilobytes, as shown after an upload.
pub fn format_whole_kilobytes(bytes: u64) -> String {
    format!("{} KB", (bytes as f64 / 1024.0).round() as u64)
}

/// Formats an ISO 8601 timestamp in local time. Timestamps without an offset
/// are taken as local already.
pub fn format_timestamp(timestamp: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.with_timezone(&Local).format(FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format(FORMAT).to_string(),
        Err(_) => "Invalid date".to_owned(),
    }
}

/// Falls back to `fallback` when `value` is missing or blank.
pub fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilobytes() {
        assert_eq!(format_kilobytes(204_800), "200.0 KB");
        assert_eq!(format_kilobytes(1_100), "1.1 KB");
        assert_eq!(format_whole_kilobytes(1_600), "2 KB");
    }

    #[test]
    fn naive_timestamps_keep_their_wall_clock() {
        assert_eq!(
            format_timestamp("2024-05-01T12:30:05.123456"),
            "2024-05-01 12:30:05"
        );
    }

    #[test]
    fn offset_timestamps_are_parsed() {
        assert_ne!(format_timestamp("2024-05-01T12:30:05+00:00"), "Invalid date");
    }

    #[test]
    fn garbage_is_an_invalid_date() {
        assert_eq!(format_timestamp("yesterday"), "Invalid date");
        assert_eq!(format_timestamp(""), "Invalid date");
    }

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(or_fallback(None, "N/A"), "N/A");
        assert_eq!(or_fallback(Some("  "), "N/A"), "N/A");
        assert_eq!(or_fallback(Some("Europe"), "N/A"), "Europe");
    }
}
