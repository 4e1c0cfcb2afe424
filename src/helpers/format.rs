//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format a local datetime for display
pub fn format_local_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn datetime_format() {
        assert_eq!(format_local_datetime(&sample()), "2026-03-14 09:26:53");
    }

    #[test]
    fn time_format() {
        assert_eq!(format_time(&sample()), "09:26:53");
    }
}
