//! Formatting utilities for sizes, transfer speeds and dates.

/// Format a byte count for display (e.g., "1.2K", "3.4M", "1.1G").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a transfer speed in bytes per second (e.g., "1.5M/s").
pub fn format_speed(bytes_per_sec: u64) -> String {
    format!("{}/s", format_size(bytes_per_sec))
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD) in UTC.
///
/// Converts the day count to a civil date by working in 400-year eras that
/// start on March 1st, so leap days fall at the end of each shifted year.
pub fn format_date_iso(timestamp: u64) -> String {
    const DAYS_PER_ERA: i64 = 146_097;
    // Days from 0000-03-01 to 1970-01-01
    const EPOCH_SHIFT: i64 = 719_468;

    let days = (timestamp / 86_400) as i64 + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format an optional timestamp, using "-" when unknown.
pub fn format_added(timestamp: Option<u64>) -> String {
    timestamp.map(format_date_iso).unwrap_or_else(|| "-".to_string())
}
