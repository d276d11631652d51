/// Utilities for date formatting in list forms

/// Normalizes a registration date for a date input: `YYYY-MM-DD`.
///
/// Accepts plain dates and RFC 3339 timestamps; anything else is returned as is.
/// Example: "2025-10-06T09:30:00+09:00" -> "2025-10-06"
pub fn format_reg_date(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    value.to_string()
}
