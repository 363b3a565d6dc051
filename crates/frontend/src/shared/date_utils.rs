/// Utilities for date formatting in the `es-PE` style (dd/mm/yyyy).
use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Format an ISO date-time string to DD/MM/YYYY HH:MM
/// Example: "2025-03-10T14:22:05.123Z" -> "10/03/2025 14:22"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format an ISO date string to DD/MM/YYYY
/// Example: "2025-03-10" or "2025-03-10T14:22:05Z" -> "10/03/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Offset of the browser's time zone. UTC outside the browser.
pub fn local_offset() -> FixedOffset {
    let utc = Utc.fix();
    if !cfg!(target_arch = "wasm32") {
        return utc;
    }
    // getTimezoneOffset is UTC minus local, in minutes.
    let minutes = js_sys::Date::new_0().get_timezone_offset() as i32;
    FixedOffset::west_opt(minutes * 60).unwrap_or(utc)
}

/// Today's calendar date in the browser's time zone.
pub fn today_local() -> NaiveDate {
    if cfg!(target_arch = "wasm32") {
        let now = js_sys::Date::new_0();
        let parsed = NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        );
        if let Some(day) = parsed {
            return day;
        }
    }
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-03-10T14:22:05.123Z"), "10/03/2025 14:22");
        assert_eq!(format_datetime("2025-12-31T23:59:59"), "31/12/2025 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-10"), "10/03/2025");
        assert_eq!(format_date("2025-03-10T14:22:05Z"), "10/03/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_local_offset_is_utc_natively() {
        assert_eq!(local_offset().local_minus_utc(), 0);
    }
}
