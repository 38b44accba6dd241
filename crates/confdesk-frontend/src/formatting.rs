use chrono::{DateTime, Local, TimeZone};

/// Formats a wall-clock time the way notification banners display it.
pub fn format_timestamp<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d.%m.%Y %H:%M").to_string()
}

/// Formatted current local time, stamped onto newly pushed banners.
pub fn now_timestamp() -> String {
    format_timestamp(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn timestamps_use_day_first_format() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 14, 3, 0).unwrap();
        assert_eq!(format_timestamp(at), "07.08.2026 14:03");
    }
}
