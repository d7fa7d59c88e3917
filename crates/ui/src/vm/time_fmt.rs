use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_to_the_minute() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 42).unwrap();
        assert_eq!(format_datetime(ts), "2024-03-09 14:05");
    }
}
