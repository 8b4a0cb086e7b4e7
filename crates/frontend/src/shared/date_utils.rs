//! Date/time formatting for tables

use chrono::{DateTime, Utc};

/// `2024-03-15T14:02:26.123Z` -> `15.03.2024 14:02`
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let dt: DateTime<Utc> = "2024-03-15T14:02:26.123Z".parse().unwrap();
        assert_eq!(format_timestamp(&dt), "15.03.2024 14:02");
    }
}
