/// Date helpers shared by the catalog pages and forms
use chrono::Datelike;

/// Earliest release year accepted by the movie form
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// How far into the future a release year may be set
pub const RELEASE_YEAR_LOOKAHEAD: i32 = 5;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Inclusive bounds for a release year relative to `current_year`
pub fn release_year_bounds(current_year: i32) -> (i32, i32) {
    (MIN_RELEASE_YEAR, current_year + RELEASE_YEAR_LOOKAHEAD)
}

/// Format an ISO timestamp as DD.MM.YYYY.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024"
///
/// Anything that does not look like an ISO date is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if !day.is_empty() => {
            format!("{}.{}.{}", day, month, year)
        }
        _ => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2024-03"), "2024-03");
    }

    #[test]
    fn test_release_year_bounds() {
        assert_eq!(release_year_bounds(2026), (1900, 2031));
    }
}
