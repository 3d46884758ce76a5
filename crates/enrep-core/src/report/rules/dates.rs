//! Service date extraction.

use chrono::NaiveDate;

use super::patterns::SERVICE_DATE;
use super::FieldRule;

/// Service date rule.
///
/// Matches an ISO-like `YYYY-MM-DD` prefix. The raw cell text is kept on the
/// draft; parsing happens at the end of the pipeline so that a row whose date
/// turns out to be bogus can still lend its id and provider to forward-fill
/// before it is dropped.
pub struct ServiceDateRule;

impl ServiceDateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ServiceDateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for ServiceDateRule {
    type Output = String;

    fn extract(&self, row: &[String]) -> Option<String> {
        row.iter().find(|cell| SERVICE_DATE.is_match(cell)).cloned()
    }

    fn extract_all(&self, row: &[String]) -> Vec<String> {
        row.iter()
            .filter(|cell| SERVICE_DATE.is_match(cell))
            .cloned()
            .collect()
    }
}

/// Parse a service date cell into a calendar date.
///
/// Returns `None` for anything that does not resolve to a real date
/// (including shapes like `2024-13-45` that match the pattern but name no
/// calendar day); the caller drops such records from the final output.
pub fn parse_service_date(s: &str) -> Option<NaiveDate> {
    let caps = SERVICE_DATE.captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date as the `YYYY-MM` month key used by the monthly summary.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_extract_iso_date_cell() {
        let rule = ServiceDateRule::new();
        assert_eq!(
            rule.extract(&row(&["123456", "2024-01-15", "A10.1"])),
            Some("2024-01-15".to_string())
        );
        assert_eq!(rule.extract(&row(&["01/15/2024"])), None);
    }

    #[test]
    fn test_trailing_time_component_tolerated() {
        let rule = ServiceDateRule::new();
        let cell = "2024-01-15 08:30";
        assert_eq!(rule.extract(&row(&[cell])), Some(cell.to_string()));
        assert_eq!(
            parse_service_date(cell),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_service_date("2024-13-45"), None);
        assert_eq!(parse_service_date("2023-02-29"), None);
        assert_eq!(parse_service_date(""), None);
        assert_eq!(parse_service_date("not a date"), None);
    }

    #[test]
    fn test_format_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(format_month(date), "2024-02");
    }
}
