//! Status marker detection.

use crate::models::record::ReportStatus;

use super::patterns::STATUS_MARKER;

/// Detect a status marker in the first cell of a row.
///
/// Markers are whole-word and case-insensitive, and may sit next to other
/// text in the cell. A marker row contributes no record; it only changes the
/// governing status for the rows beneath it.
pub fn detect_status(first_cell: &str) -> Option<ReportStatus> {
    STATUS_MARKER
        .captures(first_cell)
        .and_then(|caps| ReportStatus::from_token(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain_marker() {
        assert_eq!(detect_status("Draft"), Some(ReportStatus::Draft));
        assert_eq!(detect_status("approved"), Some(ReportStatus::Approved));
    }

    #[test]
    fn test_detect_marker_with_surrounding_text() {
        assert_eq!(
            detect_status("Encounters - Review (page 2)"),
            Some(ReportStatus::Review)
        );
        assert_eq!(detect_status("WorkInProgress items"), Some(ReportStatus::WorkInProgress));
    }

    #[test]
    fn test_no_marker_in_detail_cell() {
        assert_eq!(detect_status("123456"), None);
        assert_eq!(detect_status(""), None);
        assert_eq!(detect_status("Drafting notes"), None);
    }
}
