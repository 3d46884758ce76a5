//! Diagnosis code extraction.

use super::patterns::DIAGNOSIS_CODE;
use super::FieldRule;

/// Diagnosis code rule.
///
/// A row may carry any number of codes; the record layout keeps the first
/// two in row order. Codes are matched by shape only and never checked
/// against an official code set.
pub struct DiagnosisRule;

impl DiagnosisRule {
    pub fn new() -> Self {
        Self
    }

    /// First two diagnosis codes of a row, empty strings for absent slots.
    pub fn first_two(&self, row: &[String]) -> (String, String) {
        let mut codes = self.extract_all(row).into_iter();
        (
            codes.next().unwrap_or_default(),
            codes.next().unwrap_or_default(),
        )
    }
}

impl Default for DiagnosisRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for DiagnosisRule {
    type Output = String;

    fn extract(&self, row: &[String]) -> Option<String> {
        row.iter().find(|cell| DIAGNOSIS_CODE.is_match(cell)).cloned()
    }

    fn extract_all(&self, row: &[String]) -> Vec<String> {
        row.iter()
            .filter(|cell| DIAGNOSIS_CODE.is_match(cell))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_first_two_in_row_order() {
        let rule = DiagnosisRule::new();
        let (d1, d2) = rule.first_two(&row(&["x", "E11.9", "y", "A10.1", "Z00.00"]));
        assert_eq!(d1, "E11.9");
        assert_eq!(d2, "A10.1");
    }

    #[test]
    fn test_absent_slots_are_empty() {
        let rule = DiagnosisRule::new();
        let (d1, d2) = rule.first_two(&row(&["x", "A10.1"]));
        assert_eq!(d1, "A10.1");
        assert_eq!(d2, "");

        let (d1, d2) = rule.first_two(&row(&["no", "codes"]));
        assert_eq!(d1, "");
        assert_eq!(d2, "");
    }

    #[test]
    fn test_code_must_fill_the_cell() {
        let rule = DiagnosisRule::new();
        assert_eq!(rule.extract(&row(&["dx A10.1"])), None);
        assert_eq!(rule.extract(&row(&["A10.1"])), Some("A10.1".to_string()));
    }
}
