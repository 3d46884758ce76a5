//! Encounter identifier extraction.

use crate::models::config::IdSource;

use super::patterns::ENCOUNTER_ID;
use super::FieldRule;

/// Encounter identifier rule.
///
/// The pinned variant reads the second column only and rejects anything that
/// is not a bare numeric token; the scanned variant accepts the first such
/// token anywhere in the row.
pub struct IdentifierRule {
    source: IdSource,
}

impl IdentifierRule {
    /// Create a rule with the default (pattern-scanned) strategy.
    pub fn new() -> Self {
        Self {
            source: IdSource::PatternScanned,
        }
    }

    /// Set the identifier extraction strategy.
    pub fn with_source(mut self, source: IdSource) -> Self {
        self.source = source;
        self
    }
}

impl Default for IdentifierRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for IdentifierRule {
    type Output = String;

    fn extract(&self, row: &[String]) -> Option<String> {
        match self.source {
            IdSource::PositionPinned => row
                .get(1)
                .filter(|cell| ENCOUNTER_ID.is_match(cell))
                .cloned(),
            IdSource::PatternScanned => self.extract_all(row).into_iter().next(),
        }
    }

    fn extract_all(&self, row: &[String]) -> Vec<String> {
        row.iter()
            .filter(|cell| ENCOUNTER_ID.is_match(cell))
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
    fn test_pinned_reads_second_cell_only() {
        let rule = IdentifierRule::new().with_source(IdSource::PositionPinned);
        assert_eq!(
            rule.extract(&row(&["x", "123456", "789"])),
            Some("123456".to_string())
        );
        // Valid token in another column is ignored by the pinned variant.
        assert_eq!(rule.extract(&row(&["123456", "notes"])), None);
        assert_eq!(rule.extract(&row(&["x", "12"])), None);
        assert_eq!(rule.extract(&row(&["x"])), None);
    }

    #[test]
    fn test_scanned_takes_first_token_in_row_order() {
        let rule = IdentifierRule::new();
        assert_eq!(
            rule.extract(&row(&["notes", "2024", "123456"])),
            Some("2024".to_string())
        );
        assert_eq!(rule.extract(&row(&["no", "id", "here"])), None);
    }

    #[test]
    fn test_extract_all_scans_every_cell() {
        let rule = IdentifierRule::new();
        assert_eq!(
            rule.extract_all(&row(&["111", "x", "222"])),
            vec!["111".to_string(), "222".to_string()]
        );
    }
}
