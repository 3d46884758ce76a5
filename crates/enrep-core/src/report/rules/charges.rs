//! Charge amount extraction.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::CHARGE_AMOUNT;
use super::FieldRule;

/// Charge amount rule.
///
/// Thousands separators are stripped before matching, so `1,234.56` and
/// `1234.56` are the same token. The rule returns the stripped text; the
/// draft stays string-typed until the coercion step.
pub struct ChargeRule;

impl ChargeRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChargeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for ChargeRule {
    type Output = String;

    fn extract(&self, row: &[String]) -> Option<String> {
        row.iter().find_map(|cell| {
            let stripped = cell.replace(',', "");
            CHARGE_AMOUNT.is_match(&stripped).then_some(stripped)
        })
    }

    fn extract_all(&self, row: &[String]) -> Vec<String> {
        row.iter()
            .filter_map(|cell| {
                let stripped = cell.replace(',', "");
                CHARGE_AMOUNT.is_match(&stripped).then_some(stripped)
            })
            .collect()
    }
}

/// Parse a charge cell into a decimal amount.
pub fn parse_charge(s: &str) -> Option<Decimal> {
    let stripped = s.replace(',', "");
    if !CHARGE_AMOUNT.is_match(&stripped) {
        return None;
    }
    Decimal::from_str(&stripped).ok()
}

/// Coerce a charge cell to a decimal, defaulting to zero.
///
/// An unparseable or absent charge understates totals rather than failing
/// the record; the trade-off is deliberate and not surfaced to the caller.
pub fn coerce_charge(s: &str) -> Decimal {
    parse_charge(s).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_extract_strips_thousands_separator() {
        let rule = ChargeRule::new();
        assert_eq!(
            rule.extract(&row(&["123456", "1,234.56"])),
            Some("1234.56".to_string())
        );
        assert_eq!(parse_charge("1,234.56"), Decimal::from_str("1234.56").ok());
    }

    #[test]
    fn test_charge_shape_is_strict() {
        let rule = ChargeRule::new();
        // Bare integers and single-digit fractions are not charges.
        assert_eq!(rule.extract(&row(&["150", "150.0", "150.000"])), None);
        assert_eq!(parse_charge("1234567.00"), None);
    }

    #[test]
    fn test_id_cell_is_not_a_charge() {
        let rule = ChargeRule::new();
        assert_eq!(
            rule.extract(&row(&["123456", "150.00"])),
            Some("150.00".to_string())
        );
    }

    #[test]
    fn test_coerce_defaults_to_zero() {
        assert_eq!(coerce_charge(""), Decimal::ZERO);
        assert_eq!(coerce_charge("n/a"), Decimal::ZERO);
        assert_eq!(coerce_charge("150.00"), Decimal::from_str("150.00").unwrap());
    }
}
