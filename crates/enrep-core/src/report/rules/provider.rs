//! Rendering provider extraction.

use super::patterns::PROVIDER_CREDENTIAL;
use super::FieldRule;

/// Credentials accepted in the "Name, CREDENTIAL" provider pattern.
pub const CREDENTIALS: [&str; 4] = ["PA", "MD", "NP", "DO"];

/// Rendering provider rule.
///
/// Matches any cell ending in a comma-separated clinical credential; the
/// whole cell is the provider value.
pub struct ProviderRule;

impl ProviderRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProviderRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for ProviderRule {
    type Output = String;

    fn extract(&self, row: &[String]) -> Option<String> {
        row.iter()
            .find(|cell| PROVIDER_CREDENTIAL.is_match(cell))
            .cloned()
    }

    fn extract_all(&self, row: &[String]) -> Vec<String> {
        row.iter()
            .filter(|cell| PROVIDER_CREDENTIAL.is_match(cell))
            .cloned()
            .collect()
    }
}
