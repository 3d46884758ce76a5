//! Content-pattern field rules for report rows.
//!
//! Field positions in exported reports are not fixed columns; each field is
//! recognized by the shape of its cell content. Every rule scans a full row
//! independently of the others, first matching cell wins.

pub mod charges;
pub mod dates;
pub mod diagnosis;
pub mod identifier;
pub mod patterns;
pub mod provider;
pub mod status;

pub use charges::{coerce_charge, parse_charge, ChargeRule};
pub use dates::{format_month, parse_service_date, ServiceDateRule};
pub use diagnosis::DiagnosisRule;
pub use identifier::IdentifierRule;
pub use provider::ProviderRule;
pub use status::detect_status;

/// Trait for row-level field rules.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Extract the field from a row of cells. First matching cell wins.
    fn extract(&self, row: &[String]) -> Option<Self::Output>;

    /// Extract every matching cell, in row order.
    fn extract_all(&self, row: &[String]) -> Vec<Self::Output>;
}
