//! Shared regex patterns for report row classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Status markers introducing a block of encounter rows.
    pub static ref STATUS_MARKER: Regex = Regex::new(
        r"(?i)\b(Draft|Approved|Review|WorkInProgress)\b"
    ).unwrap();

    // Encounter identifier: a bare numeric token longer than two digits.
    pub static ref ENCOUNTER_ID: Regex = Regex::new(
        r"^\d{3,}$"
    ).unwrap();

    // Rendering provider: "Name, CREDENTIAL" with a known clinical credential.
    pub static ref PROVIDER_CREDENTIAL: Regex = Regex::new(
        r",\s*(PA|MD|NP|DO)$"
    ).unwrap();

    // Service date: ISO-like YYYY-MM-DD prefix. Some exports append a time
    // component, so the pattern is anchored at the start only.
    pub static ref SERVICE_DATE: Regex = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})"
    ).unwrap();

    // Diagnosis code: one uppercase letter, two digits, optional dotted
    // alphanumeric suffix. Whole-cell match.
    pub static ref DIAGNOSIS_CODE: Regex = Regex::new(
        r"^[A-Z]\d{2}\.?[A-Z0-9]*$"
    ).unwrap();

    // Charge: up to six integer digits, exactly two fraction digits.
    // Matched after thousands separators are stripped.
    pub static ref CHARGE_AMOUNT: Regex = Regex::new(
        r"^\d{1,6}\.\d{2}$"
    ).unwrap();
}
