//! Common regex patterns for receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Monetary amount: 1-3 leading digits, optional groups of exactly three
    // digits, then a mandatory separator and exactly two fractional digits.
    // Both "." and "," occur in either role on German receipts; the roles
    // are resolved positionally during normalization, not here.
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"\d{1,3}(?:[.,]\d{3})*[.,]\d{2}"
    ).unwrap();

    // Positive evidence that a line talks about money.
    pub static ref CURRENCY_MARKER: Regex = Regex::new(
        r"(?i)€|eur"
    ).unwrap();

    // Date-shaped token: dd?mm?yyyy with ".", "/" or "-" as separator.
    // Locates a plausible token only; validation happens in the parser.
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\d{2}[./\-]\d{2}[./\-]\d{4}"
    ).unwrap();
}
