//! Amount extraction from receipt text.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use super::FieldExtractor;
use super::patterns::{AMOUNT_PATTERN, CURRENCY_MARKER};

/// Normalize a matched numeric token into a decimal.
///
/// Every separator except the last groups thousands and is dropped; the last
/// separator is the decimal point. This resolves "1.234,56" vs "1,234.56" by
/// position rather than by separator character, since receipts use both
/// conventions.
pub fn normalize_amount(raw: &str) -> Option<Decimal> {
    let last = raw.rfind([',', '.'])?;
    let mut cleaned = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        match c {
            '.' | ',' if i < last => {}
            '.' | ',' => cleaned.push('.'),
            _ => cleaned.push(c),
        }
    }
    Decimal::from_str(&cleaned).ok()
}

/// Amount field extractor.
///
/// Scans currency-marked lines first (first amount-shaped token per line);
/// when none match, falls back to a whole-text scan that accepts amounts
/// without currency evidence. The chosen amount is the numeric maximum of
/// the candidates: the receipt total is reliably the largest figure on the
/// slip, while OCR frequently garbles the "total" label itself.
pub struct AmountExtractor {
    unmarked_fallback: bool,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            unmarked_fallback: true,
        }
    }

    /// Enable or disable the unmarked whole-text fallback scan.
    pub fn with_unmarked_fallback(mut self, fallback: bool) -> Self {
        self.unmarked_fallback = fallback;
        self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    /// The selected amount: maximum of all candidates.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().max()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut candidates = Vec::new();

        for line in text.lines() {
            if !CURRENCY_MARKER.is_match(line) {
                continue;
            }
            // First match per line only; trailing numbers on a marked line
            // are usually deposit or loyalty noise.
            if let Some(m) = AMOUNT_PATTERN.find(line) {
                if let Some(amount) = normalize_amount(m.as_str()) {
                    candidates.push(amount);
                }
            }
        }

        if candidates.is_empty() && self.unmarked_fallback {
            debug!("no currency-marked amounts, falling back to global scan");
            for m in AMOUNT_PATTERN.find_iter(text) {
                if let Some(amount) = normalize_amount(m.as_str()) {
                    candidates.push(amount);
                }
            }
        }

        candidates
    }
}
