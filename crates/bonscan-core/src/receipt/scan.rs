//! Receipt scanning pipeline combining the field extractors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::config::ScanConfig;
use crate::models::expense::Category;

use super::FieldExtractor;
use super::amount::AmountExtractor;
use super::category::classify;
use super::date::DateExtractor;

/// Result of one scan over a receipt text.
///
/// Each field is independently optional or defaulted; the caller decides
/// what an absent amount or date means for saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Chosen amount, absent when nothing amount-shaped was found.
    pub amount: Option<Decimal>,

    /// Receipt date, absent when no token was found or none parsed.
    pub date: Option<NaiveDate>,

    /// Spending category, `Other` when no keyword matched.
    pub category: Category,
}

impl ScanResult {
    /// True when neither amount nor date was recognized and the category is
    /// the fallback: nothing usable on the slip.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.date.is_none() && self.category == Category::Other
    }
}

/// Receipt scanner: runs amount, date, and category extraction independently
/// over one OCR text payload.
///
/// Holds no state between calls and performs no I/O; scanning the same text
/// twice yields the same result.
pub struct ReceiptScanner {
    amount: AmountExtractor,
    date: DateExtractor,
}

impl ReceiptScanner {
    pub fn new() -> Self {
        Self {
            amount: AmountExtractor::new(),
            date: DateExtractor::new(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            amount: AmountExtractor::new().with_unmarked_fallback(config.unmarked_fallback),
            date: DateExtractor::new(),
        }
    }

    /// Scan one receipt text. Never fails as a whole.
    pub fn scan(&self, text: &str) -> ScanResult {
        let amount = self.amount.extract(text);
        let date = self.date.extract(text);
        let category = classify(text);

        debug!(
            ?amount,
            ?date,
            ?category,
            "scanned {} characters of receipt text",
            text.len()
        );

        ScanResult {
            amount,
            date,
            category,
        }
    }
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self::new()
    }
}
