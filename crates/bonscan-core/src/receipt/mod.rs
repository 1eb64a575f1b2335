//! Rule-based field extraction from raw receipt OCR text.

pub mod amount;
pub mod category;
pub mod date;
pub mod patterns;
pub mod scan;

pub use amount::{AmountExtractor, normalize_amount};
pub use category::{CATEGORY_KEYWORDS, classify};
pub use date::{DATE_FORMATS, DateExtractor, find_date_token, parse_date};
pub use scan::{ReceiptScanner, ScanResult};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate values for the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
