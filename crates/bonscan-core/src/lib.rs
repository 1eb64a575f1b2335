//! Core library for receipt scanning.
//!
//! This crate provides:
//! - Receipt text extraction (amount, date, category) from raw OCR output
//! - Multi-format date parsing for both OCR tokens and manual entry
//! - Expense data models and pure query/statistics helpers
//!
//! The extraction engine is a pure function of its input text: no I/O, no
//! shared mutable state, identical input always yields an identical result.

pub mod error;
pub mod models;
pub mod query;
pub mod receipt;

pub use error::{BonscanError, Result};
pub use models::config::ScanConfig;
pub use models::expense::{Category, Expense};
pub use receipt::amount::{AmountExtractor, normalize_amount};
pub use receipt::category::classify;
pub use receipt::date::{DateExtractor, find_date_token, parse_date};
pub use receipt::{FieldExtractor, ReceiptScanner, ScanResult};
