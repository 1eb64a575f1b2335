//! Data models for expenses and configuration.

pub mod config;
pub mod expense;
