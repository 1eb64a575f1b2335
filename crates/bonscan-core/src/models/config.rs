//! Configuration for the receipt scanner.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BonscanError, Result};

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// When no currency-marked line yields an amount, scan the whole text
    /// for amount-shaped numbers without currency evidence.
    pub unmarked_fallback: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unmarked_fallback: true,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BonscanError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| BonscanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
