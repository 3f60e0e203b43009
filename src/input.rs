use std::path::Path;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use crate::models::RawInputs;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} = {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Accepted range per field, as offered by the entry form.
const RANGES: [(&str, f64, f64); 10] = [
    ("months_on_book", 0.0, 60.0),
    ("total_relationship_count", 1.0, 6.0),
    ("months_inactive", 0.0, 12.0),
    ("contacts_count", 0.0, 6.0),
    ("credit_limit", 1_000.0, 50_000.0),
    ("current_balance", 0.0, 50_000.0),
    ("spending_this_quarter", 0.0, 10_000.0),
    ("spending_last_quarter", 0.0, 10_000.0),
    ("transactions_this_quarter", 0.0, 100.0),
    ("transactions_last_quarter", 0.0, 100.0),
];

impl RawInputs {
    /// Check every field against the form's ranges.
    pub fn validate(&self) -> Result<(), InputError> {
        let values = [
            f64::from(self.months_on_book),
            f64::from(self.total_relationship_count),
            f64::from(self.months_inactive),
            f64::from(self.contacts_count),
            self.credit_limit,
            self.current_balance,
            self.spending_this_quarter,
            self.spending_last_quarter,
            f64::from(self.transactions_this_quarter),
            f64::from(self.transactions_last_quarter),
        ];

        for ((field, min, max), value) in RANGES.into_iter().zip(values) {
            // NaN fails `contains` too
            if !(min..=max).contains(&value) {
                return Err(InputError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Read a customer profile from a `.toml` or `.json` file.
///
/// Missing fields take the form defaults; the result is range-checked.
pub fn load_profile(path: &Path) -> Result<RawInputs> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;

    let raw: RawInputs = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("invalid TOML profile {}", path.display()))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON profile {}", path.display()))?,
        _ => bail!(
            "unsupported profile format for {} (expected .toml or .json)",
            path.display()
        ),
    };

    raw.validate()?;
    Ok(raw)
}
