//! Explicit, checked column mapping for the meter table.
//!
//! The input table carries `Name, ConsumptionTime, ConsumptionDiffNormalized`;
//! the core consumes only the latter two. Columns are resolved by header name
//! once at load time, so a malformed file fails before any parsing starts.

use meter_core::{Error, Result};

/// Header of the timestamp column.
pub const TIME_COLUMN: &str = "ConsumptionTime";
/// Header of the normalized consumption-delta column.
pub const VALUE_COLUMN: &str = "ConsumptionDiffNormalized";

/// Resolved column indices for the meter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub time: usize,
    pub value: usize,
}

impl ColumnSchema {
    /// Resolve the required columns from a header record.
    pub fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "missing required column '{name}' (found: {})",
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ))
                })
        };
        Ok(Self {
            time: find(TIME_COLUMN)?,
            value: find(VALUE_COLUMN)?,
        })
    }
}
