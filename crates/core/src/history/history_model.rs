//! History domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::{BreakdownLine, Valuation, ValuationInputs, ValuationMethod};

/// A valuation as persisted in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: String,
    pub method: ValuationMethod,
    pub inputs: ValuationInputs,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub breakdown: Vec<BreakdownLine>,
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(id: String, valuation: &Valuation, timestamp: DateTime<Utc>) -> Self {
        CalculationRecord {
            id,
            method: valuation.method,
            inputs: valuation.inputs.clone(),
            total: valuation.total,
            breakdown: valuation.breakdown.clone(),
            timestamp,
        }
    }

    /// The amount shown as the final price: the last breakdown line, or
    /// `total` when the breakdown does not end in an amount.
    pub fn final_value(&self) -> Decimal {
        self.breakdown
            .last()
            .and_then(|line| line.value.as_amount())
            .unwrap_or(self.total)
    }
}

impl From<&CalculationRecord> for Valuation {
    fn from(record: &CalculationRecord) -> Self {
        Valuation {
            method: record.method,
            inputs: record.inputs.clone(),
            total: record.total,
            breakdown: record.breakdown.clone(),
        }
    }
}
