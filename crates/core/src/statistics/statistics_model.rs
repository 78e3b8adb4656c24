use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregates over the final values of all records in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatistics {
    pub count: usize,
    pub average: Decimal,
    pub max: Decimal,
    pub min: Decimal,
    /// Sum of all final values.
    pub total: Decimal,
}

impl HistoryStatistics {
    /// Returns `None` for an empty slice.
    pub fn from_values(values: &[Decimal]) -> Option<Self> {
        let first = *values.first()?;
        let mut total = Decimal::ZERO;
        let mut max = first;
        let mut min = first;

        for value in values {
            total = total.saturating_add(*value);
            max = max.max(*value);
            min = min.min(*value);
        }

        Some(HistoryStatistics {
            count: values.len(),
            average: total / Decimal::from(values.len()),
            max,
            min,
            total,
        })
    }
}
