//! Calculator request/response models.

use serde::{Deserialize, Serialize};

use crate::valuation::{Valuation, ValuationMethod};

/// A validated calculation request with raw numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValuationRequest {
    Comparison {
        area: f64,
        price_per_sqm: f64,
    },
    Cost {
        area: f64,
        price_per_sqm: f64,
        building_age: Option<f64>,
    },
    Income {
        monthly_rent: f64,
        /// Fraction, not percent. `None` uses the configured default.
        yield_rate: Option<f64>,
    },
}

impl ValuationRequest {
    pub fn method(&self) -> ValuationMethod {
        match self {
            ValuationRequest::Comparison { .. } => ValuationMethod::Comparison,
            ValuationRequest::Cost { .. } => ValuationMethod::Cost,
            ValuationRequest::Income { .. } => ValuationMethod::Income,
        }
    }
}

/// Result of a computation together with whether it reached history.
///
/// The valuation is always returned; `persisted` is false when the history
/// write failed and the result exists only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    pub valuation: Valuation,
    pub persisted: bool,
}
