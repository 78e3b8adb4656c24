//! Valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Method that produced a valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValuationMethod {
    Comparison,
    Cost,
    Income,
}

impl ValuationMethod {
    /// Czech label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ValuationMethod::Comparison => "Porovnávací metoda",
            ValuationMethod::Cost => "Nákladová metoda",
            ValuationMethod::Income => "Výnosová metoda",
        }
    }

    /// Stable code used by the website forms.
    pub fn code(&self) -> &'static str {
        match self {
            ValuationMethod::Comparison => "porovnavaci",
            ValuationMethod::Cost => "nakladova",
            ValuationMethod::Income => "vynosova",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "porovnavaci" => Some(ValuationMethod::Comparison),
            "nakladova" => Some(ValuationMethod::Cost),
            "vynosova" => Some(ValuationMethod::Income),
            _ => None,
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Method-specific inputs, kept verbatim on the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValuationInputs {
    Comparison {
        #[serde(with = "rust_decimal::serde::str")]
        area: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        price_per_sqm: Decimal,
    },
    Cost {
        #[serde(with = "rust_decimal::serde::str")]
        area: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        price_per_sqm: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        building_age: Decimal,
    },
    Income {
        #[serde(with = "rust_decimal::serde::str")]
        monthly_rent: Decimal,
        /// Capitalization yield as a fraction (0.05 = 5 %).
        #[serde(with = "rust_decimal::serde::str")]
        yield_rate: Decimal,
    },
}

impl ValuationInputs {
    pub fn method(&self) -> ValuationMethod {
        match self {
            ValuationInputs::Comparison { .. } => ValuationMethod::Comparison,
            ValuationInputs::Cost { .. } => ValuationMethod::Cost,
            ValuationInputs::Income { .. } => ValuationMethod::Income,
        }
    }

    pub fn area(&self) -> Option<Decimal> {
        match self {
            ValuationInputs::Comparison { area, .. } | ValuationInputs::Cost { area, .. } => {
                Some(*area)
            }
            ValuationInputs::Income { .. } => None,
        }
    }

    pub fn price_per_sqm(&self) -> Option<Decimal> {
        match self {
            ValuationInputs::Comparison { price_per_sqm, .. }
            | ValuationInputs::Cost { price_per_sqm, .. } => Some(*price_per_sqm),
            ValuationInputs::Income { .. } => None,
        }
    }
}

/// Value of a single breakdown line.
///
/// Amounts stay numeric so formatting is left to the presentation layer;
/// `Text` carries values that are already display strings (e.g. "5.0%").
/// Amounts are serialized as decimal strings so stored history keeps every digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BreakdownValue {
    Amount(#[serde(with = "rust_decimal::serde::str")] Decimal),
    Text(String),
}

impl BreakdownValue {
    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            BreakdownValue::Amount(amount) => Some(*amount),
            BreakdownValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub label: String,
    pub value: BreakdownValue,
}

impl BreakdownLine {
    pub fn amount(label: &str, amount: Decimal) -> Self {
        BreakdownLine {
            label: label.to_string(),
            value: BreakdownValue::Amount(amount),
        }
    }

    pub fn text(label: &str, text: String) -> Self {
        BreakdownLine {
            label: label.to_string(),
            value: BreakdownValue::Text(text),
        }
    }
}

/// Result of one valuation, before it is stamped and stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub method: ValuationMethod,
    pub inputs: ValuationInputs,
    /// Final estimate; always equal to the amount on the last breakdown line.
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub breakdown: Vec<BreakdownLine>,
}

impl Valuation {
    /// Amount on the last breakdown line, if it is numeric.
    pub fn final_line_amount(&self) -> Option<Decimal> {
        self.breakdown.last().and_then(|line| line.value.as_amount())
    }
}
