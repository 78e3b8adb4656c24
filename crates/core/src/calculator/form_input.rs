//! Parsing and validation of raw calculator form fields.

use serde::{Deserialize, Serialize};

use super::ValuationRequest;
use crate::errors::{Error, Result};
use crate::valuation::ValuationMethod;

const INVALID_AREA: &str = "Prosím zadejte platnou plochu větší než 0 m².";
const INVALID_PRICE: &str = "Prosím zadejte platnou cenu za m² větší než 0 Kč.";
const INVALID_BUILDING_AGE: &str = "Prosím zadejte platné stáří stavby.";
const INVALID_RENT: &str = "Prosím zadejte platný měsíční nájem.";
const INVALID_YIELD: &str = "Prosím zadejte platnou výnosnost větší než 0 %.";

/// Parses a number typed by the user.
///
/// Accepts a comma or dot as decimal mark and ignores spaces used as
/// thousands separators. Empty, non-numeric and non-finite input gives `None`.
pub fn parse_form_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn required_positive(raw: &str, message: &str) -> Result<f64> {
    match parse_form_number(raw) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(Error::invalid_input(message)),
    }
}

/// Optional field: blank means "use the default", anything else must parse
/// and satisfy `valid`.
fn optional_field(raw: &str, message: &str, valid: impl Fn(f64) -> bool) -> Result<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match parse_form_number(raw) {
        Some(value) if valid(value) => Ok(Some(value)),
        _ => Err(Error::invalid_input(message)),
    }
}

/// Raw text of the calculator form fields, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationForm {
    pub area: String,
    pub price_per_sqm: String,
    pub building_age: String,
    pub monthly_rent: String,
    /// Yield in percent, e.g. "5" or "4,5".
    pub yield_percent: String,
}

impl ValuationForm {
    /// Validates the fields `method` needs and builds a request.
    ///
    /// Errors carry the Czech message to show next to the form.
    pub fn into_request(&self, method: ValuationMethod) -> Result<ValuationRequest> {
        match method {
            ValuationMethod::Comparison => Ok(ValuationRequest::Comparison {
                area: required_positive(&self.area, INVALID_AREA)?,
                price_per_sqm: required_positive(&self.price_per_sqm, INVALID_PRICE)?,
            }),
            ValuationMethod::Cost => Ok(ValuationRequest::Cost {
                area: required_positive(&self.area, INVALID_AREA)?,
                price_per_sqm: required_positive(&self.price_per_sqm, INVALID_PRICE)?,
                building_age: optional_field(&self.building_age, INVALID_BUILDING_AGE, |age| {
                    age >= 0.0
                })?,
            }),
            ValuationMethod::Income => Ok(ValuationRequest::Income {
                monthly_rent: required_positive(&self.monthly_rent, INVALID_RENT)?,
                yield_rate: optional_field(&self.yield_percent, INVALID_YIELD, |pct| pct > 0.0)?
                    .map(|pct| pct / 100.0),
            }),
        }
    }
}
