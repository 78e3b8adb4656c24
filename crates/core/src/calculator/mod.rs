//! Calculator module - the entry points the website calls into.
//!
//! Wires the valuation formulas, the history store, statistics and export
//! together, and turns raw form fields into validated requests.

mod calculator_model;
mod calculator_service;
mod form_input;


pub use calculator_model::{CalculationOutcome, ValuationRequest};
pub use calculator_service::{CalculatorService, CalculatorServiceTrait};
pub use form_input::{parse_form_number, ValuationForm};
