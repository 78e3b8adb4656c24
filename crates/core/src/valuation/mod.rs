//! Valuation module - the three price estimation methods and their result models.

mod valuation_calculator;
mod valuation_model;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::{
    calculate_comparison, calculate_cost, calculate_income, decimal_from_input,
    depreciation_rate,
};
pub use valuation_model::{
    BreakdownLine, BreakdownValue, Valuation, ValuationInputs, ValuationMethod,
};
