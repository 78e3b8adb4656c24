use crate::constants::{
    COMPARISON_RESERVE_RATE, DEFAULT_YIELD_RATE, DEPRECIATION_PER_YEAR, LAND_VALUE_RATE,
    MAX_DEPRECIATION_RATE, MONTHS_PER_YEAR,
};
use crate::errors::{Error, Result};
use crate::valuation::{BreakdownLine, Valuation, ValuationInputs, ValuationMethod};

use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a raw numeric input into a `Decimal`.
///
/// NaN, infinities and magnitudes beyond `Decimal` range are rejected as
/// invalid input, never turned into a number.
pub fn decimal_from_input(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::invalid_input(format!("{} must be a number", field)));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| Error::invalid_input(format!("{} is out of range", field)))
}

fn require_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "{} must be greater than 0, got {}",
            field, value
        )));
    }
    Ok(())
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| Error::invalid_input("Value is too large to calculate"))
}

/// Accumulated depreciation for a building of the given age: 2 % per year,
/// capped at 50 %.
pub fn depreciation_rate(building_age: Decimal) -> Decimal {
    building_age
        .checked_mul(DEPRECIATION_PER_YEAR)
        .map_or(MAX_DEPRECIATION_RATE, |rate| rate.min(MAX_DEPRECIATION_RATE))
}

/// Comparison method: area times unit price plus a fixed 5 % reserve.
pub fn calculate_comparison(area: Decimal, price_per_sqm: Decimal) -> Result<Valuation> {
    require_positive("area", area)?;
    require_positive("price_per_sqm", price_per_sqm)?;

    let base = mul(area, price_per_sqm)?;
    let reserve = mul(base, COMPARISON_RESERVE_RATE)?;
    let total = mul(base, Decimal::ONE + COMPARISON_RESERVE_RATE)?;

    debug!(
        "Comparison valuation: {} m2 x {} = {} (total {})",
        area, price_per_sqm, base, total
    );

    Ok(Valuation {
        method: ValuationMethod::Comparison,
        inputs: ValuationInputs::Comparison {
            area,
            price_per_sqm,
        },
        total,
        breakdown: vec![
            BreakdownLine::amount("Základní cena", base),
            BreakdownLine::amount("Rezerva (5%)", reserve),
            BreakdownLine::amount("Celkem", total),
        ],
    })
}

/// Cost method: replacement cost less age depreciation, plus 20 % for land.
pub fn calculate_cost(
    area: Decimal,
    price_per_sqm: Decimal,
    building_age: Option<Decimal>,
) -> Result<Valuation> {
    let building_age = building_age.unwrap_or(Decimal::ZERO);
    require_positive("area", area)?;
    require_positive("price_per_sqm", price_per_sqm)?;
    if building_age < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "building_age must not be negative, got {}",
            building_age
        )));
    }

    let base_cost = mul(area, price_per_sqm)?;
    let rate = depreciation_rate(building_age);
    let depreciation = mul(base_cost, rate)?;
    let depreciated_cost = mul(base_cost, Decimal::ONE - rate)?;
    let land_value = mul(depreciated_cost, LAND_VALUE_RATE)?;
    let total = mul(depreciated_cost, Decimal::ONE + LAND_VALUE_RATE)?;

    debug!(
        "Cost valuation: base {} depreciated by {} to {} (total {})",
        base_cost, rate, depreciated_cost, total
    );

    Ok(Valuation {
        method: ValuationMethod::Cost,
        inputs: ValuationInputs::Cost {
            area,
            price_per_sqm,
            building_age,
        },
        total,
        breakdown: vec![
            BreakdownLine::amount("Základní náklady", base_cost),
            BreakdownLine::amount("Opotřebení", -depreciation),
            BreakdownLine::amount("Po odečtu opotřebení", depreciated_cost),
            BreakdownLine::amount("Pozemek (20%)", land_value),
            BreakdownLine::amount("Celkem", total),
        ],
    })
}

/// Income method: annual rent capitalized at the given yield (default 5 %).
pub fn calculate_income(monthly_rent: Decimal, yield_rate: Option<Decimal>) -> Result<Valuation> {
    let yield_rate = yield_rate.unwrap_or(DEFAULT_YIELD_RATE);
    require_positive("monthly_rent", monthly_rent)?;
    require_positive("yield_rate", yield_rate)?;

    let annual_rent = mul(monthly_rent, MONTHS_PER_YEAR)?;
    let total = annual_rent
        .checked_div(yield_rate)
        .ok_or_else(|| Error::invalid_input("Value is too large to calculate"))?;

    let mut yield_percent = mul(yield_rate, Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    yield_percent.rescale(1);

    debug!(
        "Income valuation: annual rent {} at {}% = {}",
        annual_rent, yield_percent, total
    );

    Ok(Valuation {
        method: ValuationMethod::Income,
        inputs: ValuationInputs::Income {
            monthly_rent,
            yield_rate,
        },
        total,
        breakdown: vec![
            BreakdownLine::amount("Měsíční nájem", monthly_rent),
            BreakdownLine::amount("Roční nájem", annual_rent),
            BreakdownLine::text("Výnosnost", format!("{}%", yield_percent)),
            BreakdownLine::amount("Celková hodnota", total),
        ],
    })
}
