use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Key of the history blob in the key-value store
pub const HISTORY_STORAGE_KEY: &str = "kalkulacka_history";

/// Maximum number of calculations kept in history
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Default capitalization yield for the income method (5 %)
pub const DEFAULT_YIELD_RATE: Decimal = dec!(0.05);

/// Timezone used when presenting calculation timestamps
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "Europe/Prague";

/// Reserve added on top of the comparison base price
pub const COMPARISON_RESERVE_RATE: Decimal = dec!(0.05);

/// Yearly depreciation of the cost method
pub const DEPRECIATION_PER_YEAR: Decimal = dec!(0.02);

/// Upper bound for accumulated depreciation
pub const MAX_DEPRECIATION_RATE: Decimal = dec!(0.5);

/// Land value surcharge on the depreciated cost
pub const LAND_VALUE_RATE: Decimal = dec!(0.2);

/// Months per year, used to annualize rent
pub const MONTHS_PER_YEAR: Decimal = dec!(12);
