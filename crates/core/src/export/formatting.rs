//! Czech (cs-CZ) formatting helpers for amounts, numbers and dates.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used by cs-CZ (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Month names in the genitive case, as used in dates ("19. října 2026").
const MONTHS_GENITIVE: [&str; 12] = [
    "ledna", "února", "března", "dubna", "května", "června", "července", "srpna", "září",
    "října", "listopadu", "prosince",
];

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats with at most `max_fraction_digits`, comma decimal mark and
/// grouped integer part. Trailing fractional zeros are dropped.
fn format_decimal(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = rounded.abs().to_string();
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    match fraction {
        Some(fraction) => format!("{}{},{}", sign, group_thousands(integer), fraction),
        None => format!("{}{}", sign, group_thousands(integer)),
    }
}

/// Whole-crown CZK amount, e.g. `5 250 000 Kč`.
pub fn format_currency(amount: Decimal) -> String {
    format!("{}{}Kč", format_decimal(amount, 0), GROUP_SEPARATOR)
}

/// Number with up to two decimals, e.g. `85,5`.
pub fn format_number(value: Decimal) -> String {
    format_decimal(value, 2)
}

/// Age in years with the Czech plural form ("1 rok", "3 roky", "30 let").
pub fn format_years(years: Decimal) -> String {
    let unit = if !years.fract().is_zero() {
        "roku"
    } else if years == Decimal::ONE {
        "rok"
    } else if years >= Decimal::from(2) && years <= Decimal::from(4) {
        "roky"
    } else {
        "let"
    };
    format!("{} {}", format_number(years), unit)
}

/// Date and time in `tz`, e.g. `19. října 2026 v 14:05`.
pub fn format_date(timestamp: &DateTime<Utc>, tz: Tz) -> String {
    let local = timestamp.with_timezone(&tz);
    format!(
        "{}. {} {} v {:02}:{:02}",
        local.day(),
        MONTHS_GENITIVE[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_and_rounds() {
        assert_eq!(format_currency(dec!(5250000)), "5\u{a0}250\u{a0}000\u{a0}Kč");
        assert_eq!(format_currency(dec!(999.5)), "1\u{a0}000\u{a0}Kč");
        assert_eq!(format_currency(dec!(999.49)), "999\u{a0}Kč");
        assert_eq!(format_currency(Decimal::ZERO), "0\u{a0}Kč");
        assert_eq!(format_currency(dec!(-2500000)), "-2\u{a0}500\u{a0}000\u{a0}Kč");
        assert_eq!(format_currency(dec!(-0.2)), "0\u{a0}Kč");
    }

    #[test]
    fn test_format_number_keeps_two_decimals() {
        assert_eq!(format_number(dec!(85.5)), "85,5");
        assert_eq!(format_number(dec!(85.50)), "85,5");
        assert_eq!(format_number(dec!(1234.567)), "1\u{a0}234,57");
        assert_eq!(format_number(dec!(100)), "100");
    }

    #[test]
    fn test_format_years_plural() {
        assert_eq!(format_years(dec!(0)), "0 let");
        assert_eq!(format_years(dec!(1)), "1 rok");
        assert_eq!(format_years(dec!(3)), "3 roky");
        assert_eq!(format_years(dec!(30)), "30 let");
        assert_eq!(format_years(dec!(1.5)), "1,5 roku");
    }

    #[test]
    fn test_format_date_in_prague() {
        // 12:05 UTC is 14:05 CEST
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 19, 12, 5, 0).unwrap();
        assert_eq!(
            format_date(&timestamp, chrono_tz::Europe::Prague),
            "19. října 2026 v 14:05"
        );

        let winter = Utc.with_ymd_and_hms(2026, 1, 2, 23, 30, 0).unwrap();
        assert_eq!(
            format_date(&winter, chrono_tz::Europe::Prague),
            "3. ledna 2026 v 00:30"
        );
    }
}
