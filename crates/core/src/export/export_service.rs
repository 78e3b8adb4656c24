use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::formatting::{format_currency, format_date, format_number, format_years};
use crate::history::CalculationRecord;
use crate::valuation::ValuationInputs;

const EXPORT_TITLE: &str = "HISTORIE VÝPOČTŮ - DIGITÁLNÍ ZNALECKÝ POSUDEK";
const EXPORT_RULE_WIDTH: usize = 50;

/// A rendered export ready to be offered as a file download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryExport {
    pub file_name: String,
    pub content: String,
}

/// Download name for an export made on `date`, e.g. `vysledky_2026-10-19.txt`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("vysledky_{}.txt", date.format("%Y-%m-%d"))
}

fn input_lines(inputs: &ValuationInputs) -> Vec<String> {
    match inputs {
        ValuationInputs::Comparison {
            area,
            price_per_sqm,
        } => vec![
            format!("   Plocha: {} m²", format_number(*area)),
            format!("   Cena za m²: {}", format_currency(*price_per_sqm)),
        ],
        ValuationInputs::Cost {
            area,
            price_per_sqm,
            building_age,
        } => vec![
            format!("   Plocha: {} m²", format_number(*area)),
            format!("   Cena za m²: {}", format_currency(*price_per_sqm)),
            format!("   Stáří stavby: {}", format_years(*building_age)),
        ],
        ValuationInputs::Income {
            monthly_rent,
            yield_rate,
        } => vec![
            format!("   Měsíční nájem: {}", format_currency(*monthly_rent)),
            format!(
                "   Výnosnost: {} %",
                format_number(*yield_rate * Decimal::ONE_HUNDRED)
            ),
        ],
    }
}

/// Plain-text rendering of `records` in their stored order, one numbered
/// block per record. Returns `None` when there is nothing to export.
pub fn render_history_export(records: &[CalculationRecord], tz: Tz) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut lines = vec![
        EXPORT_TITLE.to_string(),
        "=".repeat(EXPORT_RULE_WIDTH),
        String::new(),
    ];

    for (index, record) in records.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, record.method.label()));
        lines.push(format!("   Datum: {}", format_date(&record.timestamp, tz)));
        lines.extend(input_lines(&record.inputs));
        lines.push(format!(
            "   Výsledná cena: {}",
            format_currency(record.final_value())
        ));
        lines.push(String::new());
    }

    // every line, the blank separators included, ends with a newline
    let mut text = lines.join("\n");
    text.push('\n');
    Some(text)
}
