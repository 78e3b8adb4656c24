//! Export module - Czech number/date formatting and the plain-text history export.

mod export_service;
mod formatting;

pub use export_service::{export_file_name, render_history_export, HistoryExport};
pub use formatting::{format_currency, format_date, format_number, format_years};
