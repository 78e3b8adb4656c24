//! Posudek Core - valuation formulas, calculation history and statistics.
//!
//! This crate contains the business logic behind the price calculator of the
//! appraisal website. It is storage-agnostic: history is persisted through
//! `storage::KeyValueStoreTrait`, implemented in-memory here and by the
//! `storage-sqlite` crate for durable storage.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod history;
pub mod statistics;
pub mod storage;
pub mod valuation;

// Re-export the caller-facing API
pub use calculator::{CalculationOutcome, CalculatorService, CalculatorServiceTrait};
pub use config::CalculatorConfig;
pub use history::{CalculationRecord, HistoryStore, HistoryStoreTrait};
pub use statistics::{HistoryStatistics, StatisticsService, StatisticsServiceTrait};
pub use valuation::{Valuation, ValuationMethod};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
