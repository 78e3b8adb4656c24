//! Statistics module - aggregates over the calculation history.

mod statistics_model;
mod statistics_service;

pub use statistics_model::HistoryStatistics;
pub use statistics_service::{StatisticsService, StatisticsServiceTrait};
