//! History module - bounded, newest-first log of past calculations.

mod history_model;
mod history_store;
mod history_traits;


pub use history_model::CalculationRecord;
pub use history_store::HistoryStore;
pub use history_traits::HistoryStoreTrait;
