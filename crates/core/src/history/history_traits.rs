use crate::history::CalculationRecord;
use crate::valuation::Valuation;

/// Trait for the calculation history.
///
/// Storage failures never escape this boundary: reads degrade to an empty
/// history and writes report `false`.
pub trait HistoryStoreTrait: Send + Sync {
    /// All stored records, newest first.
    fn get_all(&self) -> Vec<CalculationRecord>;

    /// Stamp `valuation` and store it at the front of the history.
    fn append(&self, valuation: &Valuation) -> bool;

    /// Remove the record at `index` (0 = newest). Out of range is a no-op.
    fn delete_at(&self, index: usize) -> bool;

    /// Remove the whole history.
    fn clear(&self) -> bool;
}
