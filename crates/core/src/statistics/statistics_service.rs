use std::sync::Arc;

use log::debug;

use super::HistoryStatistics;
use crate::history::HistoryStoreTrait;

pub trait StatisticsServiceTrait: Send + Sync {
    /// Statistics over the current history, or `None` when it is empty.
    fn get_statistics(&self) -> Option<HistoryStatistics>;
}

pub struct StatisticsService {
    history_store: Arc<dyn HistoryStoreTrait>,
}

impl StatisticsService {
    pub fn new(history_store: Arc<dyn HistoryStoreTrait>) -> Self {
        StatisticsService { history_store }
    }
}

impl StatisticsServiceTrait for StatisticsService {
    fn get_statistics(&self) -> Option<HistoryStatistics> {
        let values: Vec<_> = self
            .history_store
            .get_all()
            .iter()
            .map(|record| record.final_value())
            .collect();

        let statistics = HistoryStatistics::from_values(&values);
        if statistics.is_none() {
            debug!("No history available for statistics");
        }
        statistics
    }
}
