use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use log::{debug, warn};

use super::{CalculationOutcome, ValuationRequest};
use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::export::{export_file_name, render_history_export, HistoryExport};
use crate::history::{CalculationRecord, HistoryStore, HistoryStoreTrait};
use crate::statistics::{HistoryStatistics, StatisticsService, StatisticsServiceTrait};
use crate::storage::KeyValueStoreTrait;
use crate::valuation::{
    calculate_comparison, calculate_cost, calculate_income, decimal_from_input, Valuation,
};

/// Entry points exposed to the presentation layer.
pub trait CalculatorServiceTrait: Send + Sync {
    fn compute_comparison(&self, area: f64, price_per_sqm: f64) -> Result<CalculationOutcome>;

    fn compute_cost(
        &self,
        area: f64,
        price_per_sqm: f64,
        building_age: Option<f64>,
    ) -> Result<CalculationOutcome>;

    fn compute_income(
        &self,
        monthly_rent: f64,
        yield_rate: Option<f64>,
    ) -> Result<CalculationOutcome>;

    /// Dispatches a validated form request to the matching method.
    fn submit(&self, request: ValuationRequest) -> Result<CalculationOutcome>;

    fn list_history(&self) -> Vec<CalculationRecord>;

    fn get_statistics(&self) -> Option<HistoryStatistics>;

    fn delete_history_item(&self, index: usize) -> bool;

    fn clear_history(&self) -> bool;

    /// Text export of the whole history, `None` when history is empty.
    fn export_history(&self) -> Option<HistoryExport>;
}

pub struct CalculatorService {
    history_store: Arc<dyn HistoryStoreTrait>,
    statistics_service: StatisticsService,
    config: CalculatorConfig,
    timezone: Tz,
}

impl CalculatorService {
    /// Builds the service and its history store from one config.
    pub fn from_store(
        store: Arc<dyn KeyValueStoreTrait>,
        config: CalculatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        let history_store = Arc::new(HistoryStore::with_config(store, &config));
        Self::new(history_store, config)
    }

    /// Wraps an already configured history store. Only `default_yield_rate`
    /// and `display_timezone` are read from `config` here; the store keeps
    /// its own key and limit.
    pub fn new(
        history_store: Arc<dyn HistoryStoreTrait>,
        config: CalculatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        let timezone = config.timezone()?;
        Ok(CalculatorService {
            statistics_service: StatisticsService::new(history_store.clone()),
            history_store,
            config,
            timezone,
        })
    }

    /// Stores the valuation; a failed write still hands the result back.
    fn record(&self, valuation: Valuation) -> CalculationOutcome {
        let persisted = self.history_store.append(&valuation);
        if !persisted {
            warn!(
                "{} result {} was not saved to history",
                valuation.method.code(),
                valuation.total
            );
        }
        CalculationOutcome {
            valuation,
            persisted,
        }
    }
}

impl CalculatorServiceTrait for CalculatorService {
    fn compute_comparison(&self, area: f64, price_per_sqm: f64) -> Result<CalculationOutcome> {
        let valuation = calculate_comparison(
            decimal_from_input("area", area)?,
            decimal_from_input("price_per_sqm", price_per_sqm)?,
        )?;
        Ok(self.record(valuation))
    }

    fn compute_cost(
        &self,
        area: f64,
        price_per_sqm: f64,
        building_age: Option<f64>,
    ) -> Result<CalculationOutcome> {
        let building_age = building_age
            .map(|age| decimal_from_input("building_age", age))
            .transpose()?;
        let valuation = calculate_cost(
            decimal_from_input("area", area)?,
            decimal_from_input("price_per_sqm", price_per_sqm)?,
            building_age,
        )?;
        Ok(self.record(valuation))
    }

    fn compute_income(
        &self,
        monthly_rent: f64,
        yield_rate: Option<f64>,
    ) -> Result<CalculationOutcome> {
        let yield_rate = match yield_rate {
            Some(rate) => decimal_from_input("yield_rate", rate)?,
            None => self.config.default_yield_rate,
        };
        let valuation = calculate_income(
            decimal_from_input("monthly_rent", monthly_rent)?,
            Some(yield_rate),
        )?;
        Ok(self.record(valuation))
    }

    fn submit(&self, request: ValuationRequest) -> Result<CalculationOutcome> {
        debug!("Submitting {} calculation", request.method().code());
        match request {
            ValuationRequest::Comparison {
                area,
                price_per_sqm,
            } => self.compute_comparison(area, price_per_sqm),
            ValuationRequest::Cost {
                area,
                price_per_sqm,
                building_age,
            } => self.compute_cost(area, price_per_sqm, building_age),
            ValuationRequest::Income {
                monthly_rent,
                yield_rate,
            } => self.compute_income(monthly_rent, yield_rate),
        }
    }

    fn list_history(&self) -> Vec<CalculationRecord> {
        self.history_store.get_all()
    }

    fn get_statistics(&self) -> Option<HistoryStatistics> {
        self.statistics_service.get_statistics()
    }

    fn delete_history_item(&self, index: usize) -> bool {
        self.history_store.delete_at(index)
    }

    fn clear_history(&self) -> bool {
        self.history_store.clear()
    }

    fn export_history(&self) -> Option<HistoryExport> {
        let records = self.history_store.get_all();
        let content = render_history_export(&records, self.timezone)?;
        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        Some(HistoryExport {
            file_name: export_file_name(today),
            content,
        })
    }
}
