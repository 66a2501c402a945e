use chrono::NaiveDate;
use core_types::PeriodType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The analytics of one reporting period.
///
/// This struct is the output of the `PeriodAggregator`; one is created per
/// period and handed to the caller, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub period: PeriodType,
    /// First observation date inside the window.
    pub start_date: NaiveDate,
    /// Last observation date inside the window.
    pub end_date: NaiveDate,

    // I. Returns
    pub gain_loss: Decimal,
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
    pub excess_return: Decimal,

    // II. Annualized returns, only for windows spanning more than a year.
    pub annualized_portfolio_return: Option<Decimal>,
    pub annualized_benchmark_return: Option<Decimal>,
    pub annualized_excess_return: Option<Decimal>,

    // III. Risk. Beta, correlation and R-squared are zero when undefined.
    pub annualized_tracking_error: Decimal,
    pub beta: Decimal,
    pub correlation: Decimal,
    pub r_squared: Decimal,
    pub max_drawdown: Decimal,
    pub annualized_volatility: Decimal,
}

impl AnalyticsResult {
    /// Calendar days between the first and last observation.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_annualized(&self) -> bool {
        self.annualized_portfolio_return.is_some()
    }
}
