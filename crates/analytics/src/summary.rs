use crate::aggregator::defined_or_zero;
use crate::error::AnalyticsError;
use chrono::NaiveDate;
use core_types::ObservationSeries;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use statistics::StatsError;

/// Descriptive and risk statistics of a whole observation series.
///
/// Ratios whose denominator vanishes for the given data are reported as
/// zero, the same policy the period analytics apply to beta and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    // I. Coverage
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub total_days: i64,
    pub total_business_days: i64,
    pub observation_count: usize,

    // II. Distribution of portfolio returns
    pub earliest_recorded_value: Decimal,
    pub last_recorded_value: Decimal,
    pub mean: Decimal,
    pub median: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub standard_deviation: Decimal,
    pub skewness: Decimal,
    pub kurtosis: Decimal,

    // III. Returns
    pub cumulative_return: Decimal,
    pub annualized_return: Option<Decimal>, // None for a single-date series
    pub max_drawdown: Decimal,

    // IV. Risk-adjusted and relative
    pub sharpe_ratio: Decimal,
    pub sortino_ratio: Decimal,
    pub information_ratio: Decimal,
    pub tracking_error: Decimal,
    pub up_capture_ratio: Decimal,
    pub down_capture_ratio: Decimal,
    pub alpha: Decimal,
    pub beta: Decimal,
    pub correlation: Decimal,
    pub r_squared: Decimal,
    pub batting_average: Decimal,
}

impl SummaryStatistics {
    /// Computes the statistics of `series` with the given annualization inputs.
    pub fn compute(
        series: &ObservationSeries,
        periods_per_year: u32,
        days_per_year: u32,
    ) -> Result<Self, AnalyticsError> {
        let dated: Vec<(NaiveDate, Decimal)> = series.portfolio_returns().iter().collect();
        let portfolio: Vec<Decimal> = series.portfolio_returns().values().collect();
        let benchmark: Vec<Decimal> = series.benchmark_returns().values().collect();
        let risk_free: Vec<Decimal> = series.points().map(|p| p.risk_free_rate).collect();

        let min_date = series.earliest();
        let max_date = series.latest();

        let annualized_return = match statistics::annualized_return(&dated, days_per_year) {
            Ok(value) => Some(value),
            Err(StatsError::NonPositiveSpan(_)) => None,
            Err(err) => return Err(err.into()),
        };

        let ppy = periods_per_year;
        Ok(Self {
            min_date,
            max_date,
            total_days: (max_date - min_date).num_days(),
            total_business_days: calendar::business_days_between(min_date, max_date),
            observation_count: series.len(),

            earliest_recorded_value: portfolio.first().copied().unwrap_or_default(),
            last_recorded_value: portfolio.last().copied().unwrap_or_default(),
            mean: statistics::mean(&portfolio)?,
            median: statistics::median(&portfolio)?,
            min: statistics::min(&portfolio)?,
            max: statistics::max(&portfolio)?,
            standard_deviation: statistics::sample_std_dev(&portfolio)?,
            skewness: defined_or_zero("skewness", statistics::skewness(&portfolio))?,
            kurtosis: defined_or_zero("kurtosis", statistics::excess_kurtosis(&portfolio))?,

            cumulative_return: statistics::compounded_return(&portfolio)?,
            annualized_return,
            max_drawdown: statistics::max_drawdown(&portfolio),

            sharpe_ratio: defined_or_zero(
                "sharpe_ratio",
                statistics::sharpe_ratio(&portfolio, &risk_free, ppy),
            )?,
            sortino_ratio: defined_or_zero(
                "sortino_ratio",
                statistics::sortino_ratio(&portfolio, &risk_free, ppy),
            )?,
            information_ratio: defined_or_zero(
                "information_ratio",
                statistics::information_ratio(&portfolio, &benchmark, ppy),
            )?,
            tracking_error: statistics::annualized_tracking_error(&portfolio, &benchmark, ppy)?,
            up_capture_ratio: defined_or_zero(
                "up_capture_ratio",
                statistics::up_capture(&portfolio, &benchmark),
            )?,
            down_capture_ratio: defined_or_zero(
                "down_capture_ratio",
                statistics::down_capture(&portfolio, &benchmark),
            )?,
            alpha: defined_or_zero(
                "alpha",
                statistics::jensens_alpha(&portfolio, &benchmark, &risk_free, ppy),
            )?,
            beta: defined_or_zero("beta", statistics::beta(&portfolio, &benchmark))?,
            correlation: defined_or_zero(
                "correlation",
                statistics::correlation(&portfolio, &benchmark),
            )?,
            r_squared: defined_or_zero("r_squared", statistics::r_squared(&portfolio, &benchmark))?,
            batting_average: statistics::batting_average(&portfolio, &benchmark)?,
        })
    }
}
