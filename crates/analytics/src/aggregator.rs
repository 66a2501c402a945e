use crate::error::AnalyticsError;
use crate::report::AnalyticsResult;
use crate::window::Window;
use core_types::PeriodType;
use rust_decimal::Decimal;
use statistics::StatsError;

/// Windows spanning more than this many calendar days get annualized returns.
pub const ANNUALIZATION_THRESHOLD_DAYS: i64 = 365;

/// Substitutes zero for a statistic that is undefined for this input and
/// passes every other outcome through.
pub(crate) fn defined_or_zero(
    field: &'static str,
    outcome: Result<Decimal, StatsError>,
) -> Result<Decimal, AnalyticsError> {
    match outcome {
        Ok(value) => Ok(value),
        Err(err) if err.is_degenerate() => {
            tracing::debug!(field, reason = %err, "Statistic undefined, defaulting to zero.");
            Ok(Decimal::ZERO)
        }
        Err(err) => Err(err.into()),
    }
}

/// Turns one window of observations into one `AnalyticsResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodAggregator {
    periods_per_year: u32,
    days_per_year: u32,
}

impl PeriodAggregator {
    pub fn new(periods_per_year: u32, days_per_year: u32) -> Self {
        Self {
            periods_per_year,
            days_per_year,
        }
    }

    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    /// Aggregates `window` under the `period` label.
    ///
    /// An empty window is an error. Beta, correlation and R-squared are each
    /// defaulted to zero on their own when undefined; the other fields are
    /// always computed.
    pub fn aggregate(
        &self,
        window: &Window<'_>,
        period: PeriodType,
    ) -> Result<AnalyticsResult, AnalyticsError> {
        let (Some(start_date), Some(end_date)) = (window.first_date(), window.last_date()) else {
            return Err(AnalyticsError::EmptyWindow {
                period,
                start: window.requested_start(),
                end: window.requested_end(),
            });
        };

        let portfolio = window.portfolio_returns();
        let benchmark = window.benchmark_returns();

        let portfolio_return = statistics::compounded_return(&portfolio)?;
        let benchmark_return = statistics::compounded_return(&benchmark)?;

        let (annualized_portfolio_return, annualized_benchmark_return, annualized_excess_return) =
            if (end_date - start_date).num_days() > ANNUALIZATION_THRESHOLD_DAYS {
                let days = self.days_per_year;
                let annual_portfolio =
                    statistics::annualized_return(window.dated_portfolio_returns(), days)?;
                let annual_benchmark =
                    statistics::annualized_return(window.dated_benchmark_returns(), days)?;
                (
                    Some(annual_portfolio),
                    Some(annual_benchmark),
                    Some(annual_portfolio - annual_benchmark),
                )
            } else {
                (None, None, None)
            };

        let ppy = self.periods_per_year;
        let result = AnalyticsResult {
            period,
            start_date,
            end_date,
            gain_loss: window.gain_loss(),
            portfolio_return,
            benchmark_return,
            excess_return: portfolio_return - benchmark_return,
            annualized_portfolio_return,
            annualized_benchmark_return,
            annualized_excess_return,
            annualized_tracking_error: statistics::annualized_tracking_error(
                &portfolio, &benchmark, ppy,
            )?,
            beta: defined_or_zero("beta", statistics::beta(&portfolio, &benchmark))?,
            correlation: defined_or_zero(
                "correlation",
                statistics::correlation(&portfolio, &benchmark),
            )?,
            r_squared: defined_or_zero("r_squared", statistics::r_squared(&portfolio, &benchmark))?,
            max_drawdown: statistics::max_drawdown(&portfolio),
            annualized_volatility: statistics::annualized_volatility(&portfolio, ppy)?,
        };

        tracing::debug!(
            %period,
            start = %result.start_date,
            end = %result.end_date,
            observations = window.len(),
            portfolio_return = %result.portfolio_return,
            "Period aggregated."
        );
        Ok(result)
    }
}
