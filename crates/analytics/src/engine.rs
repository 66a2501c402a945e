use crate::aggregator::PeriodAggregator;
use crate::error::AnalyticsError;
use crate::report::AnalyticsResult;
use crate::resolver::PeriodResolver;
use crate::summary::SummaryStatistics;
use crate::window::slice;
use calendar::{CalendarStepper, SelfAligningStepper};
use chrono::NaiveDate;
use configuration::EngineSettings;
use core_types::{ObservationSeries, PeriodType, Periodicity};
use statistics::SamplingFrequency;

/// Computes period analytics over one immutable observation series.
///
/// Everything the engine needs is fixed at construction, so every query is a
/// pure function of the engine and its arguments. The engine is `Send + Sync`
/// and can serve concurrent callers by shared reference.
pub struct PerformanceEngine {
    series: ObservationSeries,
    stepper: Box<dyn CalendarStepper>,
    aggregator: PeriodAggregator,
    days_per_year: u32,
    include_partial_windows: bool,
}

impl PerformanceEngine {
    /// Creates an engine with the self-aligning calendar anchored on the
    /// configured weekday.
    pub fn new(series: ObservationSeries, settings: &EngineSettings) -> Self {
        let stepper = SelfAligningStepper::new(settings.calendar.week_anchor);
        Self::with_stepper(series, settings, Box::new(stepper))
    }

    /// Creates an engine that resolves boundaries with a custom stepper.
    pub fn with_stepper(
        series: ObservationSeries,
        settings: &EngineSettings,
        stepper: Box<dyn CalendarStepper>,
    ) -> Self {
        let periods_per_year = settings.statistics.periods_per_year.unwrap_or_else(|| {
            let dates: Vec<NaiveDate> = series.dates().collect();
            SamplingFrequency::infer(&dates).periods_per_year()
        });
        let days_per_year = settings.statistics.days_per_year;

        tracing::info!(
            observations = series.len(),
            earliest = %series.earliest(),
            latest = %series.latest(),
            periods_per_year,
            "Performance engine ready."
        );

        Self {
            series,
            stepper,
            aggregator: PeriodAggregator::new(periods_per_year, days_per_year),
            days_per_year,
            include_partial_windows: settings.rolling.include_partial_windows,
        }
    }

    pub fn series(&self) -> &ObservationSeries {
        &self.series
    }

    /// The annualization factor used for volatility and tracking error.
    pub fn periods_per_year(&self) -> u32 {
        self.aggregator.periods_per_year()
    }

    /// Analytics for every standard period the series fully covers, in
    /// `PeriodType::STANDARD` order.
    ///
    /// `as_of` is expected to be an observation date. Periods that would
    /// start before the first observation are left out of the list.
    #[tracing::instrument(name = "standard_summary", skip(self))]
    pub fn standard_summary(
        &self,
        as_of: NaiveDate,
    ) -> Result<Vec<AnalyticsResult>, AnalyticsError> {
        let mut results = Vec::with_capacity(PeriodType::STANDARD.len());
        for period in PeriodType::STANDARD {
            if let Some(result) = self.period_analytics(period, as_of)? {
                results.push(result);
            }
        }
        tracing::info!(periods = results.len(), "Standard summary computed.");
        Ok(results)
    }

    /// Analytics for a single standard period, or `None` when the series
    /// does not reach back far enough to cover it.
    pub fn period_analytics(
        &self,
        period: PeriodType,
        as_of: NaiveDate,
    ) -> Result<Option<AnalyticsResult>, AnalyticsError> {
        let resolver = PeriodResolver::new(self.stepper.as_ref());
        let Some(start) = resolver.resolve(period, as_of, self.series.earliest())? else {
            return Ok(None);
        };
        let window = slice(&self.series, start, as_of);
        self.aggregator.aggregate(&window, period).map(Some)
    }

    /// Walks back from `as_of` one `periodicity` step at a time and
    /// aggregates each step's window under `label`, most recent first.
    ///
    /// Windows are contiguous and never overlap. The walk stops once it has
    /// passed the first observation; the oldest window may start before that
    /// date unless partial windows are disabled in the settings.
    #[tracing::instrument(name = "rolling_history", skip(self))]
    pub fn rolling_history(
        &self,
        as_of: NaiveDate,
        periodicity: Periodicity,
        label: PeriodType,
    ) -> Result<Vec<AnalyticsResult>, AnalyticsError> {
        let earliest = self.series.earliest();
        let mut results = Vec::new();
        let mut cursor = as_of;

        while cursor >= earliest {
            let boundary = self.stepper.previous_boundary(periodicity, cursor)?;
            if boundary >= cursor {
                return Err(AnalyticsError::StalledCalendar {
                    reference: cursor,
                    boundary,
                });
            }
            let start = boundary
                .succ_opt()
                .ok_or(AnalyticsError::DateOutOfRange { period: label, as_of: cursor })?;

            if start < earliest && !self.include_partial_windows {
                tracing::debug!(%start, %earliest, "Dropping partial oldest window.");
                break;
            }

            let window = slice(&self.series, start, cursor);
            results.push(self.aggregator.aggregate(&window, label)?);
            cursor = boundary;
        }

        tracing::info!(windows = results.len(), "Rolling history computed.");
        Ok(results)
    }

    /// Descriptive and risk statistics over the whole series.
    pub fn summary_statistics(&self) -> Result<SummaryStatistics, AnalyticsError> {
        SummaryStatistics::compute(&self.series, self.periods_per_year(), self.days_per_year)
    }
}

impl std::fmt::Debug for PerformanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceEngine")
            .field("observations", &self.series.len())
            .field("aggregator", &self.aggregator)
            .field("include_partial_windows", &self.include_partial_windows)
            .finish_non_exhaustive()
    }
}
