use chrono::NaiveDate;
use core_types::{ObservationPoint, ObservationSeries};
use rust_decimal::Decimal;

/// The observations of a series that fall inside a closed date interval,
/// together with the matching slices of the return projections.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    start: NaiveDate,
    end: NaiveDate,
    points: Vec<&'a ObservationPoint>,
    portfolio: Vec<(NaiveDate, Decimal)>,
    benchmark: Vec<(NaiveDate, Decimal)>,
}

/// Extracts `start <= date <= end` from `series`.
///
/// Finding no dates in range is not an error here: the window is simply
/// empty and callers must check before aggregating it.
pub fn slice(series: &ObservationSeries, start: NaiveDate, end: NaiveDate) -> Window<'_> {
    Window {
        start,
        end,
        points: series.range(start, end).collect(),
        portfolio: series.portfolio_returns().range(start, end).collect(),
        benchmark: series.benchmark_returns().range(start, end).collect(),
    }
}

impl Window<'_> {
    /// The requested lower bound, which may precede the first observation.
    pub fn requested_start(&self) -> NaiveDate {
        self.start
    }

    /// The requested upper bound, which may follow the last observation.
    pub fn requested_end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn gain_loss(&self) -> Decimal {
        self.points.iter().map(|p| p.gain_loss).sum()
    }

    pub fn dated_portfolio_returns(&self) -> &[(NaiveDate, Decimal)] {
        &self.portfolio
    }

    pub fn dated_benchmark_returns(&self) -> &[(NaiveDate, Decimal)] {
        &self.benchmark
    }

    pub fn portfolio_returns(&self) -> Vec<Decimal> {
        self.portfolio.iter().map(|(_, r)| *r).collect()
    }

    pub fn benchmark_returns(&self) -> Vec<Decimal> {
        self.benchmark.iter().map(|(_, r)| *r).collect()
    }
}
