use crate::error::CoreError;
use crate::observation::ObservationPoint;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A read-only, date-ordered projection of one return figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSeries(BTreeMap<NaiveDate, Decimal>);

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<Decimal> {
        self.0.get(date).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        self.0.iter().map(|(date, value)| (*date, *value))
    }

    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.0.values().copied()
    }

    /// Entries with `start <= date <= end`. An inverted interval is empty.
    pub fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        let range = if start <= end { Some(self.0.range(start..=end)) } else { None };
        range
            .into_iter()
            .flatten()
            .map(|(date, value)| (*date, *value))
    }
}

impl FromIterator<(NaiveDate, Decimal)> for ReturnSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The ordered, unique-keyed set of observations an engine works on.
///
/// The series is never empty. The portfolio and benchmark return projections
/// are derived once at construction and stay in step with the points for the
/// lifetime of the value, since nothing can mutate it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    points: BTreeMap<NaiveDate, ObservationPoint>,
    portfolio_returns: ReturnSeries,
    benchmark_returns: ReturnSeries,
}

impl ObservationSeries {
    /// Builds a series from points in any order. Duplicate dates are rejected.
    pub fn new(points: impl IntoIterator<Item = ObservationPoint>) -> Result<Self, CoreError> {
        let mut map = BTreeMap::new();
        for point in points {
            match map.entry(point.date) {
                btree_map::Entry::Occupied(_) => return Err(CoreError::DuplicateDate(point.date)),
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(point);
                }
            }
        }
        Self::from_map(map)
    }

    fn from_map(points: BTreeMap<NaiveDate, ObservationPoint>) -> Result<Self, CoreError> {
        if points.is_empty() {
            return Err(CoreError::EmptySeries);
        }

        let portfolio_returns = points.values().map(|p| (p.date, p.portfolio_return)).collect();
        let benchmark_returns = points.values().map(|p| (p.date, p.benchmark_return)).collect();

        tracing::debug!(observations = points.len(), "Observation series built.");

        Ok(Self {
            points,
            portfolio_returns,
            benchmark_returns,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first observation date.
    pub fn earliest(&self) -> NaiveDate {
        // A series is non-empty by construction.
        self.points.keys().next().copied().unwrap_or(NaiveDate::MIN)
    }

    /// The last observation date.
    pub fn latest(&self) -> NaiveDate {
        self.points.keys().next_back().copied().unwrap_or(NaiveDate::MAX)
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&ObservationPoint> {
        self.points.get(date)
    }

    pub fn points(&self) -> impl Iterator<Item = &ObservationPoint> + '_ {
        self.points.values()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.keys().copied()
    }

    /// Observations with `start <= date <= end`. An inverted interval is empty.
    pub fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &ObservationPoint> + '_ {
        let range = if start <= end { Some(self.points.range(start..=end)) } else { None };
        range.into_iter().flatten().map(|(_, point)| point)
    }

    pub fn portfolio_returns(&self) -> &ReturnSeries {
        &self.portfolio_returns
    }

    pub fn benchmark_returns(&self) -> &ReturnSeries {
        &self.benchmark_returns
    }
}

impl TryFrom<BTreeMap<NaiveDate, ObservationPoint>> for ObservationSeries {
    type Error = CoreError;

    /// Accepts an already keyed map, checking that every key matches its point.
    fn try_from(points: BTreeMap<NaiveDate, ObservationPoint>) -> Result<Self, Self::Error> {
        if let Some((key, point)) = points.iter().find(|(key, point)| **key != point.date) {
            return Err(CoreError::KeyMismatch {
                key: *key,
                date: point.date,
            });
        }
        Self::from_map(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(d: NaiveDate, p: Decimal, b: Decimal) -> ObservationPoint {
        ObservationPoint::new(7, d, p, b)
    }

    #[test]
    fn orders_points_and_builds_projections() {
        let series = ObservationSeries::new(vec![
            point(date(2024, 1, 3), dec!(0.03), dec!(0.003)),
            point(date(2024, 1, 1), dec!(0.01), dec!(0.001)),
            point(date(2024, 1, 2), dec!(0.02), dec!(0.002)),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.earliest(), date(2024, 1, 1));
        assert_eq!(series.latest(), date(2024, 1, 3));
        let portfolio: Vec<_> = series.portfolio_returns().values().collect();
        assert_eq!(portfolio, vec![dec!(0.01), dec!(0.02), dec!(0.03)]);
        assert_eq!(series.benchmark_returns().get(&date(2024, 1, 2)), Some(dec!(0.002)));
    }

    #[test]
    fn rejects_empty_and_duplicate_input() {
        assert_eq!(ObservationSeries::new(Vec::new()).unwrap_err(), CoreError::EmptySeries);

        let d = date(2024, 1, 1);
        let err = ObservationSeries::new(vec![
            point(d, dec!(0.01), dec!(0)),
            point(d, dec!(0.02), dec!(0)),
        ])
        .unwrap_err();
        assert_eq!(err, CoreError::DuplicateDate(d));
    }

    #[test]
    fn keyed_map_must_agree_with_point_dates() {
        let mut map = BTreeMap::new();
        map.insert(date(2024, 1, 2), point(date(2024, 1, 1), dec!(0), dec!(0)));
        let err = ObservationSeries::try_from(map).unwrap_err();
        assert_eq!(
            err,
            CoreError::KeyMismatch {
                key: date(2024, 1, 2),
                date: date(2024, 1, 1)
            }
        );
    }

    #[test]
    fn range_is_closed_and_tolerates_inverted_bounds() {
        let series = ObservationSeries::new(
            (1..=5).map(|d| point(date(2024, 1, d), Decimal::from(d), Decimal::ZERO)),
        )
        .unwrap();

        let dates: Vec<_> = series
            .range(date(2024, 1, 2), date(2024, 1, 4))
            .map(|p| p.date)
            .collect();
        assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)]);
        assert_eq!(series.range(date(2024, 1, 4), date(2024, 1, 2)).count(), 0);
        assert_eq!(series.portfolio_returns().range(date(2024, 1, 5), date(2024, 1, 9)).count(), 1);
    }
}
