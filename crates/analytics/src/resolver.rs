use crate::error::AnalyticsError;
use calendar::{CalendarStepper, add_business_days};
use chrono::{Days, Months, NaiveDate};
use core_types::{PeriodType, Periodicity};

/// Maps a period tag and an as-of date to the date the period starts on.
pub struct PeriodResolver<'a> {
    stepper: &'a dyn CalendarStepper,
}

impl<'a> PeriodResolver<'a> {
    pub fn new(stepper: &'a dyn CalendarStepper) -> Self {
        Self { stepper }
    }

    /// The start date `period` would need, before any history check.
    pub fn candidate_start(
        &self,
        period: PeriodType,
        as_of: NaiveDate,
        earliest: NaiveDate,
    ) -> Result<NaiveDate, AnalyticsError> {
        let to_date = |periodicity| self.day_after_boundary(period, periodicity, as_of);
        let start = match period {
            PeriodType::Day1 => add_business_days(as_of, -1)?,
            PeriodType::Day2 => add_business_days(as_of, -2)?,
            PeriodType::Day3 => add_business_days(as_of, -3)?,
            PeriodType::WeekToDate => to_date(Periodicity::Weekly)?,
            PeriodType::MonthToDate => to_date(Periodicity::Monthly)?,
            PeriodType::QuarterToDate => to_date(Periodicity::Quarterly)?,
            PeriodType::YearToDate => to_date(Periodicity::Annually)?,
            PeriodType::OneYear
            | PeriodType::TwoYear
            | PeriodType::ThreeYear
            | PeriodType::FiveYear
            | PeriodType::TenYear => {
                let years = period.trailing_years().unwrap_or(1);
                as_of
                    .checked_sub_months(Months::new(12 * years))
                    .and_then(|d| d.checked_add_days(Days::new(1)))
                    .ok_or(AnalyticsError::DateOutOfRange { period, as_of })?
            }
            PeriodType::InceptionToDate => earliest,
        };
        Ok(start)
    }

    /// Resolves the start date, or `None` when the series does not reach
    /// back far enough to cover the whole period.
    pub fn resolve(
        &self,
        period: PeriodType,
        as_of: NaiveDate,
        earliest: NaiveDate,
    ) -> Result<Option<NaiveDate>, AnalyticsError> {
        let start = self.candidate_start(period, as_of, earliest)?;
        if earliest <= start {
            Ok(Some(start))
        } else {
            tracing::debug!(%period, %start, %earliest, "Insufficient history, period skipped.");
            Ok(None)
        }
    }

    fn day_after_boundary(
        &self,
        period: PeriodType,
        periodicity: Periodicity,
        as_of: NaiveDate,
    ) -> Result<NaiveDate, AnalyticsError> {
        self.stepper
            .previous_boundary(periodicity, as_of)?
            .succ_opt()
            .ok_or(AnalyticsError::DateOutOfRange { period, as_of })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar::SelfAligningStepper;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn maps_every_standard_period() {
        let stepper = SelfAligningStepper::default();
        let resolver = PeriodResolver::new(&stepper);
        // A Friday at quarter end.
        let as_of = date(2023, 6, 30);
        let earliest = date(2010, 1, 4);
        let expected = [
            (PeriodType::Day1, date(2023, 6, 29)),
            (PeriodType::Day2, date(2023, 6, 28)),
            (PeriodType::Day3, date(2023, 6, 27)),
            (PeriodType::WeekToDate, date(2023, 6, 24)),
            (PeriodType::MonthToDate, date(2023, 6, 1)),
            (PeriodType::QuarterToDate, date(2023, 4, 1)),
            (PeriodType::YearToDate, date(2023, 1, 1)),
            (PeriodType::OneYear, date(2022, 7, 1)),
            (PeriodType::TwoYear, date(2021, 7, 1)),
            (PeriodType::ThreeYear, date(2020, 7, 1)),
            (PeriodType::FiveYear, date(2018, 7, 1)),
            (PeriodType::TenYear, date(2013, 7, 1)),
            (PeriodType::InceptionToDate, earliest),
        ];
        for (period, start) in expected {
            assert_eq!(resolver.resolve(period, as_of, earliest).unwrap(), Some(start), "{period}");
        }
    }

    #[test]
    fn business_day_periods_skip_weekends() {
        let stepper = SelfAligningStepper::default();
        let resolver = PeriodResolver::new(&stepper);
        // 2023-07-03 is a Monday.
        let as_of = date(2023, 7, 3);
        let earliest = date(2023, 1, 2);
        let start = |period| resolver.candidate_start(period, as_of, earliest).unwrap();
        assert_eq!(start(PeriodType::Day1), date(2023, 6, 30));
        assert_eq!(start(PeriodType::Day3), date(2023, 6, 28));
    }

    #[test]
    fn week_to_date_follows_the_configured_anchor() {
        let stepper = SelfAligningStepper::new(Weekday::Sun);
        let resolver = PeriodResolver::new(&stepper);
        let start = resolver
            .candidate_start(PeriodType::WeekToDate, date(2023, 6, 30), date(2020, 1, 1))
            .unwrap();
        assert_eq!(start, date(2023, 6, 26));
    }

    #[test]
    fn trailing_years_from_a_leap_day() {
        let stepper = SelfAligningStepper::default();
        let resolver = PeriodResolver::new(&stepper);
        let start = resolver
            .candidate_start(PeriodType::OneYear, date(2024, 2, 29), date(2000, 1, 1))
            .unwrap();
        assert_eq!(start, date(2023, 3, 1));
    }

    #[test]
    fn insufficient_history_resolves_to_none() {
        let stepper = SelfAligningStepper::default();
        let resolver = PeriodResolver::new(&stepper);
        let as_of = date(2023, 6, 30);
        let earliest = date(2023, 1, 2);
        assert_eq!(resolver.resolve(PeriodType::OneYear, as_of, earliest).unwrap(), None);
        // YTD would start on 2023-01-01, before the first observation.
        assert_eq!(resolver.resolve(PeriodType::YearToDate, as_of, earliest).unwrap(), None);
        assert_eq!(
            resolver.resolve(PeriodType::QuarterToDate, as_of, earliest).unwrap(),
            Some(date(2023, 4, 1))
        );
        // Starting exactly on the first observation is enough.
        assert_eq!(
            resolver.resolve(PeriodType::OneYear, as_of, date(2022, 7, 1)).unwrap(),
            Some(date(2022, 7, 1))
        );
    }
}
