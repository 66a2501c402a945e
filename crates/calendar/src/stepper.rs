use crate::business_days::add_business_days;
use crate::error::CalendarError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use core_types::Periodicity;

/// Resolves the boundary that closes the period *before* the one containing
/// a reference date.
///
/// Implementations must be pure: the same inputs always give the same date.
/// The `Send + Sync` bounds let one engine serve concurrent callers.
pub trait CalendarStepper: Send + Sync {
    /// Returns the last date of the period immediately preceding the period
    /// that contains `reference`. The result is always strictly before
    /// `reference`.
    fn previous_boundary(
        &self,
        periodicity: Periodicity,
        reference: NaiveDate,
    ) -> Result<NaiveDate, CalendarError>;
}

/// A stepper whose boundaries align themselves to the reference date using
/// calendar-day period ends and a configurable weekly anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfAligningStepper {
    week_anchor: Weekday,
}

impl SelfAligningStepper {
    pub fn new(week_anchor: Weekday) -> Self {
        Self { week_anchor }
    }

    pub fn week_anchor(&self) -> Weekday {
        self.week_anchor
    }

    /// The most recent anchor weekday strictly before `reference`.
    fn previous_anchor(&self, reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let from = reference.weekday().num_days_from_monday();
        let anchor = self.week_anchor.num_days_from_monday();
        let days_back = (from + 7 - anchor - 1) % 7 + 1;
        reference
            .checked_sub_days(Days::new(u64::from(days_back)))
            .ok_or_else(|| CalendarError::out_of_range("step back to the weekly anchor", reference))
    }

    /// The day before the first day of the `months`-long block containing
    /// `reference`, where blocks start in January.
    fn end_of_previous_block(
        reference: NaiveDate,
        months: u32,
    ) -> Result<NaiveDate, CalendarError> {
        let first_month = (reference.month0() / months) * months + 1;
        NaiveDate::from_ymd_opt(reference.year(), first_month, 1)
            .and_then(|first_day| first_day.pred_opt())
            .ok_or_else(|| {
                CalendarError::out_of_range(format!("step back {months} month block"), reference)
            })
    }
}

impl Default for SelfAligningStepper {
    fn default() -> Self {
        Self::new(Weekday::Fri)
    }
}

impl CalendarStepper for SelfAligningStepper {
    fn previous_boundary(
        &self,
        periodicity: Periodicity,
        reference: NaiveDate,
    ) -> Result<NaiveDate, CalendarError> {
        let boundary = match periodicity {
            Periodicity::Daily => add_business_days(reference, -1)?,
            Periodicity::Weekly => self.previous_anchor(reference)?,
            Periodicity::Monthly => Self::end_of_previous_block(reference, 1)?,
            Periodicity::Quarterly => Self::end_of_previous_block(reference, 3)?,
            Periodicity::SemiAnnually => Self::end_of_previous_block(reference, 6)?,
            Periodicity::Annually => Self::end_of_previous_block(reference, 12)?,
        };
        tracing::trace!(%periodicity, %reference, %boundary, "Resolved previous boundary.");
        Ok(boundary)
    }
}
