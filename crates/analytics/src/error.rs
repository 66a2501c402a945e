use calendar::CalendarError;
use chrono::NaiveDate;
use core_types::{CoreError, PeriodType};
use statistics::StatsError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A resolved window holds no observations.
    #[error("No observations between {start} and {end} for period {period}")]
    EmptyWindow {
        period: PeriodType,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Calendar stepper returned boundary {boundary} which is not before {reference}")]
    StalledCalendar {
        reference: NaiveDate,
        boundary: NaiveDate,
    },

    #[error("Date arithmetic out of range while resolving {period} from {as_of}")]
    DateOutOfRange { period: PeriodType, as_of: NaiveDate },

    #[error("Invalid input data: {0}")]
    Core(#[from] CoreError),

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Error in calculation: {0}")]
    Statistics(#[from] StatsError),
}
