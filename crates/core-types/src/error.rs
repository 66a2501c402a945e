use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown performance period tag: '{0}'")]
    UnknownPeriodTag(String),

    #[error("An observation series must contain at least one data point")]
    EmptySeries,

    #[error("Duplicate observation for date {0}")]
    DuplicateDate(NaiveDate),

    #[error("Observation keyed under {key} carries date {date}")]
    KeyMismatch { key: NaiveDate, date: NaiveDate },
}
