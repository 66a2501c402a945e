use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Date arithmetic left the supported calendar range: {operation} from {from}")]
    OutOfRange { operation: String, from: NaiveDate },
}

impl CalendarError {
    pub(crate) fn out_of_range(operation: impl Into<String>, from: NaiveDate) -> Self {
        CalendarError::OutOfRange {
            operation: operation.into(),
            from,
        }
    }
}
