//! # Vantage Calendar
//!
//! Calendar arithmetic for period analytics: business-day walking and the
//! self-aligning boundary stepper used to resolve week/month/quarter/year
//! cut-points relative to a reference date.
//!
//! ## Conventions
//!
//! - Business days are Monday to Friday. Holiday calendars are not modeled.
//! - Month, quarter, half-year and year boundaries fall on the last *calendar*
//!   day of the period, never on the last business day.
//! - A weekly boundary is the most recent anchor weekday strictly before the
//!   reference date.
//! - A daily boundary is the previous business day.

pub mod business_days;
pub mod error;
pub mod stepper;

pub use business_days::{add_business_days, business_days_between, is_business_day};
pub use error::CalendarError;
pub use stepper::{CalendarStepper, SelfAligningStepper};
