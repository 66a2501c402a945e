//! # Vantage Core Types
//!
//! The shared vocabulary of the performance workspace: the observation data
//! model, the ordered series that owns it and the period/periodicity enums.
//!
//! This is a leaf crate. It knows nothing about calendars or statistics, so
//! every other crate can depend on it.

pub mod enums;
pub mod error;
pub mod observation;
pub mod series;

// Re-export the core types to provide a clean public API.
pub use enums::{PeriodType, Periodicity};
pub use error::CoreError;
pub use observation::ObservationPoint;
pub use series::{ObservationSeries, ReturnSeries};
