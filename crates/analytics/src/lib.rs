//! # Vantage Analytics
//!
//! Period analytics for a single portfolio's observation series.
//!
//! ## Architectural Principles
//!
//! - **Pure Calculation:** The crate performs no I/O. A `PerformanceEngine` is
//!   built once over an immutable `ObservationSeries` and answers queries as
//!   pure functions of its inputs.
//! - **Layered:** Dates come from `calendar`, numbers from `statistics`. This
//!   crate only decides which observations belong to which period and how the
//!   per-field failures are isolated.
//!
//! ## Public API
//!
//! - `PerformanceEngine`: standard summary, rolling history and whole-series statistics.
//! - `AnalyticsResult`: the metrics of one period.
//! - `SummaryStatistics`: descriptive and risk statistics over the whole series.
//! - `AnalyticsError`: the error type returned from this crate.

pub mod aggregator;
pub mod engine;
pub mod error;
pub mod report;
pub mod resolver;
pub mod summary;
pub mod window;

// Re-export the key components to create a clean, public-facing API.
pub use aggregator::PeriodAggregator;
pub use engine::PerformanceEngine;
pub use error::AnalyticsError;
pub use report::AnalyticsResult;
pub use resolver::PeriodResolver;
pub use summary::SummaryStatistics;
pub use window::{Window, slice};
