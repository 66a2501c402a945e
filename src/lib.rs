//! # Vantage
//!
//! Period analytics for investment portfolios.
//!
//! Given a daily (or lower-frequency) history of portfolio and benchmark
//! returns, Vantage produces the standard period summary (Day1 through
//! inception-to-date), non-overlapping rolling histories and whole-series
//! statistics. Everything is synchronous and pure: the caller owns I/O.
//!
//! This crate is a facade over the workspace members. Applications depend
//! on it alone and optionally call [`init_tracing`] once at startup.

// Re-export the public API of the member crates.
pub use analytics::{AnalyticsError, AnalyticsResult, PerformanceEngine, SummaryStatistics};
pub use calendar::{CalendarError, CalendarStepper, SelfAligningStepper};
pub use configuration::{ConfigError, EngineSettings, load_config};
pub use core_types::{
    CoreError, ObservationPoint, ObservationSeries, PeriodType, Periodicity, ReturnSeries,
};
pub use statistics::{SamplingFrequency, StatsError};

use std::path::Path;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!("Tracing initialized.");
    Ok(())
}

/// Loads settings from `config_path` and builds an engine over `series`.
pub fn engine_from_config(
    series: ObservationSeries,
    config_path: impl AsRef<Path>,
) -> anyhow::Result<PerformanceEngine> {
    let settings = load_config(config_path)?;
    Ok(PerformanceEngine::new(series, &settings))
}
