//! # Vantage Statistics
//!
//! The numeric contract the period analytics are built on. Every function is
//! pure, works on `Decimal` return ratios and either returns a value or a
//! `StatsError` that says why the statistic does not exist for the input.
//!
//! ## Totality
//!
//! - `max_drawdown`, `annualized_volatility` and `annualized_tracking_error`
//!   are total: any input, including a single observation, yields a value.
//! - `beta`, `correlation` and `r_squared` (and the ratios built on them)
//!   return `StatsError::DegenerateInput` when a quantity they divide by is
//!   zero, or rounds to zero at 28 decimal places. No statistic panics on a
//!   vanishing denominator. Callers decide what default to substitute.
//! - `annualized_return` fails with `StatsError::NonPositiveSpan` for spans of
//!   zero days instead of inventing a value.

pub mod descriptive;
pub mod error;
pub mod frequency;
pub mod ratios;
pub mod returns;
pub mod risk;

pub use descriptive::{excess_kurtosis, max, mean, median, min, sample_std_dev, skewness};
pub use error::StatsError;
pub use frequency::SamplingFrequency;
pub use ratios::{
    batting_average, down_capture, information_ratio, jensens_alpha, sharpe_ratio, sortino_ratio,
    up_capture,
};
pub use returns::{DEFAULT_DAYS_PER_YEAR, annualized_return, compounded_return};
pub use risk::{
    annualized_tracking_error, annualized_volatility, beta, correlation, max_drawdown, r_squared,
};

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Square root that treats non-positive input as zero.
pub(crate) fn sqrt_or_zero(value: Decimal, statistic: &'static str) -> Result<Decimal, StatsError> {
    if value <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    value.sqrt().ok_or(StatsError::Numeric(statistic))
}

/// Divides `numerator` by `denominator`.
///
/// A denominator that is zero, including one that underflowed to zero at 28
/// decimal places, makes the statistic degenerate. Overflow is a numeric error.
pub(crate) fn checked_ratio(
    numerator: Decimal,
    denominator: Decimal,
    statistic: &'static str,
) -> Result<Decimal, StatsError> {
    if denominator.is_zero() {
        return Err(StatsError::degenerate(statistic, "denominator is zero"));
    }
    numerator.checked_div(denominator).ok_or(StatsError::Numeric(statistic))
}

pub(crate) fn ensure_same_length(left: &[Decimal], right: &[Decimal]) -> Result<(), StatsError> {
    if left.len() != right.len() {
        return Err(StatsError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}
