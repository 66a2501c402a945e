//! Risk-adjusted ratios built on top of the moment and regression helpers.

use crate::descriptive::{mean, sample_variance};
use crate::error::StatsError;
use crate::risk::{annualized_tracking_error, beta};
use crate::{checked_ratio, ensure_same_length, sqrt_or_zero};
use rust_decimal::Decimal;

fn excess_over(returns: &[Decimal], risk_free: &[Decimal]) -> Result<Vec<Decimal>, StatsError> {
    ensure_same_length(returns, risk_free)?;
    Ok(returns.iter().zip(risk_free).map(|(r, rf)| *r - *rf).collect())
}

/// Annualized Sharpe ratio: mean excess return over the per-period risk-free
/// rate divided by its standard deviation, scaled by `√periods_per_year`.
pub fn sharpe_ratio(
    returns: &[Decimal],
    risk_free: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let excess = excess_over(returns, risk_free)?;
    let mean_excess = mean(&excess)?;
    let sd = sqrt_or_zero(sample_variance(&excess), "Sharpe ratio")?;
    if sd.is_zero() {
        return Err(StatsError::degenerate("Sharpe ratio", "excess return volatility is zero"));
    }
    let factor = sqrt_or_zero(Decimal::from(periods_per_year), "Sharpe ratio")?;
    Ok(checked_ratio(mean_excess, sd, "Sharpe ratio")? * factor)
}

/// Annualized Sortino ratio: like Sharpe but only below-zero excess returns
/// count towards the deviation.
pub fn sortino_ratio(
    returns: &[Decimal],
    risk_free: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let excess = excess_over(returns, risk_free)?;
    let mean_excess = mean(&excess)?;
    if excess.len() < 2 {
        return Err(StatsError::degenerate("Sortino ratio", "fewer than two observations"));
    }
    let downside: Decimal = excess
        .iter()
        .filter(|e| e.is_sign_negative())
        .map(|e| *e * *e)
        .sum::<Decimal>()
        / Decimal::from(excess.len() - 1);
    let downside_dev = sqrt_or_zero(downside, "Sortino ratio")?;
    if downside_dev.is_zero() {
        return Err(StatsError::degenerate("Sortino ratio", "no downside deviation"));
    }
    let factor = sqrt_or_zero(Decimal::from(periods_per_year), "Sortino ratio")?;
    Ok(checked_ratio(mean_excess, downside_dev, "Sortino ratio")? * factor)
}

/// Annualized mean active return divided by annualized tracking error.
pub fn information_ratio(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let active = excess_over(portfolio, benchmark)?;
    let annual_active = mean(&active)? * Decimal::from(periods_per_year);
    let tracking_error = annualized_tracking_error(portfolio, benchmark, periods_per_year)?;
    if tracking_error.is_zero() {
        return Err(StatsError::degenerate("information ratio", "tracking error is zero"));
    }
    checked_ratio(annual_active, tracking_error, "information ratio")
}

fn capture(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
    statistic: &'static str,
    keep: impl Fn(&Decimal) -> bool,
) -> Result<Decimal, StatsError> {
    ensure_same_length(portfolio, benchmark)?;
    let (p, b): (Vec<Decimal>, Vec<Decimal>) = portfolio
        .iter()
        .zip(benchmark)
        .filter(|(_, b)| keep(b))
        .map(|(p, b)| (*p, *b))
        .unzip();
    if b.is_empty() {
        return Err(StatsError::degenerate(statistic, "no qualifying benchmark periods"));
    }
    checked_ratio(mean(&p)?, mean(&b)?, statistic)
}

/// Mean portfolio return over mean benchmark return, in periods where the
/// benchmark rose.
pub fn up_capture(portfolio: &[Decimal], benchmark: &[Decimal]) -> Result<Decimal, StatsError> {
    capture(portfolio, benchmark, "up capture", |b| *b > Decimal::ZERO)
}

/// Mean portfolio return over mean benchmark return, in periods where the
/// benchmark fell.
pub fn down_capture(portfolio: &[Decimal], benchmark: &[Decimal]) -> Result<Decimal, StatsError> {
    capture(portfolio, benchmark, "down capture", |b| *b < Decimal::ZERO)
}

/// Annualized Jensen's alpha:
/// `(mean(p − rf) − β · mean(b − rf)) · periods_per_year`.
pub fn jensens_alpha(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
    risk_free: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let excess_p = excess_over(portfolio, risk_free)?;
    let excess_b = excess_over(benchmark, risk_free)?;
    let beta = beta(portfolio, benchmark).map_err(|e| match e {
        StatsError::DegenerateInput { reason, .. } => StatsError::degenerate("alpha", reason),
        other => other,
    })?;
    Ok((mean(&excess_p)? - beta * mean(&excess_b)?) * Decimal::from(periods_per_year))
}

/// Fraction of periods in which the portfolio beat the benchmark.
pub fn batting_average(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
) -> Result<Decimal, StatsError> {
    ensure_same_length(portfolio, benchmark)?;
    if portfolio.is_empty() {
        return Err(StatsError::EmptyInput("batting average"));
    }
    let wins = portfolio.iter().zip(benchmark).filter(|(p, b)| p > b).count();
    Ok(Decimal::from(wins) / Decimal::from(portfolio.len()))
}
