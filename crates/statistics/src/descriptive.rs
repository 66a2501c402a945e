//! Moments and order statistics of a single return series.

use crate::error::StatsError;
use crate::{checked_ratio, sqrt_or_zero};
use rust_decimal::Decimal;

pub fn mean(values: &[Decimal]) -> Result<Decimal, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("mean"));
    }
    let sum: Decimal = values.iter().sum();
    Ok(sum / Decimal::from(values.len()))
}

pub fn median(values: &[Decimal]) -> Result<Decimal, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("median"));
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / Decimal::TWO)
    } else {
        Ok(sorted[mid])
    }
}

pub fn min(values: &[Decimal]) -> Result<Decimal, StatsError> {
    values.iter().copied().min().ok_or(StatsError::EmptyInput("minimum"))
}

pub fn max(values: &[Decimal]) -> Result<Decimal, StatsError> {
    values.iter().copied().max().ok_or(StatsError::EmptyInput("maximum"))
}

/// Sum of squared deviations from the mean divided by `n − 1`; zero for
/// fewer than two values.
pub(crate) fn sample_variance(values: &[Decimal]) -> Decimal {
    if values.len() < 2 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(values.len());
    let mean = values.iter().sum::<Decimal>() / n;
    let squared: Decimal = values.iter().map(|v| (*v - mean) * (*v - mean)).sum();
    squared / (n - Decimal::ONE)
}

/// Sample standard deviation. Total: zero for fewer than two values.
pub fn sample_std_dev(values: &[Decimal]) -> Result<Decimal, StatsError> {
    sqrt_or_zero(sample_variance(values), "standard deviation")
}

/// Population central moments two, three and four.
fn central_moments(
    values: &[Decimal],
    statistic: &'static str,
) -> Result<(Decimal, Decimal, Decimal), StatsError> {
    if values.len() < 2 {
        return Err(StatsError::degenerate(statistic, "fewer than two observations"));
    }
    let n = Decimal::from(values.len());
    let mean = values.iter().sum::<Decimal>() / n;
    let (mut m2, mut m3, mut m4) = (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    for v in values {
        let d = *v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);
    if m2.is_zero() {
        return Err(StatsError::degenerate(statistic, "zero variance"));
    }
    Ok((m2, m3, m4))
}

/// Population skewness `m₃ / m₂^1.5`.
pub fn skewness(values: &[Decimal]) -> Result<Decimal, StatsError> {
    let (m2, m3, _) = central_moments(values, "skewness")?;
    let sd = sqrt_or_zero(m2, "skewness")?;
    checked_ratio(m3, sd * sd * sd, "skewness")
}

/// Excess kurtosis `m₄ / m₂² − 3`.
pub fn excess_kurtosis(values: &[Decimal]) -> Result<Decimal, StatsError> {
    let (m2, _, m4) = central_moments(values, "kurtosis")?;
    Ok(checked_ratio(m4, m2 * m2, "kurtosis")? - Decimal::from(3))
}
