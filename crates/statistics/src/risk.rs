use crate::descriptive::sample_variance;
use crate::error::StatsError;
use crate::{checked_ratio, ensure_same_length, sqrt_or_zero};
use rust_decimal::Decimal;

/// Sums of co-deviations and squared deviations from the means of paired
/// series. Left unscaled: every statistic here is a ratio of them.
fn co_deviations(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
    statistic: &'static str,
) -> Result<(Decimal, Decimal, Decimal), StatsError> {
    ensure_same_length(portfolio, benchmark)?;
    if portfolio.len() < 2 {
        return Err(StatsError::degenerate(statistic, "fewer than two observations"));
    }

    let n = Decimal::from(portfolio.len());
    let mean_p = portfolio.iter().sum::<Decimal>() / n;
    let mean_b = benchmark.iter().sum::<Decimal>() / n;

    let (mut cov, mut var_p, mut var_b) = (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    for (p, b) in portfolio.iter().zip(benchmark) {
        let dp = *p - mean_p;
        let db = *b - mean_b;
        cov += dp * db;
        var_p += dp * dp;
        var_b += db * db;
    }

    Ok((cov, var_p, var_b))
}

/// Sensitivity of the portfolio to the benchmark: `cov(p, b) / var(b)`.
pub fn beta(portfolio: &[Decimal], benchmark: &[Decimal]) -> Result<Decimal, StatsError> {
    let (cov, _, var_b) = co_deviations(portfolio, benchmark, "beta")?;
    if var_b.is_zero() {
        return Err(StatsError::degenerate("beta", "benchmark variance is zero"));
    }
    checked_ratio(cov, var_b, "beta")
}

/// Pearson correlation of portfolio and benchmark returns.
pub fn correlation(portfolio: &[Decimal], benchmark: &[Decimal]) -> Result<Decimal, StatsError> {
    let (cov, var_p, var_b) = co_deviations(portfolio, benchmark, "correlation")?;
    if var_b.is_zero() {
        return Err(StatsError::degenerate("correlation", "benchmark variance is zero"));
    }
    if var_p.is_zero() {
        return Err(StatsError::degenerate("correlation", "portfolio variance is zero"));
    }
    let denominator = sqrt_or_zero(var_p * var_b, "correlation")?;
    checked_ratio(cov, denominator, "correlation")
}

/// Share of portfolio variance explained by the benchmark (correlation squared).
pub fn r_squared(portfolio: &[Decimal], benchmark: &[Decimal]) -> Result<Decimal, StatsError> {
    let rho = correlation(portfolio, benchmark).map_err(|e| match e {
        StatsError::DegenerateInput { reason, .. } => StatsError::degenerate("R-squared", reason),
        other => other,
    })?;
    Ok(rho * rho)
}

/// Largest peak-to-trough decline of the cumulative return index, as a
/// positive fraction of the peak.
///
/// The index starts at the value reached after the first return, so a single
/// observation or a non-decreasing index always yields zero.
pub fn max_drawdown(returns: &[Decimal]) -> Decimal {
    let mut returns = returns.iter();
    let Some(first) = returns.next() else {
        return Decimal::ZERO;
    };

    let mut index = Decimal::ONE + first;
    let mut peak = index;
    let mut max_drawdown = Decimal::ZERO;

    for r in returns {
        index *= Decimal::ONE + r;
        if index > peak {
            peak = index;
        }
        let drawdown = if peak > Decimal::ZERO {
            (peak - index) / peak
        } else {
            Decimal::ONE
        };
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    max_drawdown
}

/// Sample standard deviation scaled by `√periods_per_year`. Zero for fewer
/// than two returns.
pub fn annualized_volatility(
    returns: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let periodic = sqrt_or_zero(sample_variance(returns), "annualized volatility")?;
    let factor = sqrt_or_zero(Decimal::from(periods_per_year), "annualized volatility")?;
    Ok(periodic * factor)
}

/// Annualized standard deviation of the portfolio-minus-benchmark return.
///
/// Pairs are taken positionally; a longer input is truncated to the shorter.
pub fn annualized_tracking_error(
    portfolio: &[Decimal],
    benchmark: &[Decimal],
    periods_per_year: u32,
) -> Result<Decimal, StatsError> {
    let active: Vec<Decimal> = portfolio.iter().zip(benchmark).map(|(p, b)| *p - *b).collect();
    annualized_volatility(&active, periods_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.000001)
    }

    #[test]
    fn beta_of_a_levered_benchmark() {
        let benchmark = [dec!(0.01), dec!(-0.02), dec!(0.03), dec!(0.00)];
        let portfolio: Vec<Decimal> = benchmark.iter().map(|b| *b * dec!(2)).collect();
        assert_eq!(beta(&portfolio, &benchmark).unwrap(), dec!(2));
        assert!(close(correlation(&portfolio, &benchmark).unwrap(), dec!(1)));
        assert!(close(r_squared(&portfolio, &benchmark).unwrap(), dec!(1)));
    }

    #[test]
    fn negatively_correlated_series() {
        let benchmark = [dec!(0.01), dec!(-0.01), dec!(0.02)];
        let portfolio: Vec<Decimal> = benchmark.iter().map(|b| -*b).collect();
        assert_eq!(beta(&portfolio, &benchmark).unwrap(), dec!(-1));
        assert!(close(correlation(&portfolio, &benchmark).unwrap(), dec!(-1)));
    }

    #[test]
    fn constant_benchmark_is_degenerate() {
        let portfolio = [dec!(0.01), dec!(0.02), dec!(0.03)];
        let benchmark = [dec!(0.005); 3];
        assert!(beta(&portfolio, &benchmark).unwrap_err().is_degenerate());
        assert!(correlation(&portfolio, &benchmark).unwrap_err().is_degenerate());
        let err = r_squared(&portfolio, &benchmark).unwrap_err();
        assert_eq!(
            err,
            StatsError::DegenerateInput {
                statistic: "R-squared",
                reason: "benchmark variance is zero"
            }
        );
    }

    #[test]
    fn correlation_is_degenerate_when_the_variance_product_underflows() {
        let near_constant = [dec!(0.0001), dec!(0.0001), dec!(0.0001), dec!(0.0001000001)];
        assert_eq!(beta(&near_constant, &near_constant).unwrap(), Decimal::ONE);
        assert!(correlation(&near_constant, &near_constant).unwrap_err().is_degenerate());
        assert!(r_squared(&near_constant, &near_constant).unwrap_err().is_degenerate());
    }

    #[test]
    fn single_observation_is_degenerate() {
        assert!(beta(&[dec!(0.01)], &[dec!(0.02)]).unwrap_err().is_degenerate());
        assert!(r_squared(&[dec!(0.01)], &[dec!(0.02)]).unwrap_err().is_degenerate());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = beta(&[dec!(0.01), dec!(0.02)], &[dec!(0.02)]).unwrap_err();
        assert_eq!(err, StatsError::LengthMismatch { left: 2, right: 1 });
        assert!(!err.is_degenerate());
    }

    #[test]
    fn drawdown_measures_peak_to_trough() {
        // Index: 1.10, 0.88, 0.968, 1.1616 -> trough 0.88 from peak 1.10.
        let returns = [dec!(0.10), dec!(-0.20), dec!(0.10), dec!(0.20)];
        assert_eq!(max_drawdown(&returns), dec!(0.2));
    }

    #[test]
    fn drawdown_is_total() {
        assert_eq!(max_drawdown(&[]), Decimal::ZERO);
        assert_eq!(max_drawdown(&[dec!(-0.5)]), Decimal::ZERO);
        assert_eq!(max_drawdown(&[dec!(0.01), dec!(0), dec!(0.02)]), Decimal::ZERO);
    }

    #[test]
    fn volatility_scales_with_square_root_of_frequency() {
        let returns = [dec!(0.01), dec!(-0.01), dec!(0.01), dec!(-0.01)];
        let monthly = annualized_volatility(&returns, 12).unwrap();
        let quarterly = annualized_volatility(&returns, 3).unwrap();
        assert!(close(monthly, quarterly * dec!(2)), "{monthly} vs {quarterly}");
        assert_eq!(annualized_volatility(&[dec!(0.03)], 252).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn tracking_error_of_identical_series_is_zero() {
        let returns = [dec!(0.01), dec!(0.04), dec!(-0.02)];
        assert_eq!(annualized_tracking_error(&returns, &returns, 252).unwrap(), Decimal::ZERO);

        let shifted: Vec<Decimal> = returns.iter().map(|r| *r + dec!(0.001)).collect();
        assert_eq!(annualized_tracking_error(&shifted, &returns, 252).unwrap(), Decimal::ZERO);
        let single = annualized_tracking_error(&[dec!(0.01)], &[dec!(0.02)], 252).unwrap();
        assert_eq!(single, Decimal::ZERO);
    }
}
