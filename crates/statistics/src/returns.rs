use crate::error::StatsError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Calendar days in the year used to rescale a return to an annual rate.
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// Total return from geometrically linking periodic returns:
/// `Π(1 + rᵢ) − 1`.
pub fn compounded_return(returns: &[Decimal]) -> Result<Decimal, StatsError> {
    if returns.is_empty() {
        return Err(StatsError::EmptyInput("compounded return"));
    }
    let growth = returns.iter().try_fold(Decimal::ONE, |acc, r| {
        acc.checked_mul(Decimal::ONE + r)
            .ok_or(StatsError::Numeric("compounded return"))
    })?;
    Ok(growth - Decimal::ONE)
}

/// Compounds dated returns and rescales the total to a one-year rate using
/// the calendar span between the first and the last date.
///
/// `(1 + total)^(days_per_year / span_days) − 1`. A total loss (growth at or
/// below zero) annualizes to `-1`.
pub fn annualized_return(
    returns: &[(NaiveDate, Decimal)],
    days_per_year: u32,
) -> Result<Decimal, StatsError> {
    let (Some((first, _)), Some((last, _))) = (returns.first(), returns.last()) else {
        return Err(StatsError::EmptyInput("annualized return"));
    };
    let span_days = (*last - *first).num_days();
    if span_days <= 0 {
        return Err(StatsError::NonPositiveSpan(span_days));
    }

    let values: Vec<Decimal> = returns.iter().map(|(_, r)| *r).collect();
    let growth = Decimal::ONE + compounded_return(&values)?;
    if growth <= Decimal::ZERO {
        return Ok(Decimal::NEGATIVE_ONE);
    }

    let exponent = Decimal::from(days_per_year) / Decimal::from(span_days);
    growth
        .checked_powd(exponent)
        .map(|annual_growth| annual_growth - Decimal::ONE)
        .ok_or(StatsError::Numeric("annualized return"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.000001)
    }

    #[test]
    fn compounding_links_geometrically() {
        assert_eq!(compounded_return(&[dec!(0.10), dec!(0.10)]).unwrap(), dec!(0.21));
        assert_eq!(compounded_return(&[dec!(0.10), dec!(-0.10)]).unwrap(), dec!(-0.01));
        assert_eq!(compounded_return(&[dec!(0.05)]).unwrap(), dec!(0.05));
    }

    #[test]
    fn compounding_an_empty_series_is_an_error() {
        assert_eq!(compounded_return(&[]), Err(StatsError::EmptyInput("compounded return")));
    }

    #[test]
    fn annualizing_a_two_year_span() {
        let returns = [(date(2020, 1, 1), dec!(0)), (date(2021, 12, 31), dec!(0.21))];
        // 730 days: (1.21)^(365/730) - 1 = 0.1
        let annual = annualized_return(&returns, 365).unwrap();
        assert!(close(annual, dec!(0.1)), "{annual}");
    }

    #[test]
    fn annualizing_requires_a_positive_span() {
        let single = [(date(2020, 1, 1), dec!(0.01))];
        assert_eq!(annualized_return(&single, 365), Err(StatsError::NonPositiveSpan(0)));
        assert_eq!(annualized_return(&[], 365), Err(StatsError::EmptyInput("annualized return")));
    }

    #[test]
    fn total_loss_annualizes_to_minus_one() {
        let returns = [(date(2020, 1, 1), dec!(-1)), (date(2022, 1, 1), dec!(0.5))];
        assert_eq!(annualized_return(&returns, 365).unwrap(), dec!(-1));
    }
}
