use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a return series is sampled, which fixes the annualization
/// factor for volatility-type statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl SamplingFrequency {
    /// Periods per year; daily data assumes a 252-day trading year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            SamplingFrequency::Daily => 252,
            SamplingFrequency::Weekly => 52,
            SamplingFrequency::Monthly => 12,
            SamplingFrequency::Quarterly => 4,
            SamplingFrequency::SemiAnnual => 2,
            SamplingFrequency::Annual => 1,
        }
    }

    /// Infers the frequency from the median gap between consecutive dates.
    ///
    /// Dates must be sorted. Fewer than two dates give no gap to measure and
    /// are treated as daily.
    pub fn infer(dates: &[NaiveDate]) -> Self {
        let mut gaps: Vec<i64> = dates.windows(2).map(|w| (w[1] - w[0]).num_days()).collect();
        if gaps.is_empty() {
            return SamplingFrequency::Daily;
        }
        gaps.sort_unstable();
        let median_gap = gaps[gaps.len() / 2];

        let frequency = match median_gap {
            ..=4 => SamplingFrequency::Daily,
            5..=10 => SamplingFrequency::Weekly,
            11..=45 => SamplingFrequency::Monthly,
            46..=135 => SamplingFrequency::Quarterly,
            136..=270 => SamplingFrequency::SemiAnnual,
            _ => SamplingFrequency::Annual,
        };
        tracing::debug!(median_gap, ?frequency, "Inferred sampling frequency.");
        frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_data_is_daily_despite_weekend_gaps() {
        let dates: Vec<NaiveDate> = date(2024, 1, 1)
            .iter_days()
            .take(60)
            .filter(|d| chrono::Datelike::weekday(d).num_days_from_monday() < 5)
            .collect();
        assert_eq!(SamplingFrequency::infer(&dates), SamplingFrequency::Daily);
    }

    #[test]
    fn month_ends_are_monthly() {
        let dates = [date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31), date(2024, 4, 30)];
        assert_eq!(SamplingFrequency::infer(&dates), SamplingFrequency::Monthly);
        assert_eq!(SamplingFrequency::infer(&dates).periods_per_year(), 12);
    }

    #[test]
    fn sparse_series() {
        assert_eq!(SamplingFrequency::infer(&[date(2024, 1, 1)]), SamplingFrequency::Daily);
        let weekly = [date(2024, 1, 5), date(2024, 1, 12), date(2024, 1, 19)];
        assert_eq!(SamplingFrequency::infer(&weekly), SamplingFrequency::Weekly);
        let quarterly = [date(2023, 3, 31), date(2023, 6, 30), date(2023, 9, 30)];
        assert_eq!(SamplingFrequency::infer(&quarterly), SamplingFrequency::Quarterly);
        let annual = [date(2020, 12, 31), date(2021, 12, 31), date(2022, 12, 31)];
        assert_eq!(SamplingFrequency::infer(&annual), SamplingFrequency::Annual);
    }
}
