use crate::error::CalendarError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walks `count` business days away from `date`, backwards when negative.
///
/// Weekends are skipped, so walking one business day back from a Monday (or a
/// Saturday) lands on the preceding Friday. A `count` of zero returns `date`
/// unchanged even when it falls on a weekend.
pub fn add_business_days(date: NaiveDate, count: i32) -> Result<NaiveDate, CalendarError> {
    let forward = count >= 0;
    let mut current = date;
    for _ in 0..count.unsigned_abs() {
        loop {
            let next = if forward {
                current.checked_add_days(Days::new(1))
            } else {
                current.checked_sub_days(Days::new(1))
            };
            current = next.ok_or_else(|| {
                CalendarError::out_of_range(format!("add {count} business days"), date)
            })?;
            if is_business_day(current) {
                break;
            }
        }
    }
    Ok(current)
}

/// Number of business days in the closed interval `[start, end]`; zero when
/// the interval is inverted.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }
    let total_days = (end - start).num_days() + 1;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    // The leftover days start on the same weekday as `start`.
    let mut weekday = start.weekday();
    for _ in 0..total_days % 7 {
        if !matches!(weekday, Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        weekday = weekday.succ();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn walks_back_over_weekends() {
        // 2023-07-03 is a Monday.
        assert_eq!(add_business_days(date(2023, 7, 3), -1).unwrap(), date(2023, 6, 30));
        assert_eq!(add_business_days(date(2023, 7, 3), -3).unwrap(), date(2023, 6, 28));
        // From a Saturday the first step lands on Friday.
        assert_eq!(add_business_days(date(2023, 7, 1), -1).unwrap(), date(2023, 6, 30));
        assert_eq!(add_business_days(date(2023, 6, 30), -2).unwrap(), date(2023, 6, 28));
    }

    #[test]
    fn walks_forward_and_zero_is_identity() {
        assert_eq!(add_business_days(date(2023, 6, 30), 1).unwrap(), date(2023, 7, 3));
        assert_eq!(add_business_days(date(2023, 7, 1), 0).unwrap(), date(2023, 7, 1));
    }

    #[test]
    fn reports_out_of_range() {
        assert!(add_business_days(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn counts_business_days_in_closed_interval() {
        // Monday to Sunday of one week.
        assert_eq!(business_days_between(date(2024, 1, 1), date(2024, 1, 7)), 5);
        // Saturday and Sunday only.
        assert_eq!(business_days_between(date(2024, 1, 6), date(2024, 1, 7)), 0);
        // Friday to the following Monday.
        assert_eq!(business_days_between(date(2024, 1, 5), date(2024, 1, 8)), 2);
        assert_eq!(business_days_between(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(business_days_between(date(2024, 1, 2), date(2024, 1, 1)), 0);
        // All of 2024: 366 days, 262 weekdays.
        assert_eq!(business_days_between(date(2024, 1, 1), date(2024, 12, 31)), 262);
    }

    #[test]
    fn count_agrees_with_day_by_day_scan() {
        let start = date(2023, 11, 15);
        for span in 0..40 {
            let end = start + chrono::Duration::days(span);
            let scanned = start
                .iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| is_business_day(*d))
                .count() as i64;
            assert_eq!(business_days_between(start, end), scanned, "span {span}");
        }
    }
}
