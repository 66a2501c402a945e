use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reporting periods a performance summary is computed over.
///
/// The declaration order is the order in which the standard summary emits
/// its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodType {
    Day1,
    Day2,
    Day3,
    WeekToDate,
    MonthToDate,
    QuarterToDate,
    YearToDate,
    OneYear,
    TwoYear,
    ThreeYear,
    FiveYear,
    TenYear,
    InceptionToDate,
}

impl PeriodType {
    /// Every standard period, in summary order.
    pub const STANDARD: [PeriodType; 13] = [
        PeriodType::Day1,
        PeriodType::Day2,
        PeriodType::Day3,
        PeriodType::WeekToDate,
        PeriodType::MonthToDate,
        PeriodType::QuarterToDate,
        PeriodType::YearToDate,
        PeriodType::OneYear,
        PeriodType::TwoYear,
        PeriodType::ThreeYear,
        PeriodType::FiveYear,
        PeriodType::TenYear,
        PeriodType::InceptionToDate,
    ];

    /// Short, canonical label used for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day1 => "Day1",
            PeriodType::Day2 => "Day2",
            PeriodType::Day3 => "Day3",
            PeriodType::WeekToDate => "WTD",
            PeriodType::MonthToDate => "MTD",
            PeriodType::QuarterToDate => "QTD",
            PeriodType::YearToDate => "YTD",
            PeriodType::OneYear => "OneYear",
            PeriodType::TwoYear => "TwoYear",
            PeriodType::ThreeYear => "ThreeYear",
            PeriodType::FiveYear => "FiveYear",
            PeriodType::TenYear => "TenYear",
            PeriodType::InceptionToDate => "ITD",
        }
    }

    /// Number of years covered by a trailing period, `None` for the others.
    pub fn trailing_years(&self) -> Option<u32> {
        match self {
            PeriodType::OneYear => Some(1),
            PeriodType::TwoYear => Some(2),
            PeriodType::ThreeYear => Some(3),
            PeriodType::FiveYear => Some(5),
            PeriodType::TenYear => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = CoreError;

    /// Accepts the canonical label as well as the long variant name,
    /// case-insensitively. Anything else is a programming error upstream.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let period = match s.trim().to_ascii_lowercase().as_str() {
            "day1" => PeriodType::Day1,
            "day2" => PeriodType::Day2,
            "day3" => PeriodType::Day3,
            "wtd" | "weektodate" => PeriodType::WeekToDate,
            "mtd" | "monthtodate" => PeriodType::MonthToDate,
            "qtd" | "quartertodate" => PeriodType::QuarterToDate,
            "ytd" | "yeartodate" => PeriodType::YearToDate,
            "oneyear" => PeriodType::OneYear,
            "twoyear" => PeriodType::TwoYear,
            "threeyear" => PeriodType::ThreeYear,
            "fiveyear" => PeriodType::FiveYear,
            "tenyear" => PeriodType::TenYear,
            "itd" | "inceptiontodate" => PeriodType::InceptionToDate,
            _ => return Err(CoreError::UnknownPeriodTag(s.to_string())),
        };
        Ok(period)
    }
}

impl TryFrom<String> for PeriodType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodType> for String {
    fn from(period: PeriodType) -> Self {
        period.as_str().to_string()
    }
}

/// The step size of a self-aligning calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
            Periodicity::Quarterly => "quarterly",
            Periodicity::SemiAnnually => "semi-annually",
            Periodicity::Annually => "annually",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_order_matches_declaration_order() {
        let mut sorted = PeriodType::STANDARD;
        sorted.sort();
        assert_eq!(sorted, PeriodType::STANDARD);
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("WTD".parse::<PeriodType>().unwrap(), PeriodType::WeekToDate);
        assert_eq!("yearToDate".parse::<PeriodType>().unwrap(), PeriodType::YearToDate);
        assert_eq!(" itd ".parse::<PeriodType>().unwrap(), PeriodType::InceptionToDate);
        for period in PeriodType::STANDARD {
            assert_eq!(period.to_string().parse::<PeriodType>().unwrap(), period);
        }
    }

    #[test]
    fn unknown_tag_fails_fast() {
        let err = "SevenYear".parse::<PeriodType>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownPeriodTag(tag) if tag == "SevenYear"));
    }

    #[test]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&PeriodType::QuarterToDate).unwrap();
        assert_eq!(json, "\"QTD\"");
        let back: PeriodType = serde_json::from_str("\"FiveYear\"").unwrap();
        assert_eq!(back, PeriodType::FiveYear);
        assert!(serde_json::from_str::<PeriodType>("\"Fortnight\"").is_err());
    }

    #[test]
    fn trailing_years_only_for_trailing_periods() {
        assert_eq!(PeriodType::TenYear.trailing_years(), Some(10));
        assert_eq!(PeriodType::YearToDate.trailing_years(), None);
    }
}
