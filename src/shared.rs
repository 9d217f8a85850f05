//! Shared newtypes used across resource modules.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ─── YearMonth ───────────────────────────────────────────────────────────────

/// A calendar month, written `YYYY-MM` on the wire (e.g. `"2025-08"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid month {0:?}, expected YYYY-MM")]
pub struct YearMonthError(String);

impl YearMonth {
    /// `None` unless `month` is 1..=12 and `year` is 0..=9999.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl From<YearMonth> for crate::http::ParamValue {
    fn from(ym: YearMonth) -> Self {
        crate::http::ParamValue::String(ym.to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || YearMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        let year = year.parse().map_err(|_| err())?;
        let month = month.parse().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads() {
        assert_eq!(YearMonth::new(2025, 8).unwrap().to_string(), "2025-08");
    }

    #[test]
    fn test_parse() {
        let ym: YearMonth = "2025-09".parse().unwrap();
        assert_eq!((ym.year(), ym.month()), (2025, 9));
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-9".parse::<YearMonth>().is_err());
        assert!("2025/09".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let ym = YearMonth::from(date);
        assert_eq!(ym.to_string(), "2024-02");
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2025, 8).unwrap();
        assert_eq!(serde_json::to_string(&ym).unwrap(), r#""2025-08""#);
        let back: YearMonth = serde_json::from_str(r#""2025-08""#).unwrap();
        assert_eq!(back, ym);
    }
}
