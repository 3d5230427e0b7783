//! Spending window representation
//!
//! The remaining budget is spread over the days left in the current window.
//! The window ends either on the user's pay day or at the end of the calendar
//! month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// How the number of remaining days is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DaysMode {
    /// Count down to the pay day (default)
    #[default]
    #[serde(rename = "payday", alias = "pay-day")]
    PayDay,
    /// Days left in the calendar month of `today`
    MonthEnd,
}

impl DaysMode {
    /// Days the remaining budget has to last, never negative
    pub fn days_remaining(&self, today: NaiveDate, pay_day: NaiveDate) -> u32 {
        match self {
            Self::PayDay => days_until(today, pay_day),
            Self::MonthEnd => days_left_in_month(today),
        }
    }
}

impl fmt::Display for DaysMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayDay => write!(f, "payday"),
            Self::MonthEnd => write!(f, "month-end"),
        }
    }
}

impl FromStr for DaysMode {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "payday" | "pay-day" | "pay_day" => Ok(Self::PayDay),
            "month-end" | "monthend" | "month_end" | "month" => Ok(Self::MonthEnd),
            other => Err(BudgetError::Validation(format!(
                "Unknown days mode '{}' (expected 'payday' or 'month-end')",
                other
            ))),
        }
    }
}

/// Whole days from `today` to `pay_day`; zero once pay day has passed
pub fn days_until(today: NaiveDate, pay_day: NaiveDate) -> u32 {
    let days = (pay_day - today).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
    let next_first = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_first {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable at the very end of chrono's date range
        None => 31,
    }
}

/// Days after `date` until the end of its month (0 on the last day)
pub fn days_left_in_month(date: NaiveDate) -> u32 {
    days_in_month(date) - date.day()
}

/// Parse a date using the configured format, falling back to ISO-8601
pub fn parse_date(s: &str, format: &str) -> Result<NaiveDate, BudgetError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid date '{}' (expected format {})",
                s, format
            ))
        })
}
