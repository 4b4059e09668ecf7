use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};

/// Accepts `DD/MM/YYYY` or `YYYY-MM-DD`. Used as a clap value parser.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| format!("'{}' is not a date (expected DD/MM/YYYY or YYYY-MM-DD)", s))
}

/// Whole days, UTC, both ends inclusive. Either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, AppError> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(AppError::InvalidDateRange);
            }
        }
        Ok(DateRange { from, to })
    }

    /// `(startTime, endTime)` in epoch seconds; `endTime` is midnight after `to`.
    pub fn to_epoch_bounds(&self) -> (Option<i64>, Option<i64>) {
        let start = self.from.map(midnight);
        let end = self.to.and_then(|d| d.succ_opt()).map(midnight);
        (start, end)
    }

    pub fn describe(&self) -> String {
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.format("%d/%m/%Y").to_string());
        match (fmt(self.from), fmt(self.to)) {
            (Some(f), Some(t)) => format!("from {} to {}", f, t),
            (Some(f), None) => format!("since {}", f),
            (None, Some(t)) => format!("until {}", t),
            (None, None) => "all dates".to_string(),
        }
    }
}

fn midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
