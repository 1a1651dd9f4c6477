//! Calendar month periods.

use chrono::{Datelike, NaiveDate, Utc};

use crate::github::error::StatsError;

/// Earliest year accepted for a statistics period.
pub const EARLIEST_YEAR: i32 = 2000;

/// A validated calendar month and its inclusive date range.
///
/// # Example
///
/// ```
/// use mergestats::stats::period::MonthPeriod;
///
/// let february = MonthPeriod::new(2024, 2, 2024).expect("valid month");
/// assert_eq!(february.start().to_string(), "2024-02-01");
/// assert_eq!(february.end().to_string(), "2024-02-29");
/// assert_eq!(february.label(), "02/2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthPeriod {
    /// Validates `year` and `month` against `latest_year`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidMonth`] when `month` is outside `1..=12`
    /// and [`StatsError::InvalidYear`] when `year` is outside
    /// `2000..=latest_year`.
    pub fn new(year: i32, month: u32, latest_year: i32) -> Result<Self, StatsError> {
        if !(1..=12).contains(&month) {
            return Err(StatsError::InvalidMonth { month });
        }
        if !(EARLIEST_YEAR..=latest_year).contains(&year) {
            return Err(StatsError::InvalidYear {
                year,
                latest: latest_year,
            });
        }

        let invalid_year = || StatsError::InvalidYear {
            year,
            latest: latest_year,
        };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid_year)?;
        let end = first_of_next_month(year, month)
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid_year)?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Validates against the current UTC year.
    ///
    /// # Errors
    ///
    /// See [`MonthPeriod::new`].
    pub fn for_current_year(year: i32, month: u32) -> Result<Self, StatsError> {
        Self::new(year, month, Utc::now().year())
    }

    /// The year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month (1-based).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// `MM/YYYY`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}
