//! Year-month period type.

use std::fmt;

use chrono::Datelike;
use derive_more::Into;
use serde::{Deserialize, Serialize};

use crate::Date;

/// A calendar month, stored as the first day of that month.
///
/// Monthly tables carry their index as a polars `Date` column holding
/// `Period::start()` values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into, Serialize, Deserialize,
)]
pub struct Period(Date);

impl Period {
    /// Create a period from a year and a month (1-12).
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        Date::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The period containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// First day of the month.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.0
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Whether `date` is a valid period index value (first of a month).
    #[must_use]
    pub fn is_month_start(date: Date) -> bool {
        date.day() == 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl From<Date> for Period {
    fn from(date: Date) -> Self {
        Self::containing(date)
    }
}
