//! Calendar quarters used for periodic revenue declaration.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::QuarterError;

/// One of the four three-month declaration windows of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quarter {
    /// January to March.
    Q1,
    /// April to June.
    Q2,
    /// July to September.
    Q3,
    /// October to December.
    Q4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Returns the 1-based quarter number.
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    /// Returns the declaration label ("1er trimestre", ...).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Q1 => "1er trimestre",
            Self::Q2 => "2ème trimestre",
            Self::Q3 => "3ème trimestre",
            Self::Q4 => "4ème trimestre",
        }
    }

    /// Returns the quarter a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        match date.month0() / 3 {
            0 => Self::Q1,
            1 => Self::Q2,
            2 => Self::Q3,
            _ => Self::Q4,
        }
    }

    /// Returns the `[start, end)` window of this quarter in `year`.
    ///
    /// The end is the first day of the following quarter, which for Q4 is
    /// January 1st of the next year. `None` only at the edges of the
    /// representable calendar.
    #[must_use]
    pub fn bounds(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start_month = u32::from(self.index()) * 3 - 2;
        let start = NaiveDate::from_ymd_opt(year, start_month, 1)?;
        let end = match self {
            Self::Q4 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
            _ => NaiveDate::from_ymd_opt(year, start_month + 3, 1)?,
        };
        Some((start, end))
    }

    /// Returns true if `date` falls in this quarter of `year`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate, year: i32) -> bool {
        self.bounds(year)
            .is_some_and(|(start, end)| is_date_between(Some(date), start, end))
    }
}

impl TryFrom<u8> for Quarter {
    type Error = QuarterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            other => Err(QuarterError::OutOfRange(other)),
        }
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.index()
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.index())
    }
}

/// Returns true if `date` is present and `min <= date < max`.
#[must_use]
pub fn is_date_between(date: Option<NaiveDate>, min: NaiveDate, max: NaiveDate) -> bool {
    date.is_some_and(|date| min <= date && date < max)
}

/// Returns true if `date` is present and falls in `quarter` of `year`.
///
/// A missing date is never in any quarter.
#[must_use]
pub fn is_in_quarter(date: Option<NaiveDate>, quarter: Quarter, year: i32) -> bool {
    date.is_some_and(|date| quarter.contains(date, year))
}
