//! Wall-clock boundary.
//!
//! Business logic never reads the system time directly; it receives `today`
//! or `current_year` from a `Clock`.

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;

    /// Returns the current calendar year.
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
        assert_eq!(clock.current_year(), 2024);
    }
}
