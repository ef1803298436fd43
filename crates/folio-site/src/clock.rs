//! Date source for the year and "last updated" stamps.

use chrono::{Datelike, Local, NaiveDate};

/// Supplies today's date to the emitter.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Panics if the date is invalid.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock::ymd(2024, 2, 29);

        assert_eq!(clock.year(), 2024);
        assert_eq!(clock.today().to_string(), "2024-02-29");
    }
}
