//! Time source for committed transactions
//!
//! The ledger stamps each transaction with the current time when it commits.
//! Reading the time goes through the `Clock` trait so tests, benches and
//! scripted sessions can supply a fixed instant.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current timestamp
pub trait Clock {
    /// The current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        FixedClock(instant)
    }

    /// Build a fixed clock from calendar fields
    ///
    /// Returns `None` if the fields do not form a valid date and time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_constant() {
        let clock = FixedClock::at(2024, 3, 7, 21, 5, 3).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(
            clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-07 21:05:03"
        );
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_fields() {
        assert!(FixedClock::at(2024, 2, 30, 0, 0, 0).is_none());
        assert!(FixedClock::at(2024, 1, 1, 24, 0, 0).is_none());
    }

    #[test]
    fn test_boxed_clock_delegates() {
        let fixed = FixedClock::at(2024, 1, 1, 0, 0, 0).unwrap();
        let boxed: Box<dyn Clock> = Box::new(fixed);
        assert_eq!(boxed.now(), fixed.now());
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
