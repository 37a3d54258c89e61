//! Month arithmetic on calendar dates.
//!
//! Every "month" comparison in the plan rules works on year+month pairs,
//! so dates are normalized to the 1st of their month before they are shifted
//! or compared. This avoids day-of-month drift when stepping across months
//! of different lengths.

use crate::error::{PlanError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Returns the first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Stays inside the same month, so this cannot overflow.
    date - Days::new(u64::from(date.day0()))
}

/// Shifts the month start of `date` by `months` (negative moves backwards).
///
/// The result is always the 1st of a month.
pub fn add_months(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let start = month_start(date);
    let shifted = if months >= 0 {
        start.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or(PlanError::DateOutOfRange(date))
}

/// Number of whole months from the month of `from` to the month of `to`.
///
/// Days are ignored: `2025-01-31 -> 2025-02-01` is one month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2025, 6, 15)), date(2025, 6, 1));
        assert_eq!(month_start(date(2025, 6, 1)), date(2025, 6, 1));
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
    }

    #[test]
    fn test_add_months_crosses_year() {
        assert_eq!(add_months(date(2025, 11, 30), 3).unwrap(), date(2026, 2, 1));
        assert_eq!(add_months(date(2025, 8, 1), -11).unwrap(), date(2024, 9, 1));
        assert_eq!(add_months(date(2025, 1, 31), 0).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(matches!(
            add_months(NaiveDate::MAX, 1),
            Err(PlanError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_months_between_ignores_days() {
        assert_eq!(months_between(date(2025, 1, 31), date(2025, 2, 1)), 1);
        assert_eq!(months_between(date(2025, 7, 1), date(2026, 6, 30)), 11);
        assert_eq!(months_between(date(2025, 5, 15), date(2025, 2, 1)), -3);
    }
}
