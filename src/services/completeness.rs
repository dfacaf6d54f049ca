//! Classification of buckets as complete or still accumulating.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::calendar::{creator_quarter, month_start, next_month};
use crate::models::ReportPeriod;

/// Whether a bucket lies fully in the past relative to `now`.
///
/// `now` is always injected by the caller; this module never reads a
/// clock. Partial buckets still show up in reports, completeness is a
/// flag on the output rather than a filter.
///
/// The boundary rules differ per frequency:
/// - a day is complete once `now` is on a later date;
/// - a week is complete from midnight of its closing Sunday, so the
///   closing day itself already counts;
/// - a month is complete once the first instant of the following month
///   has been reached;
/// - a quarter is complete once `now` falls in a later creator-calendar
///   quarter.
pub fn is_complete(period: ReportPeriod, now: NaiveDateTime) -> bool {
    match period {
        ReportPeriod::Day(date) => date < now.date(),
        ReportPeriod::Week { start } => {
            let closing_day = start + Duration::days(6);
            closing_day.and_time(NaiveTime::MIN) < now
        }
        ReportPeriod::Month { year, month } => {
            let (next_year, next) = next_month(year, month);
            month_start(next_year, next).and_time(NaiveTime::MIN) <= now
        }
        ReportPeriod::Quarter { year, quarter } => (year, quarter) < creator_quarter(now.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        d(year, month, day).and_hms_opt(hour, min, sec).unwrap()
    }

    #[test]
    fn test_day_complete_only_once_the_date_has_passed() {
        let now = dt(2024, 3, 15, 12, 0, 0);
        assert!(is_complete(ReportPeriod::Day(d(2024, 3, 14)), now));
        assert!(!is_complete(ReportPeriod::Day(d(2024, 3, 15)), now));
        assert!(!is_complete(ReportPeriod::Day(d(2024, 3, 16)), now));
    }

    #[test]
    fn test_day_ignores_time_of_day() {
        let late = dt(2024, 3, 15, 23, 59, 59);
        assert!(!is_complete(ReportPeriod::Day(d(2024, 3, 15)), late));
    }

    #[test]
    fn test_week_flips_at_closing_sunday_midnight() {
        // Week of Monday 2024-03-11 closes on Sunday 2024-03-17
        let week = ReportPeriod::Week {
            start: d(2024, 3, 11),
        };

        assert!(!is_complete(week, dt(2024, 3, 16, 23, 59, 59)));
        assert!(!is_complete(week, dt(2024, 3, 17, 0, 0, 0)));
        assert!(is_complete(week, dt(2024, 3, 17, 0, 0, 1)));
        assert!(is_complete(week, dt(2024, 3, 18, 0, 0, 0)));
    }

    #[test]
    fn test_month_completes_on_the_first_of_the_next_month() {
        let january = ReportPeriod::Month {
            year: 2024,
            month: 1,
        };

        assert!(!is_complete(january, dt(2024, 1, 31, 23, 59, 59)));
        assert!(is_complete(january, dt(2024, 2, 1, 0, 0, 0)));
    }

    #[test]
    fn test_month_december_rolls_into_next_year() {
        let december = ReportPeriod::Month {
            year: 2023,
            month: 12,
        };

        assert!(!is_complete(december, dt(2023, 12, 31, 23, 0, 0)));
        assert!(is_complete(december, dt(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_quarter_stays_open_through_january() {
        let q4 = ReportPeriod::Quarter {
            year: 2023,
            quarter: 4,
        };

        // January 2024 still belongs to Q4 2023
        assert!(!is_complete(q4, dt(2024, 1, 15, 12, 0, 0)));
        assert!(is_complete(q4, dt(2024, 2, 1, 0, 0, 0)));
    }

    #[test]
    fn test_quarter_boundary_at_creator_calendar_edges() {
        let q1 = ReportPeriod::Quarter {
            year: 2024,
            quarter: 1,
        };

        assert!(!is_complete(q1, dt(2024, 4, 30, 23, 59, 59)));
        assert!(is_complete(q1, dt(2024, 5, 1, 0, 0, 0)));
    }
}
