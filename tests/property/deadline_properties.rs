// Property-based tests for the weekly deadline calculation
// Instants are drawn from 2015-2035 so many DST transitions are covered

use auction_countdown::models::countdown::CountdownParts;
use auction_countdown::services::deadline::{DeadlineCalculator, DeadlineSource};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use proptest::prelude::*;

#[path = "../fixtures/mod.rs"]
mod fixtures;

const RANGE_START_MS: i64 = 1_420_070_400_000; // 2015-01-01T00:00:00Z
const RANGE_END_MS: i64 = 2_082_758_400_000; // 2036-01-01T00:00:00Z

fn instant(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

fn calculator() -> DeadlineCalculator {
    DeadlineCalculator::auction_close().unwrap()
}

/// Second Sunday of March and first Sunday of November.
fn transition_sundays(year: i32) -> [NaiveDate; 2] {
    [
        NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2).unwrap(),
        NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1).unwrap(),
    ]
}

proptest! {
    /// Property: the deadline is always strictly after now
    #[test]
    fn prop_deadline_is_in_the_future(ms in RANGE_START_MS..RANGE_END_MS) {
        let now = instant(ms);
        let deadline = calculator().next_deadline(now).unwrap();
        prop_assert!(deadline > now);
        prop_assert!(CountdownParts::from_duration(deadline - now).is_some());
    }

    /// Property: never more than one week (plus a fall-back hour) away
    #[test]
    fn prop_deadline_within_a_week(ms in RANGE_START_MS..RANGE_END_MS) {
        let now = instant(ms);
        let deadline = calculator().next_deadline(now).unwrap();
        prop_assert!(deadline - now <= Duration::days(7) + Duration::hours(1));
    }

    /// Property: every deadline reads as Sunday 18:00:00 in New York
    #[test]
    fn prop_deadline_reads_sunday_six_pm(ms in RANGE_START_MS..RANGE_END_MS) {
        let calc = calculator();
        let deadline = calc.next_deadline(instant(ms)).unwrap();
        let local = calc.reader().read(deadline);
        prop_assert_eq!(local.day_of_week, 0);
        prop_assert!(local.is_top_of_hour(18));
    }

    /// Property: once a deadline passes, the next is exactly one civil week later
    #[test]
    fn prop_weekly_periodicity(ms in RANGE_START_MS..RANGE_END_MS) {
        let calc = calculator();
        let first = calc.next_deadline(instant(ms)).unwrap();
        let second = calc.next_deadline(first + Duration::milliseconds(1)).unwrap();
        prop_assert_eq!(calc.deadline_after(first).unwrap(), second);

        let first_local = calc.reader().read(first);
        let second_local = calc.reader().read(second);
        prop_assert_eq!(
            second_local.date().unwrap(),
            first_local.date().unwrap() + Duration::days(7)
        );
        prop_assert!(second_local.is_top_of_hour(18));

        let raw = second - first;
        prop_assert!(
            raw == Duration::days(7)
                || raw == Duration::days(7) - Duration::hours(1)
                || raw == Duration::days(7) + Duration::hours(1)
        );
    }

    /// Property: a transition Sunday as target still resolves to 18:00 local
    #[test]
    fn prop_transition_sunday_resolves_to_six_pm(
        year in 2016..2035i32,
        which in 0..2usize,
        days_before in 0..7i64,
        hour in 0..24u32,
    ) {
        let calc = calculator();
        let sunday = transition_sundays(year)[which];
        let date = sunday - Duration::days(days_before);
        // Sunday itself only targets today before 18:00; 02:00-02:59 may not exist.
        let hour = if days_before == 0 { hour % 18 } else { hour };
        prop_assume!(hour != 2);
        let now = fixtures::new_york(date.year(), date.month(), date.day(), hour, 30, 0);

        let deadline = calc.next_deadline(now).unwrap();
        let local = calc.reader().read(deadline);
        prop_assert_eq!(local.date().unwrap(), sunday);
        prop_assert!(local.is_top_of_hour(18));
    }
}

#[test]
fn test_transition_sundays_are_sundays() {
    for year in 2016..2035 {
        for date in transition_sundays(year) {
            assert_eq!(date.weekday(), Weekday::Sun);
        }
    }
}

#[test]
fn test_periodicity_across_spring_forward() {
    let calc = calculator();
    let before = fixtures::utc(2025, 3, 2, 23, 0, 0);
    let after = calc.deadline_after(before).unwrap();
    assert_eq!(after, fixtures::utc(2025, 3, 9, 22, 0, 0));
    assert_eq!(after - before, Duration::days(7) - Duration::hours(1));
}

#[test]
fn test_periodicity_across_fall_back() {
    let calc = calculator();
    let before = fixtures::utc(2025, 10, 26, 22, 0, 0);
    let after = calc.deadline_after(before).unwrap();
    assert_eq!(after, fixtures::utc(2025, 11, 2, 23, 0, 0));
    assert_eq!(after - before, Duration::days(7) + Duration::hours(1));
}

#[test]
fn test_rollover_is_hour_granular() {
    // 18:00:00 exactly already targets the following Sunday.
    let calc = calculator();
    let close = fixtures::new_york(2025, 6, 1, 18, 0, 0);
    assert_eq!(calc.next_deadline(close).unwrap(), fixtures::new_york(2025, 6, 8, 18, 0, 0));
    assert_eq!(
        calc.next_deadline(close - Duration::seconds(1)).unwrap(),
        close
    );
}
