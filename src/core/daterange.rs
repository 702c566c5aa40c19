//! Date-range derivation and week navigation.
//!
//! Ranges never start from user input directly: they are derived from a
//! mode and an anchor day, and navigated in whole weeks bounded by the
//! first day of the previous month and the last day of the current one.

use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use crate::models::{DateColumn, DateRange, RangeMode};
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Derive the active range from a mode and its anchor day.
///
/// - daily: the anchor day only
/// - weekly: Monday to Sunday of the anchor's week
/// - monthly: first to last day of the anchor's month
pub fn compute(mode: RangeMode, anchor: NaiveDate) -> DateRange {
    match mode {
        RangeMode::Daily => DateRange {
            mode,
            start: anchor,
            end: anchor,
        },
        RangeMode::Weekly => {
            let monday = anchor - Days::new(anchor.weekday().num_days_from_monday() as u64);
            DateRange {
                mode,
                start: monday,
                end: monday + Days::new(6),
            }
        }
        RangeMode::Monthly => DateRange {
            mode,
            start: first_day_of_month(anchor.year(), anchor.month()),
            end: last_day_of_month(anchor.year(), anchor.month()),
        },
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Move one week back. The earliest reachable start is the first day of
/// the month before `today`'s month; a shift past it clamps to that day.
pub fn prev_week(range: &DateRange, today: NaiveDate) -> AppResult<DateRange> {
    let (py, pm) = previous_month(today.year(), today.month());
    let floor = first_day_of_month(py, pm);

    if range.start <= floor {
        return Err(AppError::RangeBoundary(format!(
            "Already at the earliest week (starting {})",
            datekey::to_iso(floor)
        )));
    }

    let candidate = range.start - Days::new(7);
    let start = if candidate < floor { floor } else { candidate };
    Ok(DateRange {
        mode: range.mode,
        start,
        end: start + Days::new(6),
    })
}

/// Move one week forward, bounded by the end of `today`'s month. A final
/// week that would overflow the month is truncated at the month boundary.
pub fn next_week(range: &DateRange, today: NaiveDate) -> AppResult<DateRange> {
    let ceiling = last_day_of_month(today.year(), today.month());

    let start = range.start + Days::new(7);
    if start > ceiling {
        return Err(AppError::RangeBoundary(format!(
            "Already at the last week of the month (ending {})",
            datekey::to_iso(ceiling)
        )));
    }

    let mut end = start + Days::new(6);
    if end > ceiling {
        end = ceiling;
    }
    Ok(DateRange {
        mode: range.mode,
        start,
        end,
    })
}

/// One column per day of the range, in order; weekly mode drops weekends.
pub fn columns(range: &DateRange) -> Vec<DateColumn> {
    let mut out = Vec::new();
    let mut d = range.start;

    while d <= range.end {
        let weekend = matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        if !(range.mode == RangeMode::Weekly && weekend) {
            out.push(DateColumn {
                date: d,
                label: datekey::to_label(d),
                weekend,
            });
        }
        d = d.succ_opt().unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn daily_range_is_the_anchor_day() {
        let r = compute(RangeMode::Daily, d(2025, 9, 10));
        assert_eq!(r.start, d(2025, 9, 10));
        assert_eq!(r.end, d(2025, 9, 10));
    }

    #[test]
    fn weekly_range_from_wednesday_runs_monday_to_sunday() {
        // 2025-09-10 is a Wednesday
        let r = compute(RangeMode::Weekly, d(2025, 9, 10));
        assert_eq!(r.start, d(2025, 9, 8));
        assert_eq!(r.end, d(2025, 9, 14));
    }

    #[test]
    fn weekly_range_from_sunday_maps_back_to_its_monday() {
        // 2025-09-14 is a Sunday
        let r = compute(RangeMode::Weekly, d(2025, 9, 14));
        assert_eq!(r.start, d(2025, 9, 8));
        assert_eq!(r.end, d(2025, 9, 14));
    }

    #[test]
    fn monthly_range_covers_the_whole_month() {
        let r = compute(RangeMode::Monthly, d(2025, 2, 14));
        assert_eq!(r.start, d(2025, 2, 1));
        assert_eq!(r.end, d(2025, 2, 28));
    }

    #[test]
    fn prev_week_shifts_back_exactly_seven_days() {
        let today = d(2025, 9, 10);
        let r = compute(RangeMode::Weekly, today);
        let prev = prev_week(&r, today).unwrap();
        assert_eq!(prev.start, d(2025, 9, 1));
        assert_eq!(prev.end, d(2025, 9, 7));
    }

    #[test]
    fn prev_week_clamps_to_first_of_previous_month() {
        let today = d(2025, 9, 3);
        // week of Sep 1..7; one step back would land on Aug 25, fine;
        // two steps back would pass Aug 1 only from Aug 4, so force it:
        let r = DateRange {
            mode: RangeMode::Weekly,
            start: d(2025, 8, 4),
            end: d(2025, 8, 10),
        };
        let prev = prev_week(&r, today).unwrap();
        assert_eq!(prev.start, d(2025, 8, 1));
        assert_eq!(prev.end, d(2025, 8, 7));
    }

    #[test]
    fn prev_week_refuses_past_the_floor() {
        let today = d(2025, 9, 3);
        let r = DateRange {
            mode: RangeMode::Weekly,
            start: d(2025, 8, 1),
            end: d(2025, 8, 7),
        };
        assert!(prev_week(&r, today).is_err());
    }

    #[test]
    fn next_week_truncates_the_final_partial_week() {
        let today = d(2025, 9, 10);
        let r = DateRange {
            mode: RangeMode::Weekly,
            start: d(2025, 9, 22),
            end: d(2025, 9, 28),
        };
        let next = next_week(&r, today).unwrap();
        assert_eq!(next.start, d(2025, 9, 29));
        assert_eq!(next.end, d(2025, 9, 30));
    }

    #[test]
    fn next_week_refuses_past_the_end_of_the_month() {
        let today = d(2025, 9, 10);
        let r = DateRange {
            mode: RangeMode::Weekly,
            start: d(2025, 9, 29),
            end: d(2025, 9, 30),
        };
        assert!(next_week(&r, today).is_err());
    }

    #[test]
    fn next_then_prev_returns_to_the_original_week() {
        let today = d(2025, 9, 10);
        let r = compute(RangeMode::Weekly, today);
        let forward = next_week(&r, today).unwrap();
        let back = prev_week(&forward, today).unwrap();
        assert_eq!(back.start, r.start);
        assert_eq!(back.end, r.end);
    }

    #[test]
    fn columns_are_strictly_increasing_and_gap_free() {
        let r = compute(RangeMode::Monthly, d(2025, 9, 10));
        let cols = columns(&r);
        assert_eq!(cols.len(), 30);
        for pair in cols.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn weekly_columns_exclude_weekends() {
        let r = compute(RangeMode::Weekly, d(2025, 9, 10));
        let cols = columns(&r);
        assert_eq!(cols.len(), 5);
        assert!(cols.iter().all(|c| !c.weekend));
        assert_eq!(cols[0].date, d(2025, 9, 8));
        assert_eq!(cols[4].date, d(2025, 9, 12));
    }

    #[test]
    fn monthly_columns_keep_weekends_flagged() {
        let r = compute(RangeMode::Monthly, d(2025, 9, 10));
        let cols = columns(&r);
        let weekend_days = cols.iter().filter(|c| c.weekend).count();
        assert_eq!(weekend_days, 8);
    }
}
