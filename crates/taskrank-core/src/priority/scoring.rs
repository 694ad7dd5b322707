//! Per-task score functions.
//!
//! Each task gets two axis scores:
//! - Importance rank (1-3) from the `importance` field
//! - Urgency score from due-date proximity, amplified by `priority`
//!
//! Missing or unrecognized inputs always fall back to the lowest value, so
//! these functions are total.

use chrono::{Datelike, NaiveDate};

use super::quadrant::Quadrant;
use crate::task::{Level, Task};

/// Importance at or above this counts as important (medium or high).
pub const IMPORTANT_THRESHOLD: u8 = 2;
/// Urgency at or above this counts as urgent.
pub const URGENT_THRESHOLD: f64 = 5.0;
/// Per-rank urgency boost contributed by `priority`.
pub const PRIORITY_FACTOR: f64 = 0.8;
/// Sort key used for tasks without any due date.
pub const NO_DUE_NUMERIC: u32 = 99_991_231;

const QUADRANT_WEIGHT: f64 = 1000.0;
const URGENCY_WEIGHT: f64 = 50.0;
const IMPORTANCE_WEIGHT: f64 = 30.0;

fn level_rank(level: Option<Level>) -> u8 {
    match level {
        Some(Level::High) => 3,
        Some(Level::Medium) => 2,
        _ => 1,
    }
}

/// Importance rank: high 3, medium 2, anything else 1.
pub fn importance_rank(task: &Task) -> u8 {
    level_rank(task.importance)
}

/// Priority rank: high 3, medium 2, anything else 1.
pub fn priority_rank(task: &Task) -> u8 {
    level_rank(task.priority)
}

/// Due reference date: `end_date` when set, otherwise `date`.
pub fn due_date(task: &Task) -> Option<NaiveDate> {
    task.end_date.or(task.date)
}

/// Whole calendar days from `today` to `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Base urgency by day distance.
///
/// - Overdue: 10
/// - Today: 6
/// - Tomorrow: 5
/// - 2-3 days: 4
/// - 4-7 days: 3
/// - 8-14 days: 2
/// - Later: 1
pub fn base_urgency(diff_days: i64) -> f64 {
    match diff_days {
        d if d < 0 => 10.0,
        0 => 6.0,
        1 => 5.0,
        2..=3 => 4.0,
        4..=7 => 3.0,
        8..=14 => 2.0,
        _ => 1.0,
    }
}

/// Urgency score. Tasks with no due date score 0 regardless of priority.
pub fn urgency_score(task: &Task, today: NaiveDate) -> f64 {
    let Some(due) = due_date(task) else {
        return 0.0;
    };
    base_urgency(days_until(due, today)) + f64::from(priority_rank(task)) * PRIORITY_FACTOR
}

/// Place a task in the matrix from its axis scores.
pub fn classify(importance: u8, urgency: f64) -> Quadrant {
    Quadrant::classify(importance >= IMPORTANT_THRESHOLD, urgency >= URGENT_THRESHOLD)
}

/// Due date as a `YYYYMMDD` integer, or [`NO_DUE_NUMERIC`].
pub fn due_numeric(due: Option<NaiveDate>) -> u32 {
    match due {
        Some(d) => {
            // Years outside 0..=9999 cannot come from a YYYY-MM-DD record.
            let year = d.year().clamp(0, 9999) as u32;
            year * 10_000 + d.month() * 100 + d.day()
        }
        None => NO_DUE_NUMERIC,
    }
}

/// Composite sort key.
///
/// Quadrant dominates, then urgency, then importance; an earlier due date
/// breaks what remains because a smaller `YYYYMMDD` subtracts less.
pub fn composite_score(quadrant: Quadrant, urgency: f64, importance: u8, due: Option<NaiveDate>) -> f64 {
    f64::from(5 - quadrant.number()) * QUADRANT_WEIGHT
        + urgency * URGENCY_WEIGHT
        + f64::from(importance) * IMPORTANCE_WEIGHT
        - f64::from(due_numeric(due))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn level_ranks_default_to_one() {
        let bare = Task::new("1", "bare");
        assert_eq!(importance_rank(&bare), 1);
        assert_eq!(priority_rank(&bare), 1);

        let rich = Task::new("2", "rich")
            .with_importance(Level::High)
            .with_priority(Level::Medium);
        assert_eq!(importance_rank(&rich), 3);
        assert_eq!(priority_rank(&rich), 2);

        let low = Task::new("3", "low").with_importance(Level::Low);
        assert_eq!(importance_rank(&low), 1);
    }

    #[test]
    fn end_date_overrides_date() {
        let task = Task::new("1", "t")
            .with_date(day("2024-06-01"))
            .with_end_date(day("2024-06-20"));
        assert_eq!(due_date(&task), Some(day("2024-06-20")));

        let only_end = Task::new("2", "t").with_end_date(day("2024-06-03"));
        assert_eq!(due_date(&only_end), Some(day("2024-06-03")));
    }

    #[test]
    fn base_urgency_table_boundaries() {
        let cases = [
            (-30, 10.0),
            (-1, 10.0),
            (0, 6.0),
            (1, 5.0),
            (2, 4.0),
            (3, 4.0),
            (4, 3.0),
            (7, 3.0),
            (8, 2.0),
            (14, 2.0),
            (15, 1.0),
            (365, 1.0),
        ];
        for (diff, expected) in cases {
            assert_eq!(base_urgency(diff), expected, "diff_days = {diff}");
        }
    }

    #[test]
    fn days_until_crosses_month_and_year() {
        assert_eq!(days_until(day("2024-07-01"), day("2024-06-30")), 1);
        assert_eq!(days_until(day("2024-01-01"), day("2023-12-31")), 1);
        assert_eq!(days_until(day("2024-06-09"), day("2024-06-10")), -1);
        assert_eq!(days_until(day("2024-03-01"), day("2024-02-28")), 2);
    }

    #[test]
    fn urgency_adds_priority_boost() {
        let today = day("2024-06-10");
        let overdue_high = Task::new("x", "t")
            .with_date(day("2024-06-09"))
            .with_priority(Level::High);
        assert!(approx(urgency_score(&overdue_high, today), 12.4));

        let far_low = Task::new("y", "t").with_date(day("2024-06-25"));
        assert!(approx(urgency_score(&far_low, today), 1.8));
    }

    #[test]
    fn urgency_is_zero_without_due_date_even_with_high_priority() {
        let task = Task::new("z", "t").with_priority(Level::High);
        assert_eq!(urgency_score(&task, day("2024-06-10")), 0.0);
    }

    #[test]
    fn urgent_threshold_is_inclusive() {
        // tomorrow with low priority: 5 + 0.8
        assert_eq!(classify(1, 5.8), Quadrant::Delegate);
        assert_eq!(classify(1, 5.0), Quadrant::Delegate);
        // three days out with low priority: 4 + 0.8
        assert_eq!(classify(2, 4.8), Quadrant::Schedule);
        assert_eq!(classify(2, 5.6), Quadrant::DoFirst);
        assert_eq!(classify(1, 0.0), Quadrant::Eliminate);
    }

    #[test]
    fn due_numeric_encodes_yyyymmdd() {
        assert_eq!(due_numeric(Some(day("2024-06-09"))), 20_240_609);
        assert_eq!(due_numeric(Some(day("2024-12-31"))), 20_241_231);
        assert_eq!(due_numeric(None), 99_991_231);
    }

    #[test]
    fn composite_prefers_earlier_due_date_on_ties() {
        let early = composite_score(Quadrant::Schedule, 3.8, 2, Some(day("2024-06-14")));
        let late = composite_score(Quadrant::Schedule, 3.8, 2, Some(day("2024-06-15")));
        assert!(early > late);
    }

    #[test]
    fn composite_matches_formula() {
        let score = composite_score(Quadrant::DoFirst, 12.4, 3, Some(day("2024-06-09")));
        let expected = 4.0 * 1000.0 + 12.4 * 50.0 + 3.0 * 30.0 - 20_240_609.0;
        assert!(approx(score, expected));
    }
}
