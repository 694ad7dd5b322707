//! Integration tests for task ranking.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use taskrank_core::{group, rank, rank_iso, Level, Quadrant, Task};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn scenario() -> (Task, Task, Task) {
    let x = Task::new("X", "Overdue essay")
        .with_date(day("2024-06-09"))
        .with_priority(Level::High)
        .with_importance(Level::High);
    let y = Task::new("Y", "Term project")
        .with_date(day("2024-06-25"))
        .with_priority(Level::Low)
        .with_importance(Level::High);
    let z = Task::new("Z", "Tidy notes")
        .with_importance(Level::Low)
        .with_priority(Level::Low);
    (x, y, z)
}

#[test]
fn test_scenarios_a_through_d() {
    let (x, y, z) = scenario();
    let tasks = vec![x.clone(), y.clone(), z.clone()];
    let ranked = rank(&tasks, Some(day("2024-06-10")));

    // A
    assert_eq!(ranked[0].task, &x);
    assert_eq!(ranked[0].quadrant, Quadrant::DoFirst);
    assert!((ranked[0].urgency - 12.4).abs() < 1e-9);
    // B
    assert_eq!(ranked[1].task, &y);
    assert_eq!(ranked[1].quadrant, Quadrant::Schedule);
    assert!((ranked[1].urgency - 1.8).abs() < 1e-9);
    // C
    assert_eq!(ranked[2].task, &z);
    assert_eq!(ranked[2].quadrant, Quadrant::Eliminate);
    assert_eq!(ranked[2].urgency, 0.0);
    assert_eq!(ranked[2].importance, 1);
    // D
    let groups = group(&ranked);
    assert_eq!(groups.get(Quadrant::DoFirst), &[&x]);
    assert_eq!(groups.get(Quadrant::Schedule), &[&y]);
    assert!(groups.get(Quadrant::Delegate).is_empty());
    assert_eq!(groups.get(Quadrant::Eliminate), &[&z]);
}

#[test]
fn test_records_from_json_rank_like_built_tasks() {
    let json = r#"[
        {"id": "Z", "title": "Tidy notes", "importance": "low", "priority": "low"},
        {"id": "Y", "title": "Term project", "date": "2024-06-25", "priority": "low", "importance": "high"},
        {"id": "X", "title": "Overdue essay", "date": "2024-06-09", "priority": "high", "importance": "high"}
    ]"#;
    let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
    let ranked = rank_iso(&tasks, Some("2024-06-10"));
    let order: Vec<_> = ranked.iter().map(|r| r.task.id.as_str()).collect();
    assert_eq!(order, vec!["X", "Y", "Z"]);
}

#[test]
fn test_bare_task_defaults_to_eliminate() {
    let tasks: Vec<Task> = serde_json::from_str(r#"[{"id": "bare"}]"#).unwrap();
    let ranked = rank(&tasks, Some(day("2024-06-10")));
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].importance, 1);
    assert_eq!(ranked[0].urgency, 0.0);
    assert_eq!(ranked[0].quadrant, Quadrant::Eliminate);
}

#[test]
fn test_delegate_quadrant_for_urgent_unimportant() {
    let tasks = vec![
        Task::new("form", "Sign club form").with_date(day("2024-06-10")),
        Task::new("reading", "Optional reading").with_date(day("2024-07-10")),
    ];
    let ranked = rank(&tasks, Some(day("2024-06-10")));
    assert_eq!(ranked[0].task.id, "form");
    assert_eq!(ranked[0].quadrant, Quadrant::Delegate);
    assert_eq!(ranked[1].quadrant, Quadrant::Eliminate);
}

#[test]
fn test_empty_input() {
    let ranked = rank(&[], Some(day("2024-06-10")));
    assert!(ranked.is_empty());
    assert!(group(&ranked).is_empty());
}

#[test]
fn test_default_today_ranks_everything() {
    let (x, y, z) = scenario();
    let tasks = vec![z, y, x];
    assert_eq!(rank(&tasks, None).len(), 3);
}

fn level() -> impl Strategy<Value = Option<Level>> {
    prop_oneof![
        Just(None),
        Just(Some(Level::Low)),
        Just(Some(Level::Medium)),
        Just(Some(Level::High)),
    ]
}

fn offset_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of(-40i64..40).prop_map(|off| off.map(|d| day("2024-06-10") + Duration::days(d)))
}

fn arb_task() -> impl Strategy<Value = Task> {
    (offset_date(), offset_date(), level(), level()).prop_map(|(date, end_date, priority, importance)| {
        let mut task = Task::new("", "generated");
        task.date = date;
        task.end_date = end_date;
        task.priority = priority;
        task.importance = importance;
        task
    })
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..40).prop_map(|mut tasks| {
        for (i, task) in tasks.iter_mut().enumerate() {
            task.id = i.to_string();
        }
        tasks
    })
}

proptest! {
    #[test]
    fn prop_output_is_permutation(tasks in arb_tasks()) {
        let ranked = rank(&tasks, Some(day("2024-06-10")));
        prop_assert_eq!(ranked.len(), tasks.len());
        let mut seen: Vec<usize> = ranked.iter().map(|r| r.task.id.parse().unwrap()).collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..tasks.len()).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_quadrant_is_total(tasks in arb_tasks()) {
        for r in rank(&tasks, Some(day("2024-06-10"))) {
            prop_assert!((1..=4).contains(&r.quadrant.number()));
        }
    }

    #[test]
    fn prop_deterministic(tasks in arb_tasks()) {
        let today = Some(day("2024-06-10"));
        let first = rank(&tasks, today);
        let second = rank(&tasks, today);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sorted_and_stable(tasks in arb_tasks()) {
        let ranked = rank(&tasks, Some(day("2024-06-10")));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].task.id.parse().unwrap();
                let b: usize = pair[1].task.id.parse().unwrap();
                prop_assert!(a < b, "tie between {} and {} reordered", a, b);
            }
        }
    }

    #[test]
    fn prop_group_partitions_ranked_order(tasks in arb_tasks()) {
        let ranked = rank(&tasks, Some(day("2024-06-10")));
        let groups = group(&ranked);
        prop_assert_eq!(groups.len(), ranked.len());
        for (quadrant, bucket) in groups.iter() {
            let expected: Vec<&Task> = ranked
                .iter()
                .filter(|r| r.quadrant == quadrant)
                .map(|r| r.task)
                .collect();
            prop_assert_eq!(bucket, expected.as_slice());
        }
    }

    #[test]
    fn prop_overdue_beats_two_weeks_out(priority in level(), importance in level()) {
        let today = day("2024-06-10");
        let mut later = Task::new("later", "t").with_date(today + Duration::days(14));
        later.priority = priority;
        later.importance = importance;
        let mut overdue = later.clone();
        overdue.id = "overdue".into();
        overdue.date = Some(today - Duration::days(1));

        let tasks = vec![later, overdue];
        let ranked = rank(&tasks, Some(today));
        prop_assert_eq!(ranked[0].task.id.as_str(), "overdue");
    }
}
