//! Ranking and quadrant grouping.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::quadrant::Quadrant;
use super::scoring::{classify, composite_score, due_date, importance_rank, urgency_score};
use crate::task::{parse_day, Task};

/// A task with its matrix placement for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedTask<'a> {
    pub quadrant: Quadrant,
    /// Composite sort key; only comparable within the same call.
    pub score: f64,
    pub urgency: f64,
    pub importance: u8,
    pub task: &'a Task,
}

impl<'a> RankedTask<'a> {
    /// Score a single task against `today`.
    pub fn evaluate(task: &'a Task, today: NaiveDate) -> Self {
        let importance = importance_rank(task);
        let urgency = urgency_score(task, today);
        let quadrant = classify(importance, urgency);
        let score = composite_score(quadrant, urgency, importance, due_date(task));
        RankedTask {
            quadrant,
            score,
            urgency,
            importance,
            task,
        }
    }
}

/// Current local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Rank tasks for the "do next" view.
///
/// `today` defaults to the local calendar date at call time. The result is a
/// permutation of `tasks`, sorted by composite score descending; equal scores
/// keep their input order.
pub fn rank(tasks: &[Task], today: Option<NaiveDate>) -> Vec<RankedTask<'_>> {
    let today = today.unwrap_or_else(local_today);
    let mut ranked: Vec<RankedTask<'_>> = tasks
        .iter()
        .map(|task| RankedTask::evaluate(task, today))
        .collect();
    // `sort_by` is stable, which the tie order relies on.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::debug!(count = ranked.len(), %today, "ranked tasks");
    ranked
}

/// Same as [`rank`] with the reference date given as `YYYY-MM-DD` text.
///
/// An absent or unparseable date falls back to the local date instead of
/// failing.
pub fn rank_iso<'a>(tasks: &'a [Task], today_iso: Option<&str>) -> Vec<RankedTask<'a>> {
    let today = today_iso.and_then(|s| {
        let parsed = parse_day(s);
        if parsed.is_none() {
            tracing::warn!(value = s, "unparseable reference date, using local date");
        }
        parsed
    });
    rank(tasks, today)
}

/// The task to work on next, if any.
pub fn next_up<'a, 'r>(ranked: &'r [RankedTask<'a>]) -> Option<&'r RankedTask<'a>> {
    ranked.first()
}

/// Ranked tasks bucketed by quadrant. All four buckets are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuadrantGroups<'a> {
    buckets: BTreeMap<Quadrant, Vec<&'a Task>>,
}

impl<'a> QuadrantGroups<'a> {
    fn empty() -> Self {
        QuadrantGroups {
            buckets: Quadrant::ALL.iter().map(|q| (*q, Vec::new())).collect(),
        }
    }

    /// Tasks in `quadrant`, in ranked order.
    pub fn get(&self, quadrant: Quadrant) -> &[&'a Task] {
        self.buckets
            .get(&quadrant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Buckets in quadrant order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &[&'a Task])> {
        self.buckets.iter().map(|(q, tasks)| (*q, tasks.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bucket sizes indexed by quadrant number minus one.
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for (q, tasks) in &self.buckets {
            counts[q.index()] = tasks.len();
        }
        counts
    }
}

/// Partition an already-ranked sequence by quadrant without re-sorting.
pub fn group<'a>(ranked: &[RankedTask<'a>]) -> QuadrantGroups<'a> {
    let mut groups = QuadrantGroups::empty();
    for entry in ranked {
        groups
            .buckets
            .entry(entry.quadrant)
            .or_default()
            .push(entry.task);
    }
    groups
}
