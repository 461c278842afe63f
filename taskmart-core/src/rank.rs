//! Filtering and ranking engine for the storefront.
//!
//! `rank` takes the loaded catalogue plus the user's current selections
//! and derives a fresh ordered list; the catalogue itself is never
//! touched. Three mutually exclusive cases:
//!
//! - no status: whole catalogue by impact, capped
//! - status only: status-filtered, ordered by the status's tag
//!   preferences, uncapped
//! - status + tags: intersection-filtered, flagship tasks promoted to the
//!   front, capped

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::relevance::best_relevance_rank;
use crate::tables::{UNRANKED, popular_task_title, priority_rank};
use crate::task::Task;
use crate::vocab::{Status, Tag};

/// Result cap for the impact-only and tag-filtered cases. The
/// status-only case intentionally returns the full filtered list.
pub const MAX_RESULTS: usize = 15;

/// Knobs for [`rank_with`]. The default reproduces the shipped ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Order the non-promoted bucket of tag-filtered results by title
    /// relevance to the selected categories before impact.
    pub title_relevance: bool,
}

/// A task as placed in one ranking result, with its derived annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    #[serde(flatten)]
    pub task: Task,
    /// Tag-preference score for the selected status; lower is better.
    /// `None` when no status is selected.
    pub priority_score: Option<u32>,
    /// True when placed via the flagship-promotion pass.
    pub is_popular: bool,
}

/// Rank the catalogue for the current selections with default options.
pub fn rank(tasks: &[Task], status: Option<Status>, tags: &[Tag]) -> Vec<RankedTask> {
    rank_with(tasks, status, tags, &RankOptions::default())
}

/// Rank the catalogue for the current selections.
///
/// Pure over its inputs: identical calls yield identical output, and the
/// source slice is never mutated. Duplicate selected tags are collapsed
/// order-preserving before anything else runs.
pub fn rank_with(
    tasks: &[Task],
    status: Option<Status>,
    tags: &[Tag],
    options: &RankOptions,
) -> Vec<RankedTask> {
    let Some(status) = status else {
        // Tags without a status still rank the whole catalogue by impact.
        return rank_by_impact(tasks);
    };

    let tags = dedup_tags(tags);
    if tags.is_empty() {
        return rank_for_status(tasks, status);
    }

    rank_for_status_and_tags(tasks, status, &tags, options)
}

/// Case A: impact rank ascending, input order for ties, first 15.
fn rank_by_impact(tasks: &[Task]) -> Vec<RankedTask> {
    let mut out: Vec<RankedTask> = tasks
        .iter()
        .map(|task| RankedTask {
            task: task.clone(),
            priority_score: None,
            is_popular: false,
        })
        .collect();

    // sort_by_key is stable, so equal impact preserves source order.
    out.sort_by_key(|r| r.task.impact.rank());
    out.truncate(MAX_RESULTS);
    out
}

/// Case B: status filter, tag-preference score over ALL of the task's
/// categories, then (score, impact, title). Uncapped.
fn rank_for_status(tasks: &[Task], status: Status) -> Vec<RankedTask> {
    let mut out: Vec<RankedTask> = tasks
        .iter()
        .filter(|t| t.has_status(status))
        .map(|t| {
            let score = t
                .categories
                .iter()
                .map(|tag| priority_rank(status, *tag))
                .min()
                .unwrap_or(UNRANKED);
            RankedTask {
                task: t.clone(),
                priority_score: Some(score),
                is_popular: false,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        a.priority_score
            .cmp(&b.priority_score)
            .then_with(|| a.task.impact.rank().cmp(&b.task.impact.rank()))
            .then_with(|| a.task.title.cmp(&b.task.title))
    });
    out
}

/// Case C: status AND tag-intersection filter, flagship promotion, then
/// both buckets ordered and concatenated, first 15.
fn rank_for_status_and_tags(
    tasks: &[Task],
    status: Status,
    tags: &[Tag],
    options: &RankOptions,
) -> Vec<RankedTask> {
    let filtered: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.has_status(status) && t.matches_any_tag(tags))
        .collect();

    // Promotion pass: each selected tag, in selection order, may pull its
    // flagship task to the front. Dedup is by task id so a task promoted
    // for one tag is never promoted again for another.
    let mut promoted_ids: Vec<&str> = Vec::new();
    let mut popular: Vec<RankedTask> = Vec::new();
    for tag in tags {
        let Some(flagship) = popular_task_title(*tag) else {
            continue;
        };
        let flagship = flagship.to_lowercase();
        let Some(task) = filtered
            .iter()
            .find(|t| t.title.to_lowercase() == flagship)
        else {
            continue;
        };
        if promoted_ids.contains(&task.id.as_str()) {
            continue;
        }
        promoted_ids.push(task.id.as_str());
        popular.push(scored(task, status, tags, true));
    }

    let mut remaining: Vec<RankedTask> = filtered
        .iter()
        .filter(|t| !promoted_ids.contains(&t.id.as_str()))
        .map(|t| scored(t, status, tags, false))
        .collect();

    popular.sort_by(impact_then_score_then_title);

    if options.title_relevance {
        // Relevance rank slots in ahead of impact; ties break as usual.
        let mut keyed: Vec<(u32, RankedTask)> = remaining
            .into_iter()
            .map(|r| (best_relevance_rank(tags, &r.task.title), r))
            .collect();
        keyed.sort_by(|(ra, a), (rb, b)| {
            ra.cmp(rb).then_with(|| impact_then_score_then_title(a, b))
        });
        remaining = keyed.into_iter().map(|(_, r)| r).collect();
    } else {
        remaining.sort_by(impact_then_score_then_title);
    }

    let mut out = popular;
    out.extend(remaining);
    out.truncate(MAX_RESULTS);
    out
}

/// Score restricted to the overlap between the task's categories and the
/// selected tags; [`UNRANKED`] when the overlap carries no rank.
fn scored(task: &Task, status: Status, tags: &[Tag], is_popular: bool) -> RankedTask {
    let score = task
        .categories
        .iter()
        .filter(|c| tags.contains(c))
        .map(|c| priority_rank(status, *c))
        .min()
        .unwrap_or(UNRANKED);
    RankedTask {
        task: task.clone(),
        priority_score: Some(score),
        is_popular,
    }
}

fn impact_then_score_then_title(a: &RankedTask, b: &RankedTask) -> Ordering {
    a.task
        .impact
        .rank()
        .cmp(&b.task.impact.rank())
        .then_with(|| a.priority_score.cmp(&b.priority_score))
        .then_with(|| a.task.title.cmp(&b.task.title))
}

fn dedup_tags(tags: &[Tag]) -> Vec<Tag> {
    let mut out: Vec<Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(tag) {
            out.push(*tag);
        }
    }
    out
}
