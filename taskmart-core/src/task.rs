//! Task model for the storefront catalogue.

use serde::{Deserialize, Serialize};

use crate::vocab::{Impact, Status, Tag};

/// A delegable task from the catalogue.
///
/// Immutable once loaded; the ranker only ever derives new lists from a
/// slice of these. Storage is the in-memory catalogue, built once per
/// process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// `task-<n>`, 1-based, assigned in source order at load time.
    pub id: String,
    pub title: String,

    /// Minutes, rounded from the source's fractional hours.
    pub duration_minutes: u32,
    pub impact: Impact,

    /// Category tags, source order. Never empty after normalization.
    pub categories: Vec<Tag>,
    /// Audience statuses, source order. Never empty after normalization.
    pub statuses: Vec<Status>,

    /// Resolved image reference (static table lookup, with fallback).
    pub image: String,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes: 0,
            impact: Impact::Low,
            categories: vec![Tag::HealthAndFitness],
            statuses: vec![Status::Single],
            image: String::new(),
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Tag>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<Status>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// True if the task is aimed at the given audience status.
    pub fn has_status(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }

    /// True if any of the task's categories appears in `tags`.
    pub fn matches_any_tag(&self, tags: &[Tag]) -> bool {
        self.categories.iter().any(|c| tags.contains(c))
    }

    /// Human-readable duration: "0 mins", "45 mins", "1 hr", "2 hrs 30 mins".
    pub fn duration_label(&self) -> String {
        let minutes = self.duration_minutes;
        if minutes == 0 {
            return "0 mins".to_string();
        }
        if minutes < 60 {
            return format!("{minutes} mins");
        }

        let hours = minutes / 60;
        let rest = minutes % 60;
        let hour_text = if hours > 1 {
            format!("{hours} hrs")
        } else {
            "1 hr".to_string()
        };

        if rest > 0 {
            format!("{hour_text} {rest} mins")
        } else {
            hour_text
        }
    }
}
