//! Merged listing and aggregate counters.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Concatenate local and API tasks, newest `created_at` first.
///
/// The sort is stable, so equal timestamps keep local-before-API order.
pub fn merge_with_external(local: &[Task], external: &[Task]) -> Vec<Task> {
    let mut merged: Vec<Task> = local.iter().chain(external).cloned().collect();
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded to the nearest integer, 0 for an empty list
    pub progress_percent: u32,
    pub local_count: usize,
    pub api_count: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.done).count();
        let local_count = tasks.iter().filter(|t| t.is_local()).count();
        let progress_percent = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            progress_percent,
            local_count,
            api_count: total - local_count,
        }
    }
}
