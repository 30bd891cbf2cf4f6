use serde::Serialize;

use crate::model::task::{Priority, Task};

/// Aggregate counts over the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority_pending: usize,
}

/// Derive the counts from the list. Pure, no side effects.
pub fn compute(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let high_priority_pending = tasks
        .iter()
        .filter(|t| t.priority == Priority::High && !t.completed)
        .count();

    Stats {
        total,
        completed,
        pending: total - completed,
        high_priority_pending,
    }
}
