use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::model::task::{Priority, Task};

/// The single recommendation derived from the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// Nothing pending
    AllDone,
    /// Count of pending high-priority tasks
    HighPriority(usize),
    /// Count of pending tasks older than the staleness threshold
    Stale(usize),
    /// Pending work exists but nothing demands attention
    OnTrack,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::AllDone => write!(f, "Congratulations! All tasks are complete."),
            Suggestion::HighPriority(n) => write!(
                f,
                "You have {} high-priority task{} that need{} attention.",
                n,
                plural(*n),
                if *n == 1 { "s" } else { "" }
            ),
            Suggestion::Stale(n) => write!(
                f,
                "You have {} task{} that ha{} been waiting for more than a week.",
                n,
                plural(*n),
                if *n == 1 { "s" } else { "ve" }
            ),
            Suggestion::OnTrack => write!(f, "Everything is under control! Keep it up."),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Derive one recommendation by priority-ordered rule evaluation; only the
/// first matching rule applies. Pure: `now` and the staleness threshold are
/// parameters.
pub fn suggest(tasks: &[Task], now: DateTime<Utc>, stale_days: i64) -> Suggestion {
    let pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();

    if pending.is_empty() {
        return Suggestion::AllDone;
    }

    let high_priority = pending
        .iter()
        .filter(|t| t.priority == Priority::High)
        .count();
    if high_priority > 0 {
        return Suggestion::HighPriority(high_priority);
    }

    let stale = pending
        .iter()
        .filter(|t| now.signed_duration_since(t.created_at) > Duration::days(stale_days))
        .count();
    if stale > 0 {
        return Suggestion::Stale(stale);
    }

    Suggestion::OnTrack
}
