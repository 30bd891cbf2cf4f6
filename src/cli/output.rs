use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::filter::FilterSelection;
use crate::model::task::Task;
use crate::ops::stats::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    pub category: String,
    pub priority: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct FilterJson {
    pub category: String,
    pub priority: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct SuggestionJson {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.0,
        text: task.text.clone(),
        category: serde_variant_name(&task.category),
        priority: serde_variant_name(&task.priority),
        completed: task.completed,
        created_at: task.created_at,
    }
}

pub fn filters_to_json(selection: &FilterSelection) -> FilterJson {
    FilterJson {
        category: selection
            .category
            .map(|c| serde_variant_name(&c))
            .unwrap_or_else(|| "all".to_string()),
        priority: selection
            .priority
            .map(|p| serde_variant_name(&p))
            .unwrap_or_else(|| "all".to_string()),
        status: selection.status.to_string(),
    }
}

/// The lowercase wire name of a unit enum variant ("work", "high", ...)
fn serde_variant_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One listing line per task: checkbox, id, text, names, relative age.
pub fn format_task_lines(tasks: &[&Task], now: DateTime<Utc>) -> Vec<String> {
    let id_w = tasks
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);
    let text_w = tasks.iter().map(|t| t.text.len()).max().unwrap_or(0);

    tasks
        .iter()
        .map(|task| {
            format!(
                "[{}] {:>id_w$}  {:<text_w$}  {:<11}  {:<6}  {}",
                task.checkbox_char(),
                task.id,
                task.text,
                task.category.name(),
                task.priority.name(),
                relative_time(&task.created_at, now),
                id_w = id_w,
                text_w = text_w,
            )
        })
        .collect()
}

/// A single task line without column alignment (toggle/edit confirmations).
pub fn format_task_line(task: &Task) -> String {
    format!(
        "[{}] {}  {}  ({}, {})",
        task.checkbox_char(),
        task.id,
        task.text,
        task.category.name(),
        task.priority.name(),
    )
}

/// The stats panel rows.
pub fn format_stats(stats: &Stats) -> Vec<String> {
    vec![
        format!(" {:<22}  {:>4}", "Total", stats.total),
        format!(" {:<22}  {:>4}", "Completed", stats.completed),
        format!(" {:<22}  {:>4}", "Pending", stats.pending),
        format!(" {:<22}  {:>4}", "High-priority pending", stats.high_priority_pending),
    ]
}

/// The filter panel rows.
pub fn format_filters(selection: &FilterSelection) -> Vec<String> {
    let json = filters_to_json(selection);
    vec![
        format!(" {:<8}  {}", "category", json.category),
        format!(" {:<8}  {}", "priority", json.priority),
        format!(" {:<8}  {}", "status", json.status),
    ]
}

/// Format a relative time string like "2 min ago", "yesterday", "3 days ago"
pub fn relative_time(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    let secs = duration.num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = duration.num_minutes();
    if mins < 60 {
        return format!("{} min ago", mins);
    }
    let hours = duration.num_hours();
    if hours < 24 {
        return format!("{} hr ago", hours);
    }
    let days = duration.num_days();
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }
    let weeks = days / 7;
    if weeks < 5 {
        return format!("{} weeks ago", weeks);
    }
    format!("{} months ago", days / 30)
}
