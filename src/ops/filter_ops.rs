use crate::model::filter::{FilterSelection, StatusFilter};
use crate::model::task::Task;

/// Whether a task passes every axis of the selection.
pub fn matches(task: &Task, selection: &FilterSelection) -> bool {
    if let Some(category) = selection.category
        && task.category != category
    {
        return false;
    }
    if let Some(priority) = selection.priority
        && task.priority != priority
    {
        return false;
    }
    match selection.status {
        StatusFilter::All => true,
        StatusFilter::Active => !task.completed,
        StatusFilter::Completed => task.completed,
    }
}

/// The tasks passing the selection, in list order. Applied at render time;
/// the underlying list is never narrowed.
pub fn filter_tasks<'a>(tasks: &'a [Task], selection: &FilterSelection) -> Vec<&'a Task> {
    tasks.iter().filter(|t| matches(t, selection)).collect()
}
