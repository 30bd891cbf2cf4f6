use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find a task by id.
pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Find a task by id, mutable.
pub fn find_task_mut(tasks: &mut [Task], id: TaskId) -> Option<&mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

/// Next available id: one past the highest in the list.
pub fn next_id(tasks: &[Task]) -> TaskId {
    let max = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
    TaskId(max + 1)
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Flip `completed` on the task with the given id.
/// Returns false (no-op) if the id is not present.
pub fn toggle_completed(tasks: &mut [Task], id: TaskId) -> bool {
    match find_task_mut(tasks, id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace a task's text with the trimmed new text.
/// Returns false (no-op) if the text is empty after trimming or the id is
/// not present.
pub fn edit_text(tasks: &mut [Task], id: TaskId, new_text: &str) -> bool {
    let trimmed = new_text.trim();
    if trimmed.is_empty() {
        return false;
    }
    match find_task_mut(tasks, id) {
        Some(task) => {
            task.text = trimmed.to_string();
            true
        }
        None => false,
    }
}

/// Remove the task with the given id.
/// Returns false (no-op) if the id is not present.
pub fn remove_task(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Category, Priority};
    use pretty_assertions::assert_eq;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(TaskId(1), "Write report".into(), Category::Work, Priority::High),
            Task::new(TaskId(2), "Buy milk".into(), Category::Shopping, Priority::Low),
            Task::new(TaskId(3), "Go running".into(), Category::Health, Priority::None),
        ]
    }

    #[test]
    fn test_find_task() {
        let tasks = sample_tasks();
        assert_eq!(find_task(&tasks, TaskId(2)).unwrap().text, "Buy milk");
        assert!(find_task(&tasks, TaskId(99)).is_none());
    }

    #[test]
    fn test_next_id_empty_list() {
        assert_eq!(next_id(&[]), TaskId(1));
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let mut tasks = sample_tasks();
        remove_task(&mut tasks, TaskId(2));
        // Highest surviving id is 3, so the next is 4 — ids are never reused
        assert_eq!(next_id(&tasks), TaskId(4));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut tasks = sample_tasks();
        assert!(!find_task(&tasks, TaskId(1)).unwrap().completed);

        assert!(toggle_completed(&mut tasks, TaskId(1)));
        assert!(find_task(&tasks, TaskId(1)).unwrap().completed);

        assert!(toggle_completed(&mut tasks, TaskId(1)));
        assert!(!find_task(&tasks, TaskId(1)).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut tasks = sample_tasks();
        let before = tasks.clone();
        assert!(!toggle_completed(&mut tasks, TaskId(99)));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_edit_text_trims() {
        let mut tasks = sample_tasks();
        assert!(edit_text(&mut tasks, TaskId(2), "  Buy oat milk  "));
        assert_eq!(find_task(&tasks, TaskId(2)).unwrap().text, "Buy oat milk");
    }

    #[test]
    fn test_edit_blank_text_is_noop() {
        let mut tasks = sample_tasks();
        assert!(!edit_text(&mut tasks, TaskId(2), "   "));
        assert_eq!(find_task(&tasks, TaskId(2)).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut tasks = sample_tasks();
        assert!(!edit_text(&mut tasks, TaskId(99), "new text"));
    }

    #[test]
    fn test_remove_task() {
        let mut tasks = sample_tasks();
        assert!(remove_task(&mut tasks, TaskId(2)));
        assert_eq!(tasks.len(), 2);
        assert!(find_task(&tasks, TaskId(2)).is_none());
        // Order of the survivors is preserved
        assert_eq!(tasks[0].id, TaskId(1));
        assert_eq!(tasks[1].id, TaskId(3));
    }

    #[test]
    fn test_remove_unknown_id_leaves_list_unchanged() {
        let mut tasks = sample_tasks();
        let len = tasks.len();
        assert!(!remove_task(&mut tasks, TaskId(99)));
        assert_eq!(tasks.len(), len);
    }
}
