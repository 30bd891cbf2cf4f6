use crate::io::storage::{Storage, StorageError};
use crate::model::filter::FilterSelection;
use crate::model::task::{Category, Priority, Task, TaskId};
use crate::ops::task_ops;

/// Owns the task list and its persistence lifecycle: loaded from the
/// storage snapshot on open, written back synchronously after every
/// effective mutation.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Open the store, loading the persisted snapshot (empty on
    /// missing/corrupt data).
    pub fn open(storage: Storage) -> Self {
        let tasks = storage.load_tasks();
        TaskStore { tasks, storage }
    }

    /// Current ordered sequence of tasks (insertion order).
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new task and persist. Returns `Ok(None)` without touching
    /// the list if the text is empty after trimming — the caller surfaces
    /// that however its UI requires.
    pub fn add(
        &mut self,
        text: &str,
        category: Category,
        priority: Priority,
    ) -> Result<Option<TaskId>, StorageError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let id = task_ops::next_id(&self.tasks);
        self.tasks
            .push(Task::new(id, trimmed.to_string(), category, priority));
        self.storage.save_tasks(&self.tasks)?;
        Ok(Some(id))
    }

    /// Flip completion on the task with the given id and persist.
    /// `Ok(false)` no-op if the id is not present.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, StorageError> {
        if !task_ops::toggle_completed(&mut self.tasks, id) {
            return Ok(false);
        }
        self.storage.save_tasks(&self.tasks)?;
        Ok(true)
    }

    /// Replace a task's text and persist. `Ok(false)` no-op if the new text
    /// is blank or the id is not present.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, StorageError> {
        if !task_ops::edit_text(&mut self.tasks, id, new_text) {
            return Ok(false);
        }
        self.storage.save_tasks(&self.tasks)?;
        Ok(true)
    }

    /// Remove the task with the given id and persist.
    /// `Ok(false)` no-op if the id is not present.
    pub fn remove(&mut self, id: TaskId) -> Result<bool, StorageError> {
        if !task_ops::remove_task(&mut self.tasks, id) {
            return Ok(false);
        }
        self.storage.save_tasks(&self.tasks)?;
        Ok(true)
    }
}

/// Holds the current filter selection; persisted on explicit apply/clear,
/// not on every list render.
#[derive(Debug)]
pub struct FilterState {
    selection: FilterSelection,
    storage: Storage,
}

impl FilterState {
    /// Load the persisted selection (defaults on missing/corrupt data).
    pub fn load(storage: Storage) -> Self {
        let selection = storage.load_filters();
        FilterState { selection, storage }
    }

    /// The active selection.
    pub fn current(&self) -> &FilterSelection {
        &self.selection
    }

    /// Store the given selection as current and persist it.
    pub fn apply(&mut self, selection: FilterSelection) -> Result<(), StorageError> {
        self.selection = selection;
        self.storage.save_filters(&self.selection)
    }

    /// Reset to all/all/all and persist.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.apply(FilterSelection::default())
    }
}
