use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::filter::FilterSelection;
use crate::model::task::Task;

const TASKS_FILE: &str = "tasks.json";
const FILTERS_FILE: &str = "filters.json";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize record: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// File-backed key-value storage for the task list and filter selection.
///
/// Two independent JSON records live under the data directory. Reads are
/// lenient: a missing record loads as the default, and a corrupted record is
/// backed up as `<file>.bak` and replaced by the default. Writes go through
/// a temp file in the same directory and an atomic rename.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

/// Get the default data directory, respecting XDG_DATA_HOME
pub fn default_data_dir() -> PathBuf {
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join("smart-todo")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

impl Storage {
    pub fn new(dir: PathBuf) -> Self {
        Storage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the persisted task list. Missing or corrupted data loads as an
    /// empty list, never an error.
    pub fn load_tasks(&self) -> Vec<Task> {
        read_lenient(&self.dir.join(TASKS_FILE))
    }

    /// Write the full task list.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        self.write_record(TASKS_FILE, tasks)
    }

    /// Read the persisted filter selection, defaulting on missing/corrupt.
    pub fn load_filters(&self) -> FilterSelection {
        read_lenient(&self.dir.join(FILTERS_FILE))
    }

    /// Write the filter selection.
    pub fn save_filters(&self, selection: &FilterSelection) -> Result<(), StorageError> {
        self.write_record(FILTERS_FILE, selection)
    }

    fn write_record<T: serde::Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let content = serde_json::to_string_pretty(value)?;

        // Write to a temp file in the same directory, then rename over the
        // record so a crash never leaves a truncated file behind.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| {
            StorageError::WriteError {
                path: path.clone(),
                source: e,
            }
        })?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| StorageError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        tmp.persist(&path)
            .map_err(|e| StorageError::WriteError {
                path,
                source: e.error,
            })?;
        Ok(())
    }
}

/// Read a JSON record, returning the default if the file doesn't exist.
/// If the file is corrupted, backs it up as .bak and returns the default.
fn read_lenient<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(value) => value,
            Err(e) => {
                // Corrupted — back up and start fresh
                let bak = bak_path(path);
                let _ = fs::copy(path, &bak);
                eprintln!(
                    "warning: could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

fn bak_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::StatusFilter;
    use crate::model::task::{Category, Priority, TaskId};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, Storage) {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::new(tmp.path().join("data"));
        (tmp, storage)
    }

    #[test]
    fn load_tasks_missing_file_returns_empty() {
        let (_tmp, storage) = temp_storage();
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn tasks_round_trip() {
        let (_tmp, storage) = temp_storage();
        let tasks = vec![
            Task::new(TaskId(1), "Buy milk".into(), Category::Shopping, Priority::Low),
            Task::new(TaskId(2), "File taxes".into(), Category::Work, Priority::High),
        ];
        storage.save_tasks(&tasks).unwrap();
        let loaded = storage.load_tasks();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn corrupted_tasks_backed_up_and_empty() {
        let (_tmp, storage) = temp_storage();
        fs::create_dir_all(storage.dir()).unwrap();
        fs::write(storage.dir().join(TASKS_FILE), "not json {{{").unwrap();

        assert!(storage.load_tasks().is_empty());
        assert!(storage.dir().join("tasks.json.bak").exists());
    }

    #[test]
    fn load_filters_missing_file_returns_default() {
        let (_tmp, storage) = temp_storage();
        assert!(storage.load_filters().is_unfiltered());
    }

    #[test]
    fn filters_round_trip() {
        let (_tmp, storage) = temp_storage();
        let selection = FilterSelection {
            category: Some(Category::Health),
            priority: None,
            status: StatusFilter::Active,
        };
        storage.save_filters(&selection).unwrap();
        assert_eq!(storage.load_filters(), selection);
    }

    #[test]
    fn records_are_independent() {
        let (_tmp, storage) = temp_storage();
        let tasks = vec![Task::new(
            TaskId(1),
            "Walk".into(),
            Category::Health,
            Priority::None,
        )];
        storage.save_tasks(&tasks).unwrap();

        // Clobbering filters must not disturb tasks
        let selection = FilterSelection {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        storage.save_filters(&selection).unwrap();
        assert_eq!(storage.load_tasks(), tasks);
        assert_eq!(storage.load_filters(), selection);
    }

    #[test]
    fn save_creates_data_dir() {
        let (_tmp, storage) = temp_storage();
        assert!(!storage.dir().exists());
        storage.save_tasks(&[]).unwrap();
        assert!(storage.dir().join(TASKS_FILE).exists());
    }
}
