//! Task model and its structured update.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

/// A task in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: String,
    /// The task title.
    pub title: String,
    /// Position of the task in its list.
    pub sort_order: i32,
    /// Progress state.
    pub status: TaskStatus,
}

/// An edit to a task's title and/or position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// A replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// A replacement sort position.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl Task {
    /// Applies an update and returns the edited task.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyUpdate`] when neither field is set
    /// - [`EngineError::InvalidUpdate`] when the new title is blank
    ///
    /// # Example
    ///
    /// ```
    /// use worklog_engine::models::{Task, TaskStatus, TaskUpdate};
    ///
    /// let task = Task {
    ///     id: "task_001".to_string(),
    ///     title: "Draft report".to_string(),
    ///     sort_order: 0,
    ///     status: TaskStatus::Todo,
    /// };
    /// let update = TaskUpdate { title: None, sort_order: Some(3) };
    /// let updated = task.apply_update(&update).unwrap();
    /// assert_eq!(updated.sort_order, 3);
    /// assert_eq!(updated.title, "Draft report");
    /// ```
    pub fn apply_update(&self, update: &TaskUpdate) -> EngineResult<Task> {
        if update.title.is_none() && update.sort_order.is_none() {
            return Err(EngineError::EmptyUpdate {
                entity: "task".to_string(),
                id: self.id.clone(),
            });
        }

        let mut task = self.clone();

        if let Some(title) = &update.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(EngineError::InvalidUpdate {
                    field: "title".to_string(),
                    message: "title must not be blank".to_string(),
                });
            }
            task.title = title.to_string();
        }

        if let Some(sort_order) = update.sort_order {
            task.sort_order = sort_order;
        }

        Ok(task)
    }
}
