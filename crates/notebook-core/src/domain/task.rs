//! Task Entity
//!
//! A single to-do record, either created locally or imported from the API.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Task ids are creation timestamps in milliseconds
pub type TaskId = i64;

/// A to-do item as persisted under the `todos` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Read-only record from the remote endpoint, never persisted
    #[serde(default)]
    pub is_from_api: bool,
}

impl Task {
    /// Create a local task; the id doubles as the creation timestamp
    pub fn new_local(title: &str, description: &str, now_ms: i64) -> Self {
        Self {
            id: now_ms,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            done: false,
            created_at: now_ms,
            updated_at: None,
            is_from_api: false,
        }
    }

    pub fn is_local(&self) -> bool {
        !self.is_from_api
    }

    pub fn touch(&mut self, now_ms: i64) {
        self.updated_at = Some(now_ms);
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Task form payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Set while the form edits an existing task
    pub editing_id: Option<TaskId>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            editing_id: None,
        }
    }

    pub fn editing(mut self, id: TaskId) -> Self {
        self.editing_id = Some(id);
        self
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_task() {
        let task = Task::new_local("  Buy groceries  ", " milk ", 1_700_000_000_000);
        assert_eq!(task.id(), 1_700_000_000_000);
        assert_eq!(task.created_at, task.id);
        assert_eq!(task.title, "Buy groceries");
        assert_eq!(task.description, "milk");
        assert!(!task.done);
        assert!(task.updated_at.is_none());
        assert!(task.is_local());
    }

    #[test]
    fn test_serializes_camel_case() {
        let task = Task::new_local("Write the report", "", 42);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["createdAt"], 42);
        assert_eq!(json["updatedAt"], serde_json::Value::Null);
        assert_eq!(json["isFromApi"], false);
    }

    #[test]
    fn test_decodes_record_without_api_flag() {
        let json = r#"{"id":5,"title":"Older record","description":"","done":true,"createdAt":5,"updatedAt":null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.done);
        assert!(!task.is_from_api);
    }

    #[test]
    fn test_draft_editing() {
        let draft = TaskDraft::new("title", "desc");
        assert!(!draft.is_editing());
        assert_eq!(draft.editing(7).editing_id, Some(7));
    }
}
