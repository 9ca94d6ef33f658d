//! External Task Source
//!
//! Wire shape of the remote endpoint and its mapping onto `Task`.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Record as returned by the remote endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTask {
    pub id: i64,
    pub text: String,
    pub done: bool,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl ExternalTask {
    pub fn into_task(self) -> Task {
        Task {
            id: self.id,
            description: format!("Imported from API (source #{})", self.id),
            title: self.text,
            done: self.done,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_from_api: true,
        }
    }
}

/// Decode a response body. Anything but a well-formed array yields no tasks.
pub fn parse_external_tasks(body: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<ExternalTask>>(body) {
        Ok(records) => records.into_iter().map(ExternalTask::into_task).collect(),
        Err(e) => {
            log::warn!("Ignoring external tasks, malformed body: {}", e);
            Vec::new()
        }
    }
}

/// Tasks from a finished request. Non-2xx statuses yield no tasks.
pub fn external_from_response(status: u16, body: &str) -> Vec<Task> {
    if !(200..300).contains(&status) {
        log::warn!("Ignoring external tasks, HTTP {}", status);
        return Vec::new();
    }
    parse_external_tasks(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_fields() {
        let body = r#"[{"id":3,"text":"Review pull requests","done":true,"createdAt":1000,"updatedAt":2000}]"#;
        let tasks = parse_external_tasks(body);
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "Review pull requests");
        assert_eq!(task.description, "Imported from API (source #3)");
        assert!(task.done);
        assert_eq!(task.created_at, 1000);
        assert_eq!(task.updated_at, Some(2000));
        assert!(task.is_from_api);
    }

    #[test]
    fn test_null_updated_at() {
        let body = r#"[{"id":1,"text":"Water the plants","done":false,"createdAt":10,"updatedAt":null}]"#;
        assert_eq!(parse_external_tasks(body)[0].updated_at, None);
    }

    #[test]
    fn test_response_status_gates_body() {
        let body = r#"[{"id":1,"text":"Water the plants","done":false,"createdAt":10,"updatedAt":null}]"#;
        assert_eq!(external_from_response(200, body).len(), 1);
        assert_eq!(external_from_response(204, "[]").len(), 0);
        assert!(external_from_response(404, body).is_empty());
        assert!(external_from_response(500, body).is_empty());
        assert!(external_from_response(302, body).is_empty());
    }

    #[test]
    fn test_non_array_body_is_empty() {
        assert!(parse_external_tasks(r#"{"todos":[]}"#).is_empty());
        assert!(parse_external_tasks("not json").is_empty());
        assert!(parse_external_tasks("").is_empty());
        assert!(parse_external_tasks(r#"[{"id":"x"}]"#).is_empty());
    }
}
