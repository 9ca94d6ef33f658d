//! Task Service
//!
//! The operations behind the task form and row buttons. Each mutation reads
//! the full local collection, changes it and writes it back.

use crate::clock::Clock;
use crate::domain::{validate_title, DomainError, DomainResult, Task, TaskDraft, TaskId, ValidationError};
use crate::repository::{KeyValueStore, LocalTaskRepository, Repository};

#[derive(Debug, Clone)]
pub struct TaskService<S, C> {
    repo: LocalTaskRepository<S>,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> TaskService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            repo: LocalTaskRepository::new(store),
            clock,
        }
    }

    /// Local tasks in storage order
    pub fn list(&self) -> Vec<Task> {
        self.repo.list().unwrap_or_default()
    }

    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.repo.find_by_id(id).ok().flatten()
    }

    pub fn validate(&self, text: &str, editing_id: Option<TaskId>) -> Vec<ValidationError> {
        validate_title(text, &self.list(), editing_id)
    }

    fn ensure_valid(&self, text: &str, editing_id: Option<TaskId>) -> DomainResult<()> {
        let errors = self.validate(text, editing_id);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    pub fn create(&self, title: &str, description: &str) -> DomainResult<Task> {
        self.ensure_valid(title, None)?;
        let task = Task::new_local(title, description, self.clock.now_ms());
        log::info!("Creating task {}", task.id);
        self.repo.create(&task)
    }

    /// Overwrite title and description (both trimmed) of a local task
    pub fn update(&self, id: TaskId, title: &str, description: &str) -> DomainResult<Task> {
        self.ensure_valid(title, Some(id))?;
        let mut task = self
            .find(id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))?;
        task.title = title.trim().to_string();
        task.description = description.trim().to_string();
        task.touch(self.clock.now_ms());
        self.repo.update(&task)
    }

    /// Create or update depending on the draft's editing id
    pub fn submit(&self, draft: &TaskDraft) -> DomainResult<Task> {
        match draft.editing_id {
            Some(id) => self.update(id, &draft.title, &draft.description),
            None => self.create(&draft.title, &draft.description),
        }
    }

    pub fn set_done(&self, id: TaskId, is_from_api: bool, done: bool) -> DomainResult<Task> {
        if is_from_api {
            return Err(DomainError::ReadOnly { id });
        }
        let mut task = self
            .find(id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))?;
        task.done = done;
        task.touch(self.clock.now_ms());
        self.repo.update(&task)
    }

    pub fn remove(&self, id: TaskId, is_from_api: bool) -> DomainResult<()> {
        if is_from_api {
            return Err(DomainError::ReadOnly { id });
        }
        log::info!("Removing task {}", id);
        self.repo.delete(id)
    }

    /// Task to prefill the form with when the edit button is pressed
    pub fn begin_edit(&self, id: TaskId, is_from_api: bool) -> DomainResult<Task> {
        if is_from_api {
            return Err(DomainError::ReadOnly { id });
        }
        self.find(id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))
    }
}
