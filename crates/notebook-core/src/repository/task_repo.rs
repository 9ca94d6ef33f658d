//! Task Repository
//!
//! Keeps local tasks as one JSON array under the `todos` key. Every write
//! rewrites the whole array.

use super::traits::{KeyValueStore, Repository};
use crate::config::keys;
use crate::domain::{DomainError, DomainResult, Task, TaskId};

#[derive(Debug, Clone)]
pub struct LocalTaskRepository<S> {
    store: S,
}

impl<S: KeyValueStore> LocalTaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored array. Absent and malformed both read as empty.
    ///
    /// A single undecodable record empties the whole read, and the next
    /// write (`create`, `update`, `delete`) then replaces the stored array
    /// with whatever the caller holds.
    pub fn load_all(&self) -> Vec<Task> {
        let Some(raw) = self.store.get(keys::TODOS) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Stored tasks are malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_all(&self, tasks: &[Task]) -> DomainResult<()> {
        let json = serde_json::to_string(tasks).map_err(|e| DomainError::Storage(e.to_string()))?;
        self.store.set(keys::TODOS, &json)
    }
}

impl<S: KeyValueStore> Repository<Task> for LocalTaskRepository<S> {
    fn create(&self, entity: &Task) -> DomainResult<Task> {
        let mut tasks = self.load_all();
        tasks.push(entity.clone());
        self.save_all(&tasks)?;
        log::debug!("Created task {}", entity.id);
        Ok(entity.clone())
    }

    fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        Ok(self.load_all().into_iter().find(|t| t.id == id))
    }

    fn list(&self) -> DomainResult<Vec<Task>> {
        Ok(self.load_all())
    }

    fn update(&self, entity: &Task) -> DomainResult<Task> {
        let mut tasks = self.load_all();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", entity.id)))?;
        *slot = entity.clone();
        self.save_all(&tasks)?;
        Ok(entity.clone())
    }

    fn delete(&self, id: TaskId) -> DomainResult<()> {
        let mut tasks = self.load_all();
        tasks.retain(|t| t.id != id);
        self.save_all(&tasks)
    }
}
