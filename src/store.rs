//! Task Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task page owns
//! one store holding the local snapshot and the transient API-task cache.

use leptos::prelude::*;
use reactive_stores::Store;
use notebook_core::{merge_with_external, Task};

use crate::commands;

/// State behind the task view
#[derive(Clone, Debug, Default, Store)]
pub struct TaskPageState {
    /// Local tasks as last read from storage
    pub local_tasks: Vec<Task>,
    /// Tasks fetched from the remote endpoint this page load
    pub external_tasks: Vec<Task>,
    /// Whether the fetch has resolved (successfully or not)
    pub external_loaded: bool,
}

/// Type alias for the store
pub type TaskStore = Store<TaskPageState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Re-read local tasks from storage after a mutation
pub fn store_reload_local(store: &TaskStore) {
    let tasks = commands::task_service().list();
    log::debug!("[TASKS] Reloaded {} local tasks", tasks.len());
    *store.local_tasks().write() = tasks;
}

/// Cache the API tasks; ignored if the page is already gone
pub fn store_set_external(store: &TaskStore, tasks: Vec<Task>) {
    if let Some(mut external) = store.external_tasks().try_write() {
        *external = tasks;
    }
    if let Some(mut loaded) = store.external_loaded().try_write() {
        *loaded = true;
    }
}

/// Local and API tasks, newest first
pub fn store_merged(store: &TaskStore) -> Vec<Task> {
    merge_with_external(&store.local_tasks().read(), &store.external_tasks().read())
}

pub fn store_external_loaded(store: &TaskStore) -> bool {
    store.external_loaded().get()
}
