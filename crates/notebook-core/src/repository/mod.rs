//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use task_repo::LocalTaskRepository;
pub use traits::{KeyValueStore, Repository};
