//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Calls are synchronous: the only backend is
/// a text key-value store that answers immediately.
pub trait Repository<T: Entity> {
    /// Create a new entity
    fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Text key-value storage (`localStorage` semantics)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
