//! Notebook Core
//!
//! Layered architecture:
//! - domain: Task record, validation, merge/stats, themes
//! - repository: key-value storage and the task repository
//! - service / session / preferences: operations the UI calls

pub mod clock;
pub mod config;
pub mod domain;
pub mod preferences;
pub mod repository;
pub mod service;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use config::AppConfig;
pub use domain::{
    external_from_response, merge_with_external, parse_external_tasks, validate_title, DomainError, DomainResult, Entity,
    ExternalTask, Task, TaskDraft, TaskId, TaskStats, Theme, ValidationError,
};
pub use preferences::ThemePreference;
pub use repository::{KeyValueStore, LocalTaskRepository, MemoryStore, Repository};
pub use service::TaskService;
pub use session::{validate_credentials, Access, Credentials, LoginFormState, Route, SessionGate};
