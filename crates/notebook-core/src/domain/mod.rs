//! Domain Layer
//!
//! Contains the task record and the pure rules around it.
//! Nothing here touches storage or the browser.

mod entity;
mod external;
mod listing;
mod task;
mod theme;
mod validation;

pub use entity::{DomainError, DomainResult, Entity};
pub use external::{external_from_response, parse_external_tasks, ExternalTask};
pub use listing::{merge_with_external, TaskStats};
pub use task::{Task, TaskDraft, TaskId};
pub use theme::Theme;
pub use validation::{format_validation_errors, validate_title, ValidationError, MIN_TITLE_LEN};
