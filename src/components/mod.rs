//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod error_panel;
mod stats_bar;
mod task_form;
mod task_list;
mod task_row;
mod theme_panel;
mod title_bar;

pub use confirm_button::ConfirmButton;
pub use error_panel::ErrorPanel;
pub use stats_bar::StatsBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use theme_panel::ThemePanel;
pub use title_bar::TitleBar;
