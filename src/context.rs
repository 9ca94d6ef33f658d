//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use notebook_core::{AppConfig, DomainError, Route, SessionGate, Task, TaskDraft, TaskId, Theme};

use crate::commands::{self, BrowserStorage};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current top-level view - read
    pub route: ReadSignal<Route>,
    /// Current top-level view - write
    set_route: WriteSignal<Route>,
    /// Message in the transient error panel - read
    pub error: ReadSignal<Option<String>>,
    /// Message in the transient error panel - write
    set_error: WriteSignal<Option<String>>,
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    pub theme_panel_open: ReadSignal<bool>,
    set_theme_panel_open: WriteSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: Route, theme: Theme, config: AppConfig) -> Self {
        let (route, set_route) = signal(route);
        let (error, set_error) = signal::<Option<String>>(None);
        let (theme, set_theme) = signal(theme);
        let (theme_panel_open, set_theme_panel_open) = signal(false);
        Self {
            route,
            set_route,
            error,
            set_error,
            theme,
            set_theme,
            theme_panel_open,
            set_theme_panel_open,
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("[APP] Navigating to {:?}", route);
        self.set_route.set(route);
    }

    /// Session gate over localStorage with the configured credentials
    pub fn session(&self) -> SessionGate<BrowserStorage> {
        commands::session_gate(self.config.with_value(|c| c.credentials.clone()))
    }

    pub fn shake_ms(&self) -> u32 {
        self.config.with_value(|c| c.shake_ms)
    }

    /// Show a message, hidden again after the configured delay.
    /// The timer is not cancelled by later messages.
    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error.set(Some(message.into()));
        let delay = self.config.with_value(|c| c.error_panel_ms);
        let set_error = self.set_error;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_error.set(None);
        });
    }

    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }

    pub fn report(&self, err: &DomainError) {
        log::warn!("[APP] {:?}", err);
        self.show_error(err.to_string());
    }

    /// Apply and persist a theme
    pub fn set_theme(&self, theme: Theme) {
        self.set_theme.set(theme);
        if let Err(e) = commands::theme_preference().save(theme) {
            self.report(&e);
        }
    }

    pub fn open_theme_panel(&self) {
        self.set_theme_panel_open.set(true);
    }

    pub fn close_theme_panel(&self) {
        self.set_theme_panel_open.set(false);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Task form state: visibility, edit mode and field values
#[derive(Clone, Copy)]
pub struct TaskFormContext {
    pub open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    /// Task being edited (None = creating)
    pub editing_id: ReadSignal<Option<TaskId>>,
    set_editing_id: WriteSignal<Option<TaskId>>,
    pub title: ReadSignal<String>,
    pub set_title: WriteSignal<String>,
    pub description: ReadSignal<String>,
    pub set_description: WriteSignal<String>,
}

impl TaskFormContext {
    pub fn new() -> Self {
        let (open, set_open) = signal(false);
        let (editing_id, set_editing_id) = signal::<Option<TaskId>>(None);
        let (title, set_title) = signal(String::new());
        let (description, set_description) = signal(String::new());
        Self {
            open,
            set_open,
            editing_id,
            set_editing_id,
            title,
            set_title,
            description,
            set_description,
        }
    }

    /// "Add Task" / "Cancel" button
    pub fn toggle(&self) {
        if self.open.get_untracked() {
            self.close();
        } else {
            self.set_open.set(true);
        }
    }

    /// Prefill the form with a task and switch to edit mode
    pub fn start_edit(&self, task: &Task) {
        self.set_title.set(task.title.clone());
        self.set_description.set(task.description.clone());
        self.set_editing_id.set(Some(task.id));
        self.set_open.set(true);
    }

    /// Hide, clear fields and leave edit mode
    pub fn close(&self) {
        self.set_open.set(false);
        self.set_title.set(String::new());
        self.set_description.set(String::new());
        self.set_editing_id.set(None);
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            editing_id: self.editing_id.get_untracked(),
        }
    }
}

pub fn use_task_form() -> TaskFormContext {
    use_context::<TaskFormContext>().expect("TaskFormContext should be provided")
}
