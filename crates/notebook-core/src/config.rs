//! Application Configuration
//!
//! Runtime settings plus the storage key names shared by every module.

use serde::{Deserialize, Serialize};

use crate::session::Credentials;

/// Storage keys (text key-value store)
pub mod keys {
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const CURRENT_USER: &str = "currentUser";
    pub const SELECTED_THEME: &str = "selectedTheme";
    pub const TODOS: &str = "todos";
}

pub const DEFAULT_TASKS_ENDPOINT: &str = "https://api.notebook.example/todos";

/// Duration of the login "shake" animation
pub const DEFAULT_SHAKE_MS: u32 = 500;

/// How long the error panel stays visible
pub const DEFAULT_ERROR_PANEL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote endpoint returning the read-only API tasks
    pub tasks_endpoint: String,
    /// Accepted login pairs
    pub credentials: Vec<Credentials>,
    pub shake_ms: u32,
    pub error_panel_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tasks_endpoint: DEFAULT_TASKS_ENDPOINT.to_string(),
            credentials: vec![Credentials::new("admin", "admin")],
            shake_ms: DEFAULT_SHAKE_MS,
            error_panel_ms: DEFAULT_ERROR_PANEL_MS,
        }
    }
}

impl AppConfig {
    /// Defaults plus build-time overrides.
    ///
    /// The browser has no process environment, so the endpoint is baked in
    /// with `NOTEBOOK_TASKS_ENDPOINT` at compile time.
    pub fn load() -> Self {
        Self::default().with_endpoint_override(option_env!("NOTEBOOK_TASKS_ENDPOINT"))
    }

    fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(url) = endpoint.map(str::trim).filter(|url| !url.is_empty()) {
            log::info!("Using tasks endpoint override: {}", url);
            self.tasks_endpoint = url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.shake_ms, 500);
        assert_eq!(config.error_panel_ms, 4000);
        assert_eq!(config.credentials, vec![Credentials::new("admin", "admin")]);
    }

    #[test]
    fn test_endpoint_override() {
        let config = AppConfig::default().with_endpoint_override(Some(" https://tasks.local/api "));
        assert_eq!(config.tasks_endpoint, "https://tasks.local/api");

        let config = AppConfig::default().with_endpoint_override(Some("   "));
        assert_eq!(config.tasks_endpoint, DEFAULT_TASKS_ENDPOINT);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"shake_ms": 250}"#).unwrap();
        assert_eq!(config.shake_ms, 250);
        assert_eq!(config.error_panel_ms, DEFAULT_ERROR_PANEL_MS);
        assert_eq!(config.tasks_endpoint, DEFAULT_TASKS_ENDPOINT);
    }
}
