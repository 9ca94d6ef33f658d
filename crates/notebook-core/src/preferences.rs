//! Persisted UI preferences.

use crate::config::keys;
use crate::domain::{DomainResult, Theme};
use crate::repository::KeyValueStore;

#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved theme, or the baseline when absent or unknown
    pub fn load(&self) -> Theme {
        self.store
            .get(keys::SELECTED_THEME)
            .and_then(|id| Theme::from_id(&id))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) -> DomainResult<()> {
        self.store.set(keys::SELECTED_THEME, theme.as_str())
    }
}
