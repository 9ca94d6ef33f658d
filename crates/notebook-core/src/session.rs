//! Session Gate
//!
//! A plain flag in storage decides whether the task view may be shown.
//! Credentials are compared in plaintext against a fixed list.

use serde::{Deserialize, Serialize};

use crate::config::keys;
use crate::domain::{DomainError, DomainResult};
use crate::repository::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Exact match against one of the configured pairs
pub fn validate_credentials(users: &[Credentials], username: &str, password: &str) -> bool {
    users
        .iter()
        .any(|user| user.username == username && user.password == password)
}

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

#[derive(Debug, Clone)]
pub struct SessionGate<S> {
    store: S,
    users: Vec<Credentials>,
}

impl<S: KeyValueStore> SessionGate<S> {
    pub fn new(store: S, users: Vec<Credentials>) -> Self {
        Self { store, users }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get(keys::IS_AUTHENTICATED).as_deref() == Some("true")
    }

    pub fn current_user(&self) -> Option<String> {
        self.store.get(keys::CURRENT_USER)
    }

    pub fn set_authenticated(&self, username: &str) -> DomainResult<()> {
        self.store.set(keys::IS_AUTHENTICATED, "true")?;
        self.store.set(keys::CURRENT_USER, username)
    }

    /// Clear the session; the caller navigates to the returned route
    pub fn logout(&self) -> Route {
        self.store.remove(keys::IS_AUTHENTICATED);
        self.store.remove(keys::CURRENT_USER);
        log::info!("Session cleared");
        Route::Login
    }

    /// Must be checked before the task view touches any task data
    pub fn protect_page(&self) -> Access {
        if self.is_authenticated() {
            Access::Granted
        } else {
            Access::RedirectToLogin
        }
    }

    /// View to open on page load
    pub fn landing_route(&self) -> Route {
        match self.protect_page() {
            Access::Granted => Route::Tasks,
            Access::RedirectToLogin => Route::Login,
        }
    }

    pub fn login(&self, username: &str, password: &str) -> DomainResult<Route> {
        if !validate_credentials(&self.users, username, password) {
            log::warn!("Rejected login for {:?}", username);
            return Err(DomainError::InvalidCredentials);
        }
        self.set_authenticated(username)?;
        log::info!("User {} logged in", username);
        Ok(Route::Tasks)
    }
}

/// Visual state of the login form.
///
/// `Idle -> Shaking` on a rejected submit, `Shaking -> Invalid` when the
/// shake timer fires, and any new submit starts again from `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginFormState {
    #[default]
    Idle,
    Shaking,
    Invalid,
}

impl LoginFormState {
    pub fn on_submit(self) -> Self {
        LoginFormState::Idle
    }

    pub fn on_rejected(self) -> Self {
        LoginFormState::Shaking
    }

    /// The shake timer cannot be cancelled, so it always lands on `Invalid`
    pub fn on_shake_elapsed(self) -> Self {
        LoginFormState::Invalid
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LoginFormState::Idle => "login-form",
            LoginFormState::Shaking => "login-form shake",
            LoginFormState::Invalid => "login-form invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn gate(store: &MemoryStore) -> SessionGate<&MemoryStore> {
        SessionGate::new(store, vec![Credentials::new("admin", "admin")])
    }

    #[test]
    fn test_login_success_sets_flag() {
        let store = MemoryStore::new();
        let gate = gate(&store);
        assert!(!gate.is_authenticated());

        assert_eq!(gate.login("admin", "admin"), Ok(Route::Tasks));
        assert!(gate.is_authenticated());
        assert_eq!(gate.current_user().as_deref(), Some("admin"));
        assert_eq!(store.get(keys::IS_AUTHENTICATED).as_deref(), Some("true"));
    }

    #[test]
    fn test_login_failure_leaves_no_state() {
        let store = MemoryStore::new();
        let gate = gate(&store);

        for (user, pass) in [("admin", "Admin"), ("Admin", "admin"), ("", ""), ("admin ", "admin"), ("root", "admin")] {
            assert_eq!(gate.login(user, pass), Err(DomainError::InvalidCredentials));
        }
        assert!(!gate.is_authenticated());
        assert!(store.get(keys::IS_AUTHENTICATED).is_none());
        assert!(store.get(keys::CURRENT_USER).is_none());
    }

    #[test]
    fn test_flag_must_be_literal_true() {
        let store = MemoryStore::new().with_entry(keys::IS_AUTHENTICATED, "TRUE");
        assert!(!gate(&store).is_authenticated());
        assert_eq!(gate(&store).protect_page(), Access::RedirectToLogin);
    }

    #[test]
    fn test_logout_clears_session() {
        let store = MemoryStore::new();
        let gate = gate(&store);
        gate.login("admin", "admin").unwrap();

        assert_eq!(gate.logout(), Route::Login);
        assert!(!gate.is_authenticated());
        assert!(gate.current_user().is_none());
    }

    #[test]
    fn test_routes_follow_flag() {
        let store = MemoryStore::new();
        let gate = gate(&store);
        assert_eq!(gate.landing_route(), Route::Login);

        gate.set_authenticated("anyone").unwrap();
        assert_eq!(gate.protect_page(), Access::Granted);
        assert_eq!(gate.landing_route(), Route::Tasks);
    }

    #[test]
    fn test_validate_credentials() {
        let users = vec![Credentials::new("admin", "admin")];
        assert!(validate_credentials(&users, "admin", "admin"));
        assert!(!validate_credentials(&users, "admin", "wrong"));
        assert!(!validate_credentials(&[], "admin", "admin"));
    }

    #[test]
    fn test_login_form_transitions() {
        let state = LoginFormState::default().on_submit().on_rejected();
        assert_eq!(state, LoginFormState::Shaking);
        assert_eq!(state.css_class(), "login-form shake");

        let state = state.on_shake_elapsed();
        assert_eq!(state, LoginFormState::Invalid);
        assert_eq!(state.css_class(), "login-form invalid");

        assert_eq!(state.on_submit(), LoginFormState::Idle);
    }
}
