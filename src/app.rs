//! Notebook Frontend App
//!
//! Root component: switches between the login view and the task view.

use leptos::prelude::*;
use notebook_core::{AppConfig, Route};

use crate::commands;
use crate::components::{ErrorPanel, ThemePanel};
use crate::context::AppContext;
use crate::login::LoginPage;
use crate::todo::TodoPage;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let landing = commands::session_gate(config.credentials.clone()).landing_route();
    let theme = commands::theme_preference().load();
    log::info!("[APP] Starting on {:?} with theme {}", landing, theme.as_str());

    // Provide context to all children
    let ctx = AppContext::new(landing, theme, config);
    provide_context(ctx);

    // Keep <body> in sync with the selected theme
    Effect::new(move |_| {
        let theme = ctx.theme.get();
        if let Some(body) = document().body() {
            body.set_class_name(&theme.body_class());
        }
    });

    view! {
        {move || match ctx.route.get() {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Tasks => view! { <TodoPage /> }.into_any(),
        }}
        <ThemePanel />
        <ErrorPanel />
    }
}
