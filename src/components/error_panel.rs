//! Error Panel Component
//!
//! Transient message box for validation and read-only errors.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorPanel() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.error.with(|e| e.is_some())>
            <div class="error-panel" role="alert">
                <p class="error-message">{move || ctx.error.get().unwrap_or_default()}</p>
                <button class="error-close" title="Dismiss" on:click=move |_| ctx.dismiss_error()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
