//! Title Bar Component
//!
//! Page header with the signed-in user, theme button and logout.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn TitleBar(#[prop(into)] user: String) -> impl IntoView {
    let ctx = use_app_context();

    let on_logout = Callback::new(move |_: ()| {
        let route = ctx.session().logout();
        ctx.navigate(route);
    });

    view! {
        <header class="title-bar">
            <h1 class="title-bar-title">"My Notebook"</h1>
            <div class="title-bar-controls">
                <span class="current-user">{format!("Hi, {}", user)}</span>
                <button id="open-toggle" class="title-bar-btn" title="Themes" on:click=move |_| ctx.open_theme_panel()>
                    "🎨"
                </button>
                <ConfirmButton
                    button_class="title-bar-btn logout-btn"
                    label="Log out"
                    prompt="Log out?"
                    on_confirm=on_logout
                />
            </div>
        </header>
    }
}
