//! Theme Panel Component
//!
//! Slide-in list of themes with a click-to-close overlay.

use leptos::prelude::*;
use notebook_core::Theme;

use crate::context::use_app_context;

#[component]
pub fn ThemePanel() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = move || ctx.theme_panel_open.get();

    view! {
        <div
            id="overlay"
            class=move || if is_open() { "overlay" } else { "overlay hidden" }
            on:click=move |_| ctx.close_theme_panel()
        ></div>

        <aside id="theme-panel" class=move || if is_open() { "theme-panel show" } else { "theme-panel" }>
            <header class="theme-panel-header">
                <h2>"Themes"</h2>
                <button id="close-theme" title="Close" on:click=move |_| ctx.close_theme_panel()>
                    "×"
                </button>
            </header>
            <ul class="theme-list">
                {Theme::ALL
                    .into_iter()
                    .map(|theme| {
                        view! {
                            <li
                                data-theme=theme.as_str()
                                class=move || if ctx.theme.get() == theme { "active" } else { "" }
                                on:click=move |_| {
                                    ctx.set_theme(theme);
                                    ctx.close_theme_panel();
                                }
                            >
                                {theme.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
