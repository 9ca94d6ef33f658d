//! Login View
//!
//! Username/password form in front of the task view.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use notebook_core::{DomainError, LoginFormState, Route};

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_state, set_form_state) = signal(LoginFormState::Idle);

    // Already logged in: go straight to the tasks
    Effect::new(move |_| {
        if ctx.session().is_authenticated() {
            ctx.navigate(Route::Tasks);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_state.update(|state| *state = state.on_submit());

        let user = username.get_untracked();
        match ctx.session().login(&user, &password.get_untracked()) {
            Ok(route) => ctx.navigate(route),
            Err(DomainError::InvalidCredentials) => {
                log::info!("[LOGIN] Invalid credentials");
                set_form_state.update(|state| *state = state.on_rejected());
                let delay = ctx.shake_ms();
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    set_form_state.try_update(|state| *state = state.on_shake_elapsed());
                });
            }
            Err(e) => ctx.report(&e),
        }
    };

    view! {
        <main class="login-page">
            <button id="theme-toggle" class="theme-toggle" title="Themes" on:click=move |_| ctx.open_theme_panel()>
                "🎨"
            </button>

            <form id="login-form" class=move || form_state.get().css_class() on:submit=on_submit>
                <h1>"Welcome back"</h1>
                <p class="login-subtitle">"Sign in to open your notebook"</p>

                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <Show when=move || form_state.get() == LoginFormState::Invalid>
                    <p class="login-error">"Invalid username or password"</p>
                </Show>

                <button type="submit">"Log in"</button>
            </form>
        </main>
    }
}
