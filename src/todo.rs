//! Task View
//!
//! Page controller for the to-do list: owns the task store and form state,
//! loads local tasks, fetches API tasks once and renders the merged list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use notebook_core::{Access, Route, TaskStats};

use crate::commands;
use crate::components::{StatsBar, TaskForm, TaskList, TitleBar};
use crate::context::{use_app_context, TaskFormContext};
use crate::store::{store_external_loaded, store_merged, store_reload_local, store_set_external, TaskPageState};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();

    // Gate before any task data is read
    if ctx.session().protect_page() == Access::RedirectToLogin {
        log::warn!("[TASKS] No session, redirecting to login");
        Effect::new(move |_| ctx.navigate(Route::Login));
        return view! { <div class="redirecting"></div> }.into_any();
    }

    let store = Store::new(TaskPageState::default());
    provide_context(store);
    let form = TaskFormContext::new();
    provide_context(form);

    store_reload_local(&store);

    let endpoint = ctx.config.with_value(|c| c.tasks_endpoint.clone());
    spawn_local(async move {
        let external = commands::fetch_external_tasks(&endpoint).await;
        store_set_external(&store, external);
    });

    let tasks = Memo::new(move |_| store_merged(&store));
    let stats = Memo::new(move |_| tasks.with(|all| TaskStats::compute(all)));
    let user = ctx.session().current_user().unwrap_or_default();

    view! {
        <div class="todo-page">
            <TitleBar user=user />

            <StatsBar stats=stats />

            <section class="task-toolbar">
                <button
                    id="add-task"
                    class=move || if form.open.get() { "add-task active" } else { "add-task" }
                    on:click=move |_| form.toggle()
                >
                    {move || if form.open.get() { "Cancel" } else { "+ Add New Task" }}
                </button>
                <Show when=move || !store_external_loaded(&store)>
                    <span class="api-loading">"Loading API tasks..."</span>
                </Show>
            </section>

            <TaskForm />

            <TaskList tasks=tasks />
        </div>
    }
    .into_any()
}
