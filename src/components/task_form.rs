//! Task Form Component
//!
//! Create/edit form. Only the title is validated; the description may be empty.

use leptos::prelude::*;

use crate::commands;
use crate::context::{use_app_context, use_task_form};
use crate::store::{store_reload_local, use_task_store};

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();
    let form = use_task_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.draft();
        match commands::task_service().submit(&draft) {
            Ok(task) => {
                log::info!("[TASKS] Saved task {}", task.id);
                form.close();
                store_reload_local(&store);
            }
            Err(e) => ctx.report(&e),
        }
    };

    let is_editing = move || form.editing_id.get().is_some();

    view! {
        <Show when=move || form.open.get()>
            <section class="task-form">
                <form id="taskForm" on:submit=on_submit>
                    <h2>{move || if is_editing() { "Edit Task" } else { "New Task" }}</h2>

                    <input
                        type="hidden"
                        name="editing-id"
                        prop:value=move || form.editing_id.get().map(|id| id.to_string()).unwrap_or_default()
                    />

                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="What needs to be done?"
                        prop:value=move || form.title.get()
                        on:input=move |ev| form.set_title.set(event_target_value(&ev))
                    />

                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        placeholder="Optional details"
                        prop:value=move || form.description.get()
                        on:input=move |ev| form.set_description.set(event_target_value(&ev))
                    ></textarea>

                    <button type="submit">
                        {move || if is_editing() { "Save Changes" } else { "Add Task" }}
                    </button>
                </form>
            </section>
        </Show>
    }
}
