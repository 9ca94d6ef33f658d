//! Task Row Component
//!
//! One task with its checkbox, edit and delete controls. API tasks render the
//! same controls but every mutation is refused.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use notebook_core::Task;

use crate::commands;
use crate::components::ConfirmButton;
use crate::context::{use_app_context, use_task_form};
use crate::store::{store_reload_local, use_task_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();
    let form = use_task_form();

    let id = task.id;
    let is_from_api = task.is_from_api;
    let done = task.done;

    let on_toggle = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let checked = input.as_ref().map(|i| i.checked()).unwrap_or(!done);

        match commands::task_service().set_done(id, is_from_api, checked) {
            Ok(_) => store_reload_local(&store),
            Err(e) => {
                // Flip the checkbox back
                if let Some(input) = input {
                    input.set_checked(!checked);
                }
                ctx.report(&e);
            }
        }
    };

    let on_edit = move |_: web_sys::MouseEvent| match commands::task_service().begin_edit(id, is_from_api) {
        Ok(task) => form.start_edit(&task),
        Err(e) => ctx.report(&e),
    };

    let on_delete = Callback::new(move |_: ()| match commands::task_service().remove(id, is_from_api) {
        Ok(()) => {
            if form.editing_id.get_untracked() == Some(id) {
                form.close();
            }
            store_reload_local(&store);
        }
        Err(e) => ctx.report(&e),
    });

    view! {
        <li class=if is_from_api { "task-item api" } else { "task-item" }>
            <input
                type="checkbox"
                class="task-checkbox"
                data-id=id.to_string()
                checked=done
                on:change=on_toggle
            />
            <div class=if done { "task-text done" } else { "task-text" }>
                <h3>
                    {task.title}
                    {is_from_api.then(|| view! { <span class="api-badge">"API"</span> })}
                </h3>
                <p>{task.description}</p>
            </div>
            <div class="task-actions-item">
                <button class="edit-btn" title="Edit" data-id=id.to_string() on:click=on_edit>
                    "✎"
                </button>
                // API tasks skip the prompt and get the refusal right away
                {if is_from_api {
                    view! {
                        <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(())>
                            "🗑"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <ConfirmButton
                            button_class="delete-btn"
                            label="🗑"
                            prompt="Delete?"
                            on_confirm=on_delete
                        />
                    }
                    .into_any()
                }}
            </div>
        </li>
    }
}
