//! Task List Component
//!
//! Merged local + API tasks, or the empty-notebook placeholder.

use leptos::prelude::*;
use notebook_core::Task;

use crate::components::TaskRow;

#[component]
pub fn TaskList(tasks: Memo<Vec<Task>>) -> impl IntoView {
    view! {
        <section class="task-list-section">
            <Show
                when=move || tasks.with(|t| !t.is_empty())
                fallback=|| view! {
                    <article class="empty">
                        <p class="icon">"📖"</p>
                        <h2>"Your notebook is empty"</h2>
                        <p>"Start by adding your first beautiful task above"</p>
                    </article>
                }
            >
                <ul class="task-list">
                    <For
                        each=move || tasks.get()
                        key=|task| {
                            // Every displayed field, so edits and toggles re-render the row
                            (
                                task.id,
                                task.is_from_api,
                                task.done,
                                task.title.clone(),
                                task.description.clone(),
                            )
                        }
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
