//! Stats Bar Component
//!
//! Counters and progress for the merged task list.

use leptos::prelude::*;
use notebook_core::TaskStats;

#[component]
pub fn StatsBar(stats: Memo<TaskStats>) -> impl IntoView {
    let counters: [(&'static str, fn(&TaskStats) -> usize); 5] = [
        ("Total", |s| s.total),
        ("Completed", |s| s.completed),
        ("Pending", |s| s.pending),
        ("Local", |s| s.local_count),
        ("API", |s| s.api_count),
    ];

    view! {
        <section class="stats-bar">
            {counters
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat">
                            <span class="stat-value">{move || stats.with(value)}</span>
                            <span class="stat-label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}

            <div class="progress">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", stats.get().progress_percent)
                ></div>
                <span class="progress-label">
                    {move || format!("{}% complete", stats.get().progress_percent)}
                </span>
            </div>
        </section>
    }
}
