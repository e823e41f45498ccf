//! Activity Log Component
//!
//! Collapsible view of the most recent log lines kept by the console logger.

use leptos::prelude::*;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(console_logger::recent_lines());

    view! {
        <details class="activity-log">
            <summary on:click=move |_| refresh()>"Activity"</summary>
            <button type="button" class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
            <pre class="activity-lines">
                {move || lines.get().join("\n")}
            </pre>
        </details>
    }
}
