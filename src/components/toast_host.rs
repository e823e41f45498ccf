//! Toast Host Component
//!
//! Renders the notices held in the store. Removal timers are started by
//! `AppContext::notify`.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_console_store, ConsoleStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_console_store();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast error" } else { "toast success" };
                    view! {
                        <div class=class role="status">
                            <span class="toast-message">{toast.notice.message}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| store_dismiss_toast(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
