//! Section Tab Bar Component
//!
//! Tab bar for switching between entity kinds in the main content area.

use fwconsole_core::EntityKind;
use leptos::prelude::*;

use crate::store::{use_console_store, ConsoleStateStoreFields};

#[component]
pub fn SectionTabBar() -> impl IntoView {
    let store = use_console_store();

    view! {
        <div class="section-tab-bar">
            {EntityKind::ALL.into_iter().map(|kind| {
                let is_active = move || store.section().get() == kind;
                let tab_class = move || {
                    if is_active() { "section-tab active" } else { "section-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| store.section().set(kind)
                    >
                        {kind.title()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
