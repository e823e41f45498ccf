//! Firewall Console App
//!
//! Section tabs over one editable list per entity kind, with toasts on top.

use fwconsole_core::{ApiClient, ConsoleConfig};
use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use crate::components::{ActivityLog, EntityPanel, SectionTabBar, ToastHost};
use crate::config::page_origin;
use crate::context::AppContext;
use crate::store::{ConsoleState, ConsoleStateStoreFields};

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let store = Store::new(ConsoleState::default());
    provide_context(store);

    let client = ApiClient::from_config(&config, &page_origin());
    info!("console using {}", client.base());
    provide_context(AppContext::new(client, config.toast_ms, store));

    let section = Memo::new(move |_| store.section().get());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Firewall Console"</h1>

                <SectionTabBar />

                // Re-mount the panel whenever the section changes
                {move || {
                    let kind = section.get();
                    view! { <EntityPanel kind=kind /> }
                }}

                <ActivityLog />
            </main>

            <ToastHost />
        </div>
    }
}
