//! Scope Selector Component

use fwconsole_core::{NamedEntity, PanelState};
use leptos::prelude::*;

use super::entity_panel::dispatch_fetch;
use crate::context::use_app_context;

/// Locality drop-down; every change issues exactly one child fetch
#[component]
pub fn ScopeSelector(localities: Vec<NamedEntity>, panel: RwSignal<PanelState>) -> impl IntoView {
    let ctx = use_app_context();

    let on_change = move |ev: web_sys::Event| {
        let name = event_target_value(&ev);
        let request = panel.try_update(|p| p.select_locality(&name)).flatten();
        dispatch_fetch(ctx, panel, request);
    };

    view! {
        <label class="scope-selector">
            "Locality "
            <select
                prop:value=move || panel.with(|p| p.selected_locality().to_string())
                on:change=on_change
            >
                <option value="">"Select a locality..."</option>
                {localities.into_iter().map(|locality| view! {
                    <option value=locality.name.clone()>{locality.name.clone()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
