//! Creation Form Component
//!
//! Single-row form appending a new entity to the panel's list.

use fwconsole_core::PanelState;
use leptos::prelude::*;

use super::entity_panel::dispatch_create;
use crate::context::use_app_context;

#[component]
pub fn CreationForm(panel: RwSignal<PanelState>) -> impl IntoView {
    let ctx = use_app_context();
    let noun = panel.with_untracked(|p| p.kind().noun());
    let enabled = move || panel.with(PanelState::form_enabled);
    let busy = move || panel.with(PanelState::is_busy);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dispatch_create(ctx, panel);
    };

    view! {
        <form class="creation-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=format!("New {} name...", noun)
                disabled=move || !enabled()
                prop:value=move || panel.with(|p| p.draft().to_string())
                on:input=move |ev| panel.update(|p| p.set_draft(&event_target_value(&ev)))
            />
            <button type="submit" disabled=move || !enabled() || busy()>"Add"</button>
        </form>
    }
}
