//! Entity Row Component
//!
//! A list row in display mode, or the inline editor when it is the open row.
//! Rows are keyed by name; position and mode are read from the panel so a
//! delete elsewhere does not rebuild this row.

use fwconsole_core::{PanelState, RowMode};
use leptos::prelude::*;

use super::entity_panel::{dispatch_delete, dispatch_rename};
use super::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn EntityRow(name: String, panel: RwSignal<PanelState>) -> impl IntoView {
    let ctx = use_app_context();
    let noun = panel.with_untracked(|p| p.kind().noun());
    let can_mutate = Signal::derive(move || panel.with(PanelState::can_mutate));

    let row = {
        let name = name.clone();
        Memo::new(move |_| panel.with(|p| p.row_of(&name).map(|row| (row.index, row.mode))))
    };
    let index = move || row.get_untracked().map(|(index, _)| index);
    let mode = Memo::new(move |_| row.get().map(|(_, mode)| mode).unwrap_or(RowMode::Display));

    let on_delete = Callback::new(move |_| {
        if let Some(index) = index() {
            dispatch_delete(ctx, panel, index);
        }
    });
    let begin_edit = move |_: web_sys::MouseEvent| {
        if let Some(index) = index() {
            panel.update(|p| { p.begin_edit(index); });
        }
    };
    let cancel = move || {
        panel.update(|p| { p.cancel_edit(); });
    };
    let prompt = format!("Delete {} {}? This cannot be undone.", noun, name);

    move || match mode.get() {
        RowMode::Display => view! {
            <li class="entity-row">
                <span class="entity-name">{name.clone()}</span>
                <button
                    class="edit-btn"
                    disabled=move || !can_mutate.get()
                    on:click=begin_edit
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    prompt=prompt.clone()
                    disabled=Signal::derive(move || !can_mutate.get())
                    on_confirm=on_delete
                />
            </li>
        }
        .into_any(),
        editing => {
            let saving = editing == RowMode::Saving;
            view! {
                <li class="entity-row editing">
                    <input
                        type="text"
                        class="row-input"
                        disabled=saving
                        prop:value=move || panel.with(|p| p.edit_value().unwrap_or_default().to_string())
                        on:input=move |ev| {
                            panel.update(|p| { p.edit_draft(&event_target_value(&ev)); });
                        }
                        on:keydown=move |ev| match ev.key().as_str() {
                            "Enter" => dispatch_rename(ctx, panel),
                            "Escape" => cancel(),
                            _ => {}
                        }
                    />
                    <button
                        class="save-btn"
                        disabled=move || saving || !can_mutate.get()
                        on:click=move |_| dispatch_rename(ctx, panel)
                    >
                        {if saving { "Saving..." } else { "Save" }}
                    </button>
                    <button class="cancel-btn" disabled=saving on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                </li>
            }
            .into_any()
        }
    }
}
