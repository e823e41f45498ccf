//! Entity Panel Component
//!
//! One editable list: locality selector (for scoped kinds), child rows and
//! the creation form. All state lives in a `PanelState` signal; the
//! `dispatch_*` helpers send the request it hands out and feed the answer
//! back. Answers that arrive after the panel was unmounted are dropped.

use fwconsole_core::{ChildLoad, EntityKind, FetchRequest, PanelState, ScopeLoad};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CreationForm, EntityRow, ScopeSelector};
use crate::context::{use_app_context, AppContext};

// ========================
// Dispatch
// ========================

pub(super) fn dispatch_fetch(ctx: AppContext, panel: RwSignal<PanelState>, request: Option<FetchRequest>) {
    let Some(request) = request else { return };
    let client = ctx.client();
    spawn_local(async move {
        let result = client.list(request.kind, &request.scope).await;
        panel.try_update(|p| p.fetch_resolved(&request, result));
    });
}

pub(super) fn dispatch_create(ctx: AppContext, panel: RwSignal<PanelState>) {
    let request = match panel.try_update(PanelState::submit_create) {
        Some(Ok(request)) => request,
        Some(Err(notice)) => return ctx.notify(notice),
        None => return,
    };
    let client = ctx.client();
    spawn_local(async move {
        let result = client.create(request.kind, &request.scope, &request.name).await;
        if let Some(notice) = panel.try_update(|p| p.create_resolved(&request, result)) {
            ctx.notify(notice);
        }
    });
}

pub(super) fn dispatch_rename(ctx: AppContext, panel: RwSignal<PanelState>) {
    let request = match panel.try_update(PanelState::submit_rename) {
        Some(Ok(Some(request))) => request,
        Some(Err(notice)) => return ctx.notify(notice),
        // unchanged name or nothing open
        Some(Ok(None)) | None => return,
    };
    let client = ctx.client();
    spawn_local(async move {
        let result = client
            .rename(request.kind, &request.scope, &request.old_name, &request.new_name)
            .await;
        if let Some(notice) = panel.try_update(|p| p.rename_resolved(&request, result)) {
            ctx.notify(notice);
        }
    });
}

pub(super) fn dispatch_delete(ctx: AppContext, panel: RwSignal<PanelState>, index: usize) {
    let request = match panel.try_update(|p| p.request_delete(index)) {
        Some(Ok(request)) => request,
        Some(Err(notice)) => return ctx.notify(notice),
        None => return,
    };
    let client = ctx.client();
    spawn_local(async move {
        let result = client.delete(request.kind, &request.scope, &request.name).await;
        if let Some(notice) = panel.try_update(|p| p.delete_resolved(&request, result)) {
            ctx.notify(notice);
        }
    });
}

// ========================
// Panel
// ========================

#[component]
pub fn EntityPanel(kind: EntityKind) -> impl IntoView {
    let ctx = use_app_context();
    let panel = RwSignal::new(PanelState::new(kind));

    // Mount: scoped kinds load the selector, unscoped kinds their list
    if kind.is_scoped() {
        let client = ctx.client();
        spawn_local(async move {
            let result = client.list_scopes().await;
            panel.try_update(|p| p.scopes_loaded(result));
        });
    }
    dispatch_fetch(ctx, panel, panel.try_update(PanelState::mount).flatten());

    let scopes = Memo::new(move |_| panel.with(|p| p.scopes().clone()));

    view! {
        <section class="entity-panel">
            <h2>{kind.title()}</h2>
            {move || match scopes.get() {
                ScopeLoad::Loading => view! {
                    <p class="loading">"Loading localities..."</p>
                }.into_any(),
                ScopeLoad::Failed(message) => view! {
                    <p class="page-error">{message}</p>
                }.into_any(),
                ScopeLoad::Ready(localities) => view! {
                    {kind.is_scoped().then(|| view! { <ScopeSelector localities=localities panel=panel /> })}
                    <ChildList panel=panel />
                }.into_any(),
            }}
        </section>
    }
}

/// Rows, status line and creation form for the current selection
#[component]
fn ChildList(panel: RwSignal<PanelState>) -> impl IntoView {
    let ctx = use_app_context();
    let kind = panel.with_untracked(PanelState::kind);
    let children = Memo::new(move |_| panel.with(|p| p.children().clone()));
    let count = Memo::new(move |_| panel.with(|p| p.list().len()));

    let on_reload = move |_: web_sys::MouseEvent| {
        let request = panel.try_update(PanelState::reload).flatten();
        dispatch_fetch(ctx, panel, request);
    };

    view! {
        {move || match children.get() {
            ChildLoad::Unselected => view! {
                <p class="hint">{format!("Select a locality to manage its {}.", kind.title().to_lowercase())}</p>
            }.into_any(),
            ChildLoad::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
            ChildLoad::Failed(message) => view! { <p class="inline-error">{message}</p> }.into_any(),
            ChildLoad::Loaded if count.get() == 0 => view! {
                <p class="hint">{format!("No {} yet.", kind.title().to_lowercase())}</p>
            }.into_any(),
            ChildLoad::Loaded => view! {
                <p class="entry-count">{move || format!("{} {}", count.get(), kind.title().to_lowercase())}</p>
            }.into_any(),
        }}

        <ul class="entity-list">
            <For
                each=move || panel.with(|p| p.list().names())
                key=|name| name.clone()
                children=move |name| view! { <EntityRow name=name panel=panel /> }
            />
        </ul>

        <CreationForm panel=panel />

        <button
            type="button"
            class="reload-btn"
            disabled=move || panel.with(|p| p.selected().is_none() || p.is_busy())
            on:click=on_reload
        >
            "Reload"
        </button>
    }
}
