//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Panel state is
//! not kept here: each panel owns its list and drops it when the section
//! changes.

use fwconsole_core::{EntityKind, Notice};
use leptos::prelude::*;
use reactive_stores::Store;

/// A notice on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Store)]
pub struct ConsoleState {
    /// Section shown below the tab bar
    pub section: EntityKind,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            section: EntityKind::Interface,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice, returning the toast id
pub fn store_push_toast(store: &ConsoleStore, notice: Notice) -> u32 {
    let id = {
        let next_toast_id = store.next_toast_id();
        let mut next = next_toast_id.write();
        let id = *next;
        *next += 1;
        id
    };
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by id; unknown ids are ignored
pub fn store_dismiss_toast(store: &ConsoleStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
