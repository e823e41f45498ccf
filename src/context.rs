//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use fwconsole_core::{ApiClient, Notice};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::store::{store_dismiss_toast, store_push_toast, ConsoleStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client, kept on this thread
    client: StoredValue<ApiClient, LocalStorage>,
    /// How long a toast stays up
    toast_ms: u32,
    store: ConsoleStore,
}

impl AppContext {
    pub fn new(client: ApiClient, toast_ms: u32, store: ConsoleStore) -> Self {
        Self {
            client: StoredValue::new_local(client),
            toast_ms,
            store,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, notice: Notice) {
        debug!("toast: {}", notice.message);
        let store = self.store;
        let id = store_push_toast(&store, notice);
        let toast_ms = self.toast_ms;
        spawn_local(async move {
            TimeoutFuture::new(toast_ms).await;
            store_dismiss_toast(&store, id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
