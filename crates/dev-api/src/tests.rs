//! End-to-end Tests
//!
//! Start the router on a local port and drive it with the console's own
//! client and panel reducer.

use std::sync::Arc;

use fwconsole_core::{
    ApiClient, ApiError, ChildLoad, EntityKind, FetchOutcome, NoticeLevel, PanelState, Scope,
};
use tokio::net::TcpListener;

use crate::handlers::router;
use crate::repository::{Catalog, MemoryCatalog};

/// Create and start a test server over `catalog`, return a client for it
async fn start_test_server(catalog: MemoryCatalog) -> ApiClient {
    let app = router(Arc::new(catalog));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(format!("http://{}/api", addr), "empresa_teste")
}

/// SP-01 holding a single interface eth0
async fn single_interface_catalog() -> MemoryCatalog {
    let catalog = MemoryCatalog::new();
    catalog.create(EntityKind::Locality, &Scope::Global, "SP-01", "empresa_teste").await.unwrap();
    catalog
        .create(EntityKind::Interface, &Scope::Locality("SP-01".into()), "eth0", "empresa_teste")
        .await
        .unwrap();
    catalog
}

#[tokio::test]
async fn test_example_scenario_over_http() {
    let client = start_test_server(single_interface_catalog().await).await;
    let mut panel = PanelState::new(EntityKind::Interface);

    panel.scopes_loaded(client.list_scopes().await);
    assert!(matches!(panel.scopes(), fwconsole_core::ScopeLoad::Ready(s) if s.len() == 1));

    // select SP-01 -> [eth0]
    let fetch = panel.select_locality("SP-01").unwrap();
    let result = client.list(fetch.kind, &fetch.scope).await;
    assert_eq!(panel.fetch_resolved(&fetch, result), FetchOutcome::Applied);
    assert_eq!(panel.list().names(), vec!["eth0"]);

    // add eth1 -> [eth0, eth1]
    panel.set_draft(" eth1 ");
    let create = panel.submit_create().unwrap();
    let result = client.create(create.kind, &create.scope, &create.name).await;
    let notice = panel.create_resolved(&create, result);
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(panel.list().names(), vec!["eth0", "eth1"]);

    // rename eth0 -> eth1 is a 409; the draft reverts
    assert!(panel.begin_edit(0));
    panel.edit_draft("eth1");
    let rename = panel.submit_rename().unwrap().unwrap();
    let result = client.rename(rename.kind, &rename.scope, &rename.old_name, &rename.new_name).await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
    let notice = panel.rename_resolved(&rename, result);
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(panel.edit_value(), Some("eth0"));
    assert_eq!(panel.list().names(), vec!["eth0", "eth1"]);

    // delete eth1 -> [eth0]
    panel.cancel_edit();
    let delete = panel.request_delete(1).unwrap();
    let result = client.delete(delete.kind, &delete.scope, &delete.name).await;
    let notice = panel.delete_resolved(&delete, result);
    assert_eq!(notice.message, "Interface eth1 deleted");
    assert_eq!(panel.list().names(), vec!["eth0"]);

    // local list matches the server
    let server = client.list(EntityKind::Interface, &Scope::Locality("SP-01".into())).await.unwrap();
    assert_eq!(server, panel.list().iter().cloned().collect::<Vec<_>>());
}

#[tokio::test]
async fn test_superseded_fetch_is_discarded() {
    let client = start_test_server(MemoryCatalog::seeded()).await;
    let mut panel = PanelState::new(EntityKind::Interface);
    panel.scopes_loaded(client.list_scopes().await);

    let first = panel.select_locality("SP-01").unwrap();
    let second = panel.select_locality("RJ-02").unwrap();
    let first_result = client.list(first.kind, &first.scope).await;
    let second_result = client.list(second.kind, &second.scope).await;

    // the newer answer lands first, the older one afterwards
    assert_eq!(panel.fetch_resolved(&second, second_result), FetchOutcome::Applied);
    assert_eq!(panel.fetch_resolved(&first, first_result), FetchOutcome::Stale);
    assert_eq!(panel.list().names(), vec!["wan0"]);
}

#[tokio::test]
async fn test_unknown_locality_fails_fetch() {
    let client = start_test_server(MemoryCatalog::seeded()).await;
    let mut panel = PanelState::new(EntityKind::Object);
    panel.scopes_loaded(client.list_scopes().await);

    let fetch = panel.select_locality("XX-99").unwrap();
    let result = client.list(fetch.kind, &fetch.scope).await;
    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    assert_eq!(panel.fetch_resolved(&fetch, result), FetchOutcome::Failed);
    assert!(matches!(panel.children(), ChildLoad::Failed(_)));
    assert!(!panel.form_enabled());
}

#[tokio::test]
async fn test_localities_panel_round_trip() {
    let client = start_test_server(MemoryCatalog::seeded()).await;
    let mut panel = PanelState::new(EntityKind::Locality);

    let fetch = panel.mount().unwrap();
    let result = client.list(fetch.kind, &fetch.scope).await;
    panel.fetch_resolved(&fetch, result);
    assert_eq!(panel.list().names(), vec!["SP-01", "RJ-02"]);

    panel.begin_edit(1);
    panel.edit_draft("RJ-03");
    let rename = panel.submit_rename().unwrap().unwrap();
    let result = client.rename(rename.kind, &rename.scope, &rename.old_name, &rename.new_name).await;
    panel.rename_resolved(&rename, result);
    assert_eq!(panel.list().names(), vec!["SP-01", "RJ-03"]);

    // interfaces followed the renamed locality
    let moved = client.list(EntityKind::Interface, &Scope::Locality("RJ-03".into())).await.unwrap();
    assert_eq!(moved.len(), 1);
}

#[tokio::test]
async fn test_delete_missing_surfaces_error() {
    let client = start_test_server(MemoryCatalog::seeded()).await;
    let err = client
        .delete(EntityKind::Interface, &Scope::Locality("SP-01".into()), "eth9")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: "interface eth9 not found".into() });
}

#[tokio::test]
async fn test_transport_failure() {
    // nothing listens on the discard port
    let client = ApiClient::new("http://127.0.0.1:9/api", "empresa_teste");
    let err = client.list_scopes().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
