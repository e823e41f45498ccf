//! List Handler
//!
//! `GET /api/get*` for every entity kind.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fwconsole_core::wire::ScopeQuery;
use fwconsole_core::EntityKind;
use log::debug;

use super::{error_response, scope_of, unknown_endpoint, AppState};

pub async fn list_entities(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Response {
    let Some(kind) = EntityKind::from_list_endpoint(&endpoint) else {
        return unknown_endpoint(&endpoint);
    };
    let scope = scope_of(query.localidade);
    match state.catalog.list(kind, &scope).await {
        Ok(entries) => {
            debug!("{} -> {} entries for {:?}", endpoint, entries.len(), scope);
            Json(entries).into_response()
        }
        Err(e) => error_response(e),
    }
}
