//! Handlers Layer
//!
//! HTTP handlers that expose the catalog under `/api/`. Endpoint names come
//! from the shared endpoint table, so one GET and one POST route serve every
//! entity kind.

mod list_handler;
mod mutation_handler;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use fwconsole_core::wire::Ack;
use fwconsole_core::{EntityKind, Scope};

use crate::domain::DomainError;
use crate::repository::Catalog;

pub use list_handler::list_entities;
pub use mutation_handler::{mutate, resolve_mutation, Mutation};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

/// `/api/{endpoint}` routes over `catalog`
pub fn router(catalog: Arc<dyn Catalog>) -> Router {
    Router::new()
        .route("/api/{endpoint}", get(list_entities).post(mutate))
        .with_state(AppState { catalog })
}

/// Scope named by a `localidade` value; blank means global
fn scope_of(localidade: Option<String>) -> Scope {
    match localidade {
        Some(name) if !name.trim().is_empty() => Scope::Locality(name),
        _ => Scope::Global,
    }
}

/// `{ success: false, message }` with the status matching the error
fn error_response(error: DomainError) -> Response {
    let status = StatusCode::from_u16(error.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(Ack::failed(error.to_string()))).into_response()
}

fn unknown_endpoint(endpoint: &str) -> Response {
    error_response(DomainError::NotFound(format!("endpoint {}", endpoint)))
}

/// "interface" -> "Interface"
fn title_case(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn noun_title(kind: EntityKind) -> String {
    title_case(kind.noun())
}
