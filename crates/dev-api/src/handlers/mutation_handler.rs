//! Mutation Handler
//!
//! `POST /api/sendNew*`, `update*` and `delete*` for every entity kind.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fwconsole_core::wire::{Ack, CreateBody, DeleteBody, RenameBody};
use fwconsole_core::EntityKind;
use serde::de::DeserializeOwned;

use super::{error_response, noun_title, scope_of, unknown_endpoint, AppState};
use crate::domain::{DomainError, DomainResult};
use crate::repository::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Rename,
    Delete,
}

/// Map a POST endpoint name to its kind and operation
pub fn resolve_mutation(endpoint: &str) -> Option<(EntityKind, Mutation)> {
    EntityKind::ALL.into_iter().find_map(|kind| {
        let endpoints = kind.endpoints();
        if endpoints.create == endpoint {
            Some((kind, Mutation::Create))
        } else if endpoints.rename == endpoint {
            Some((kind, Mutation::Rename))
        } else if endpoints.delete == endpoint {
            Some((kind, Mutation::Delete))
        } else {
            None
        }
    })
}

pub async fn mutate(State(state): State<AppState>, Path(endpoint): Path<String>, body: Bytes) -> Response {
    let Some((kind, mutation)) = resolve_mutation(&endpoint) else {
        return unknown_endpoint(&endpoint);
    };
    match apply(state.catalog.as_ref(), kind, mutation, &body).await {
        Ok(message) => Json(Ack::ok(message)).into_response(),
        Err(e) => error_response(e),
    }
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> DomainResult<T> {
    serde_json::from_slice(body).map_err(|e| DomainError::InvalidInput(format!("invalid request body: {}", e)))
}

async fn apply(catalog: &dyn Catalog, kind: EntityKind, mutation: Mutation, body: &[u8]) -> DomainResult<String> {
    match mutation {
        Mutation::Create => {
            let body: CreateBody = parse(body)?;
            let scope = scope_of(body.localidade);
            let created = catalog.create(kind, &scope, &body.name, &body.tenant).await?;
            Ok(format!("{} {} added", noun_title(kind), created.name))
        }
        Mutation::Rename => {
            let body: RenameBody = parse(body)?;
            let scope = scope_of(body.localidade);
            let renamed = catalog.rename(kind, &scope, &body.old_name, &body.new_name).await?;
            Ok(format!("{} saved as {}", noun_title(kind), renamed.name))
        }
        Mutation::Delete => {
            let body: DeleteBody = parse(body)?;
            let scope = scope_of(body.localidade);
            catalog.delete(kind, &scope, &body.name).await?;
            Ok(format!("{} {} deleted", noun_title(kind), body.name))
        }
    }
}
