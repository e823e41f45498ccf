//! REST Client
//!
//! Thin reqwest wrapper for the console endpoints. Runs on wasm32 (browser
//! fetch) and natively (tests, tooling).

use log::debug;
use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::error::ApiResult;
use crate::model::{EntityKind, NamedEntity, Scope};
use crate::wire::{self, Ack, CreateBody, DeleteBody, RenameBody};

/// Client for the `/api/` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    tenant: String,
}

impl ApiClient {
    /// `base` must be absolute, e.g. `http://localhost:8080/api`
    pub fn new(base: impl Into<String>, tenant: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
            tenant: tenant.into(),
        }
    }

    /// Build a client from the console config, resolving a relative API base against `origin`
    pub fn from_config(config: &ConsoleConfig, origin: &str) -> Self {
        Self::new(config.api_url(origin), config.tenant.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base, endpoint)
    }

    /// `GET getLocalidade`
    pub async fn list_scopes(&self) -> ApiResult<Vec<NamedEntity>> {
        self.get_list(EntityKind::SCOPES_ENDPOINT, None).await
    }

    /// `GET get*` for one kind, filtered by locality when scoped
    pub async fn list(&self, kind: EntityKind, scope: &Scope) -> ApiResult<Vec<NamedEntity>> {
        self.get_list(kind.endpoints().list, scope.locality()).await
    }

    pub async fn create(&self, kind: EntityKind, scope: &Scope, name: &str) -> ApiResult<Ack> {
        let body = CreateBody {
            name: name.to_string(),
            localidade: scope.locality().map(str::to_string),
            tenant: self.tenant.clone(),
        };
        self.post(kind.endpoints().create, &body).await
    }

    pub async fn rename(&self, kind: EntityKind, scope: &Scope, old_name: &str, new_name: &str) -> ApiResult<Ack> {
        let body = RenameBody {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            localidade: scope.locality().map(str::to_string),
        };
        self.post(kind.endpoints().rename, &body).await
    }

    pub async fn delete(&self, kind: EntityKind, scope: &Scope, name: &str) -> ApiResult<Ack> {
        let body = DeleteBody {
            name: name.to_string(),
            localidade: scope.locality().map(str::to_string),
        };
        self.post(kind.endpoints().delete, &body).await
    }

    async fn get_list(&self, endpoint: &str, locality: Option<&str>) -> ApiResult<Vec<NamedEntity>> {
        let mut request = self.http.get(self.url(endpoint));
        if let Some(locality) = locality {
            request = request.query(&[("localidade", locality)]);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("GET {} ({:?}) -> {}", endpoint, locality, status);
        wire::interpret_list(status, &body)
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<Ack> {
        let response = self.http.post(self.url(endpoint)).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("POST {} -> {}", endpoint, status);
        wire::interpret_ack(status, &text)
    }
}
