//! In-memory Catalog
//!
//! Process-local storage for the development backend. State is lost on
//! restart; `seeded()` gives a small demo data set.

use std::collections::HashMap;

use async_trait::async_trait;
use fwconsole_core::{EntityKind, NamedEntity, Scope};
use log::info;
use tokio::sync::Mutex;

use super::traits::Catalog;
use crate::domain::{check_scope, clean_name, DomainError, DomainResult};

#[derive(Debug, Default)]
struct State {
    localities: Vec<String>,
    /// (kind, locality) -> names
    children: HashMap<(EntityKind, String), Vec<String>>,
}

impl State {
    fn collection_mut(&mut self, kind: EntityKind, scope: &Scope) -> DomainResult<&mut Vec<String>> {
        check_scope(kind, scope)?;
        match scope {
            Scope::Global => Ok(&mut self.localities),
            Scope::Locality(locality) => {
                if !self.localities.iter().any(|l| l == locality) {
                    return Err(DomainError::NotFound(format!("locality {}", locality)));
                }
                Ok(self.children.entry((kind, locality.clone())).or_default())
            }
        }
    }

    fn move_children(&mut self, old_locality: &str, new_locality: &str) {
        for kind in EntityKind::ALL.into_iter().filter(|k| k.is_scoped()) {
            if let Some(names) = self.children.remove(&(kind, old_locality.to_string())) {
                self.children.insert((kind, new_locality.to_string()), names);
            }
        }
    }

    fn drop_children(&mut self, locality: &str) {
        self.children.retain(|(_, owner), _| owner != locality);
    }
}

/// Catalog kept behind an async mutex
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    state: Mutex<State>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo data: two sites with a few interfaces and objects
    pub fn seeded() -> Self {
        let mut state = State {
            localities: vec!["SP-01".to_string(), "RJ-02".to_string()],
            ..Default::default()
        };
        let seed: [(EntityKind, &str, &[&str]); 3] = [
            (EntityKind::Interface, "SP-01", &["eth0", "eth1"]),
            (EntityKind::Interface, "RJ-02", &["wan0"]),
            (EntityKind::Object, "SP-01", &["web-server", "dns-cluster"]),
        ];
        for (kind, locality, names) in seed {
            state
                .children
                .insert((kind, locality.to_string()), names.iter().map(|n| n.to_string()).collect());
        }
        Self { state: Mutex::new(state) }
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list(&self, kind: EntityKind, scope: &Scope) -> DomainResult<Vec<NamedEntity>> {
        let mut state = self.state.lock().await;
        let names = state.collection_mut(kind, scope)?;
        Ok(names.iter().map(|n| NamedEntity::new(n.clone())).collect())
    }

    async fn create(&self, kind: EntityKind, scope: &Scope, name: &str, tenant: &str) -> DomainResult<NamedEntity> {
        let name = clean_name(name)?;
        let mut state = self.state.lock().await;
        let names = state.collection_mut(kind, scope)?;
        if names.contains(&name) {
            return Err(DomainError::Conflict(format!("{} {} already exists", kind.noun(), name)));
        }
        names.push(name.clone());
        info!("[{}] created {} {} in {:?}", tenant, kind.noun(), name, scope);
        Ok(NamedEntity::new(name))
    }

    async fn rename(&self, kind: EntityKind, scope: &Scope, old_name: &str, new_name: &str) -> DomainResult<NamedEntity> {
        let new_name = clean_name(new_name)?;
        let mut state = self.state.lock().await;
        {
            let names = state.collection_mut(kind, scope)?;
            let position = names
                .iter()
                .position(|n| n == old_name)
                .ok_or_else(|| DomainError::NotFound(format!("{} {}", kind.noun(), old_name)))?;
            if new_name != old_name && names.contains(&new_name) {
                return Err(DomainError::Conflict(format!("{} {} already exists", kind.noun(), new_name)));
            }
            names[position] = new_name.clone();
        }
        if kind == EntityKind::Locality {
            state.move_children(old_name, &new_name);
        }
        info!("renamed {} {} to {} in {:?}", kind.noun(), old_name, new_name, scope);
        Ok(NamedEntity::new(new_name))
    }

    async fn delete(&self, kind: EntityKind, scope: &Scope, name: &str) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        {
            let names = state.collection_mut(kind, scope)?;
            let position = names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| DomainError::NotFound(format!("{} {}", kind.noun(), name)))?;
            names.remove(position);
        }
        if kind == EntityKind::Locality {
            state.drop_children(name);
        }
        info!("deleted {} {} from {:?}", kind.noun(), name, scope);
        Ok(())
    }
}
