//! Repository Layer - Core Traits
//!
//! Abstract interface for the named collections the console edits.
//! Implementations can be in-memory, SQL, a proxy to a real firewall, etc.

use async_trait::async_trait;
use fwconsole_core::{EntityKind, NamedEntity, Scope};

use crate::domain::DomainResult;

/// Named collections addressed by kind and scope
///
/// Names are the identity: renames are old/new pairs and collisions are
/// reported as `DomainError::Conflict`.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Entries in insertion order
    async fn list(&self, kind: EntityKind, scope: &Scope) -> DomainResult<Vec<NamedEntity>>;

    /// Add a new entry; `tenant` is the owning company
    async fn create(&self, kind: EntityKind, scope: &Scope, name: &str, tenant: &str) -> DomainResult<NamedEntity>;

    /// Rename an entry in place
    async fn rename(&self, kind: EntityKind, scope: &Scope, old_name: &str, new_name: &str) -> DomainResult<NamedEntity>;

    /// Remove an entry (and, for localities, everything inside it)
    async fn delete(&self, kind: EntityKind, scope: &Scope, name: &str) -> DomainResult<()>;
}
