//! Domain Layer
//!
//! Errors and naming rules of the development backend. Entities themselves
//! are the shared `NamedEntity` from the core crate.

mod error;

pub use error::{DomainError, DomainResult};

use fwconsole_core::{EntityKind, Scope};

/// Check that `scope` fits `kind`: localities are global, everything else
/// lives inside a locality.
pub fn check_scope(kind: EntityKind, scope: &Scope) -> DomainResult<()> {
    match (kind.is_scoped(), scope) {
        (true, Scope::Global) => Err(DomainError::InvalidInput("localidade is required".to_string())),
        (false, Scope::Locality(_)) => Err(DomainError::InvalidInput(format!(
            "{} is not scoped by locality",
            kind.noun()
        ))),
        _ => Ok(()),
    }
}

/// Trimmed name, rejecting blanks
pub fn clean_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}
