//! Creation Form Validation
//!
//! The only checks the console performs locally: a non-blank name and a
//! selected scope.

use crate::error::ValidationError;
use crate::model::Scope;

/// Trimmed name ready to send, or the reason to refuse
pub fn validate_name(draft: &str, scope: Option<&Scope>) -> Result<String, ValidationError> {
    let name = draft.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if scope.is_none() {
        return Err(ValidationError::NoScope);
    }
    Ok(name.to_string())
}
