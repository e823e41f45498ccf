//! Wire Contract
//!
//! Request bodies for the `/api/` endpoints and the rules that turn an HTTP
//! status plus body into a result. Shared by the client and the dev backend.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::model::NamedEntity;

// ========================
// Request Bodies
// ========================

/// `POST sendNew*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBody {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidade: Option<String>,
    #[serde(rename = "empresa")]
    pub tenant: String,
}

/// `POST update*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameBody {
    #[serde(rename = "oldName")]
    pub old_name: String,
    #[serde(rename = "newName")]
    pub new_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidade: Option<String>,
}

/// `POST delete*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBody {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localidade: Option<String>,
}

/// Query string of scoped list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeQuery {
    #[serde(default)]
    pub localidade: Option<String>,
}

/// Acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: Some(true), message: Some(message.into()) }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: Some(false), message: Some(message.into()) }
    }
}

// ========================
// Response Interpretation
// ========================

pub const CONFLICT: u16 = 409;

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error for a non-2xx response; the body's `message` wins over the fallback
fn failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Ack>(body)
        .ok()
        .and_then(|ack| ack.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", status));

    if status == CONFLICT {
        ApiError::Conflict(message)
    } else {
        ApiError::Status { status, message }
    }
}

/// Interpret the response of a list endpoint
pub fn interpret_list(status: u16, body: &str) -> ApiResult<Vec<NamedEntity>> {
    if !is_success(status) {
        return Err(failure(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret the response of a mutating endpoint
///
/// Any 2xx body counts as success unless it is an object with
/// `success: false`. Bodies that are not an acknowledgement (`OK`, `true`,
/// nothing) are read as an empty one.
pub fn interpret_ack(status: u16, body: &str) -> ApiResult<Ack> {
    if !is_success(status) {
        return Err(failure(status, body));
    }
    let ack = serde_json::from_str::<Ack>(body).unwrap_or_default();
    if ack.success == Some(false) {
        let message = ack
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "the server rejected the request".to_string());
        return Err(ApiError::Rejected(message));
    }
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_wire_names() {
        let body = CreateBody {
            name: "eth1".into(),
            localidade: Some("SP-01".into()),
            tenant: "empresa_teste".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "nome": "eth1", "localidade": "SP-01", "empresa": "empresa_teste" }));
    }

    #[test]
    fn test_rename_body_omits_global_scope() {
        let body = RenameBody { old_name: "SP-01".into(), new_name: "SP-02".into(), localidade: None };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "oldName": "SP-01", "newName": "SP-02" }));
    }

    #[test]
    fn test_list_success() {
        let list = interpret_list(200, r#"[{"nome":"eth0"}]"#).unwrap();
        assert_eq!(list, vec![NamedEntity::new("eth0")]);
        assert!(interpret_list(200, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_list_non_2xx_is_failure() {
        let err = interpret_list(500, "").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: "request failed with status 500".into() });
    }

    #[test]
    fn test_list_garbage_is_decode_error() {
        assert!(matches!(interpret_list(200, "<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_conflict_carries_message() {
        let err = interpret_ack(409, r#"{"message":"interface eth1 already exists"}"#).unwrap_err();
        assert_eq!(err, ApiError::Conflict("interface eth1 already exists".into()));
    }

    #[test]
    fn test_status_error_uses_message_field() {
        let err = interpret_ack(400, r#"{"success":false,"message":"locality required"}"#).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "locality required".into() });
    }

    #[test]
    fn test_success_false_on_200_is_rejected() {
        let err = interpret_ack(200, r#"{"success":false,"message":"interface in use"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("interface in use".into()));

        let err = interpret_ack(200, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("the server rejected the request".into()));
    }

    #[test]
    fn test_ack_variants_that_succeed() {
        assert_eq!(interpret_ack(200, "").unwrap(), Ack::default());
        assert_eq!(interpret_ack(201, r#"{"success":true,"message":"ok"}"#).unwrap(), Ack::ok("ok"));
        assert_eq!(interpret_ack(200, r#"{"message":"saved"}"#).unwrap().message.as_deref(), Some("saved"));
    }

    #[test]
    fn test_ack_non_object_bodies_succeed() {
        for body in ["OK", "true", "null", "[]", "<html>done</html>"] {
            assert_eq!(interpret_ack(200, body).unwrap(), Ack::default(), "body {:?}", body);
        }
        assert_eq!(interpret_ack(204, "  ").unwrap(), Ack::default());
    }
}
