//! Console Models
//!
//! Data structures matching backend entities, plus the per-kind endpoint table.

use serde::{Deserialize, Serialize};

/// A named entity as the backend sends it (`{ "nome": ... }`).
///
/// Localities, interfaces and objects all share this shape; the name is the
/// identity, so a rename is always an old-name/new-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    #[serde(rename = "nome")]
    pub name: String,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The parent scope a list is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Kinds that are not owned by a locality (the localities themselves)
    Global,
    /// A selected locality
    Locality(String),
}

impl Scope {
    /// Locality name sent as `localidade`, if any
    pub fn locality(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Locality(name) => Some(name),
        }
    }
}

/// Endpoint names below the API base for one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub create: &'static str,
    pub rename: &'static str,
    pub delete: &'static str,
}

/// Entity kinds managed by an editable list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Locality,
    Interface,
    Object,
}

impl EntityKind {
    /// Order of the section tabs
    pub const ALL: [EntityKind; 3] = [EntityKind::Locality, EntityKind::Interface, EntityKind::Object];

    /// Endpoint serving the parent scopes (localities)
    pub const SCOPES_ENDPOINT: &'static str = "getLocalidade";

    pub fn endpoints(self) -> Endpoints {
        match self {
            EntityKind::Locality => Endpoints {
                list: Self::SCOPES_ENDPOINT,
                create: "sendNewLocalidade",
                rename: "updateLocalidade",
                delete: "deleteLocalidade",
            },
            EntityKind::Interface => Endpoints {
                list: "getInterfaces",
                create: "sendNewInterface",
                rename: "updateInterface",
                delete: "deleteInterface",
            },
            EntityKind::Object => Endpoints {
                list: "getObjetos",
                create: "sendNewObjeto",
                rename: "updateObjeto",
                delete: "deleteObjeto",
            },
        }
    }

    /// Whether lists of this kind live inside a locality
    pub fn is_scoped(self) -> bool {
        !matches!(self, EntityKind::Locality)
    }

    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Locality => "Localities",
            EntityKind::Interface => "Interfaces",
            EntityKind::Object => "Objects",
        }
    }

    /// Lowercase noun used in messages ("interface eth0 added")
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Locality => "locality",
            EntityKind::Interface => "interface",
            EntityKind::Object => "object",
        }
    }

    /// Look a kind up by its list endpoint
    pub fn from_list_endpoint(endpoint: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.endpoints().list == endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entity_wire_name() {
        let json = serde_json::to_string(&NamedEntity::new("eth0")).unwrap();
        assert_eq!(json, r#"{"nome":"eth0"}"#);

        let parsed: Vec<NamedEntity> = serde_json::from_str(r#"[{"nome":"SP-01"},{"nome":"RJ-02"}]"#).unwrap();
        assert_eq!(parsed, vec![NamedEntity::new("SP-01"), NamedEntity::new("RJ-02")]);
    }

    #[test]
    fn test_interface_endpoints() {
        let ep = EntityKind::Interface.endpoints();
        assert_eq!(ep.list, "getInterfaces");
        assert_eq!(ep.create, "sendNewInterface");
        assert_eq!(ep.rename, "updateInterface");
        assert_eq!(ep.delete, "deleteInterface");
    }

    #[test]
    fn test_only_localities_are_unscoped() {
        assert!(!EntityKind::Locality.is_scoped());
        assert!(EntityKind::Interface.is_scoped());
        assert!(EntityKind::Object.is_scoped());
        assert_eq!(EntityKind::Locality.endpoints().list, EntityKind::SCOPES_ENDPOINT);
    }

    #[test]
    fn test_from_list_endpoint() {
        assert_eq!(EntityKind::from_list_endpoint("getObjetos"), Some(EntityKind::Object));
        assert_eq!(EntityKind::from_list_endpoint("getNothing"), None);
    }

    #[test]
    fn test_scope_locality() {
        assert_eq!(Scope::Global.locality(), None);
        assert_eq!(Scope::Locality("SP-01".into()).locality(), Some("SP-01"));
    }
}
