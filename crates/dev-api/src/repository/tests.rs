//! Repository Tests
//!
//! Tests for MemoryCatalog naming rules and scope handling.

#[cfg(test)]
mod tests {
    use crate::domain::DomainError;
    use crate::repository::{Catalog, MemoryCatalog};
    use fwconsole_core::{EntityKind, NamedEntity, Scope};

    fn sp01() -> Scope {
        Scope::Locality("SP-01".to_string())
    }

    fn names(list: Vec<NamedEntity>) -> Vec<String> {
        list.into_iter().map(|e| e.name).collect()
    }

    #[tokio::test]
    async fn test_seeded_lists() {
        let catalog = MemoryCatalog::seeded();

        let localities = catalog.list(EntityKind::Locality, &Scope::Global).await.unwrap();
        assert_eq!(names(localities), vec!["SP-01", "RJ-02"]);

        let interfaces = catalog.list(EntityKind::Interface, &sp01()).await.unwrap();
        assert_eq!(names(interfaces), vec!["eth0", "eth1"]);
    }

    #[tokio::test]
    async fn test_empty_locality_lists_nothing() {
        let catalog = MemoryCatalog::seeded();
        let objects = catalog.list(EntityKind::Object, &Scope::Locality("RJ-02".into())).await.unwrap();
        assert!(objects.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_locality_not_found() {
        let catalog = MemoryCatalog::seeded();
        let err = catalog.list(EntityKind::Interface, &Scope::Locality("XX-99".into())).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("locality XX-99".into()));
    }

    #[tokio::test]
    async fn test_scope_must_match_kind() {
        let catalog = MemoryCatalog::seeded();
        let err = catalog.list(EntityKind::Interface, &Scope::Global).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        let err = catalog.list(EntityKind::Locality, &sp01()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_create_appends_and_rejects_duplicates() {
        let catalog = MemoryCatalog::seeded();
        let created = catalog.create(EntityKind::Interface, &sp01(), " eth2 ", "acme").await.unwrap();
        assert_eq!(created.name, "eth2");

        let err = catalog.create(EntityKind::Interface, &sp01(), "eth2", "acme").await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("interface eth2 already exists".into()));

        let list = catalog.list(EntityKind::Interface, &sp01()).await.unwrap();
        assert_eq!(names(list), vec!["eth0", "eth1", "eth2"]);
    }

    #[tokio::test]
    async fn test_create_blank_is_invalid() {
        let catalog = MemoryCatalog::seeded();
        let err = catalog.create(EntityKind::Interface, &sp01(), "  ", "acme").await.unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[tokio::test]
    async fn test_rename_conflict() {
        let catalog = MemoryCatalog::seeded();
        let err = catalog.rename(EntityKind::Interface, &sp01(), "eth0", "eth1").await.unwrap_err();
        assert_eq!(err.status(), 409);

        let renamed = catalog.rename(EntityKind::Interface, &sp01(), "eth0", "lan0").await.unwrap();
        assert_eq!(renamed.name, "lan0");
        let list = catalog.list(EntityKind::Interface, &sp01()).await.unwrap();
        assert_eq!(names(list), vec!["lan0", "eth1"]);
    }

    #[tokio::test]
    async fn test_rename_missing_not_found() {
        let catalog = MemoryCatalog::seeded();
        let err = catalog.rename(EntityKind::Interface, &sp01(), "eth9", "eth10").await.unwrap_err();
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_locality_rename_moves_children() {
        let catalog = MemoryCatalog::seeded();
        catalog.rename(EntityKind::Locality, &Scope::Global, "SP-01", "SP-03").await.unwrap();

        let moved = catalog.list(EntityKind::Interface, &Scope::Locality("SP-03".into())).await.unwrap();
        assert_eq!(names(moved), vec!["eth0", "eth1"]);
        assert!(catalog.list(EntityKind::Interface, &sp01()).await.is_err());
    }

    #[tokio::test]
    async fn test_locality_delete_drops_children() {
        let catalog = MemoryCatalog::seeded();
        catalog.delete(EntityKind::Locality, &Scope::Global, "SP-01").await.unwrap();
        catalog.create(EntityKind::Locality, &Scope::Global, "SP-01", "acme").await.unwrap();

        let interfaces = catalog.list(EntityKind::Interface, &sp01()).await.unwrap();
        assert!(interfaces.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_not_found() {
        let catalog = MemoryCatalog::new();
        let err = catalog.delete(EntityKind::Locality, &Scope::Global, "SP-01").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("locality SP-01".into()));
    }
}
