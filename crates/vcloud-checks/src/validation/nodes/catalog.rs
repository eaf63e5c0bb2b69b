//! Catalogs, catalog items and media

use crate::domain::{Catalog, CatalogItem, Media};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Shared by catalogs and admin catalogs
    pub fn check_catalog(&mut self, ctx: &ValidationContext, catalog: &Catalog) -> CheckResult {
        self.optional_node(ctx, "owner", catalog.owner.as_ref())?;
        self.walk_each(ctx, "catalogItems", &catalog.catalog_items)?;

        self.check_entity(ctx, &catalog.entity)
    }

    pub fn check_catalog_item(&mut self, ctx: &ValidationContext, item: &CatalogItem) -> CheckResult {
        self.optional_node(ctx, "entity", item.item.as_ref())?;

        self.check_entity(ctx, &item.entity)
    }

    pub fn check_media(&mut self, ctx: &ValidationContext, media: &Media) -> CheckResult {
        let tables = self.tables();
        self.required_enumeration(ctx, "imageType", media.image_type.as_deref(), &tables.image_types)?;
        self.required_non_negative(ctx, "size", media.size.as_ref())?;
        self.optional_node(ctx, "owner", media.owner.as_ref())?;

        self.check_resource_entity(ctx, &media.resource_entity)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::*;
    use crate::tables::ConstraintTables;
    use crate::validation::base::{Check, Checker, ValidationContext};
    use crate::validation::error::{Violation, ViolationKind};
    use crate::validation::sink::Collector;

    fn violations<T: Check>(node: &T) -> Vec<Violation> {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let _ = node.check(&mut Checker::new(&tables, &mut sink), &ValidationContext::new(node.kind()));
        sink.into_violations()
    }

    #[test]
    fn test_catalog_items_and_owner() {
        let catalog = Catalog {
            entity: Entity::named("public"),
            owner: Some(Owner {
                user: Some(Reference {
                    id: Some("urn:vcloud:user:broken".to_string()),
                    ..Reference::to("https://vcd.example.com/api/admin/user/7")
                }),
                ..Owner::default()
            }),
            catalog_items: vec![
                Reference::to("https://vcd.example.com/api/catalogItem/1"),
                Reference::default(),
            ],
            is_published: Some(true),
        };

        let found = violations(&catalog);
        let paths: Vec<&str> = found.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.owner.user.id", "$.catalogItems[1].href"]);
        assert_eq!(found[0].node, NodeKind::Reference);
        assert_eq!(found[1].kind, ViolationKind::MalformedReference);
    }

    #[test]
    fn test_catalog_item_entity_reference() {
        let item = CatalogItem {
            entity: Entity::named("ubuntu"),
            item: Some(Reference {
                media_type: Some("application/vnd.vmware.vcloud.vAppTemplate+xml".to_string()),
                ..Reference::default()
            }),
        };

        let found = violations(&item);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "$.entity.href");
    }

    #[test]
    fn test_media_requires_image_type_and_size() {
        let media = Media {
            resource_entity: ResourceEntity {
                entity: Entity::named("installer.iso"),
                ..ResourceEntity::default()
            },
            image_type: Some("dvd".to_string()),
            ..Media::default()
        };

        let found = violations(&media);
        let fields: Vec<&str> = found.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["imageType", "size"]);
        assert_eq!(found[1].kind, ViolationKind::MissingRequiredField);
        assert!(found.iter().all(|v| v.node == NodeKind::Media));
    }

    #[test]
    fn test_admin_catalog_uses_catalog_rules() {
        let node = Node::AdminCatalog(Catalog {
            entity: Entity::default(),
            ..Catalog::default()
        });

        let found = violations(&node);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "name");
        assert_eq!(found[0].node, NodeKind::AdminCatalog);
    }
}
