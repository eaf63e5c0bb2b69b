//! Resources, entities, tasks, files and metadata

use crate::domain::{
    Entity, File, Link, Metadata, MetadataEntry, MetadataValue, Owner, Resource, ResourceEntity, Task, TaskError,
};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::primitives::check_range;
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Root of the chain; the locator itself carries no rule
    pub fn check_resource(&mut self, ctx: &ValidationContext, resource: &Resource) -> CheckResult {
        self.media_type(ctx, resource.media_type.as_deref())?;
        self.walk_each(ctx, "links", &resource.links)
    }

    pub fn check_link(&mut self, ctx: &ValidationContext, link: &Link) -> CheckResult {
        let tables = self.tables();
        self.required_enumeration(ctx, "rel", link.rel.as_deref(), &tables.link_relations)?;

        self.check_reference(ctx, &link.reference)
    }

    /// Description and id are free-form
    pub fn check_entity(&mut self, ctx: &ValidationContext, entity: &Entity) -> CheckResult {
        self.require(ctx, "name", entity.name.as_deref())?;
        self.walk_each(ctx, "tasks", &entity.tasks)?;

        self.check_resource(ctx, &entity.resource)
    }

    pub fn check_resource_entity(&mut self, ctx: &ValidationContext, resource_entity: &ResourceEntity) -> CheckResult {
        self.walk_each(ctx, "files", &resource_entity.files)?;

        self.check_entity(ctx, &resource_entity.entity)
    }

    pub fn check_task(&mut self, ctx: &ValidationContext, task: &Task) -> CheckResult {
        let tables = self.tables();
        self.required_enumeration(ctx, "status", task.status.as_deref(), &tables.task_statuses)?;

        self.optional_node(ctx, "owner", task.owner.as_ref())?;
        self.optional_node(ctx, "error", task.error.as_ref())?;
        self.optional_node(ctx, "user", task.user.as_ref())?;
        self.optional_node(ctx, "org", task.org.as_ref())?;
        self.apply_opt(ctx, "progress", task.progress, |progress| check_range(progress, 0, 100))?;

        self.check_entity(ctx, &task.entity)
    }

    /// Vendor code and stack trace are carried through unchecked
    pub fn check_task_error(&mut self, ctx: &ValidationContext, error: &TaskError) -> CheckResult {
        self.require(ctx, "message", error.message.as_deref())?;
        self.require(ctx, "majorErrorCode", error.major_error_code.as_ref())?;
        self.require(ctx, "minorErrorCode", error.minor_error_code.as_deref())?;
        Ok(())
    }

    pub fn check_file(&mut self, ctx: &ValidationContext, file: &File) -> CheckResult {
        self.non_negative(ctx, "size", file.size)?;
        self.non_negative(ctx, "bytesTransferred", file.bytes_transferred)?;

        self.check_entity(ctx, &file.entity)
    }

    pub fn check_metadata(&mut self, ctx: &ValidationContext, metadata: &Metadata) -> CheckResult {
        self.walk_each(ctx, "metadataEntries", &metadata.metadata_entries)?;

        self.check_resource(ctx, &metadata.resource)
    }

    pub fn check_metadata_entry(&mut self, ctx: &ValidationContext, entry: &MetadataEntry) -> CheckResult {
        self.require(ctx, "key", entry.key.as_deref())?;
        self.require(ctx, "value", entry.value.as_deref())?;

        self.check_resource(ctx, &entry.resource)
    }

    pub fn check_metadata_value(&mut self, ctx: &ValidationContext, value: &MetadataValue) -> CheckResult {
        self.require(ctx, "value", value.value.as_deref())?;

        self.check_resource(ctx, &value.resource)
    }

    pub fn check_owner(&mut self, ctx: &ValidationContext, owner: &Owner) -> CheckResult {
        self.optional_node(ctx, "user", owner.user.as_ref())?;

        self.check_resource(ctx, &owner.resource)
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
    fn test_task_progress_out_of_range() {
        let task = Task {
            entity: Entity::named("deploy"),
            status: Some("success".to_string()),
            progress: Some(150),
            ..Task::default()
        };

        let found = violations(&task);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "progress");
        assert_eq!(
            found[0].kind,
            ViolationKind::OutOfRangeValue {
                lower: 0.0,
                upper: Some(100.0)
            }
        );
    }

    #[test]
    fn test_task_violations_keep_concrete_kind() {
        // The missing name is reported by the entity level
        let task = Task {
            status: Some("running".to_string()),
            ..Task::default()
        };

        let found = violations(&task);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "name");
        assert_eq!(found[0].node, NodeKind::Task);
    }

    #[test]
    fn test_task_error_fields_are_required() {
        let task = Task {
            entity: Entity::named("deploy"),
            status: Some("error".to_string()),
            error: Some(TaskError {
                message: Some("boom".to_string()),
                ..TaskError::default()
            }),
            ..Task::default()
        };

        let found = violations(&task);
        let paths: Vec<&str> = found.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.error.majorErrorCode", "$.error.minorErrorCode"]);
        assert!(found.iter().all(|v| v.node == NodeKind::TaskError));
    }

    #[test]
    fn test_own_fields_reported_before_supertype() {
        let file = File {
            entity: Entity {
                resource: Resource {
                    media_type: Some("application/unknown".to_string()),
                    ..Resource::default()
                },
                ..Entity::default()
            },
            size: Some(-5),
            ..File::default()
        };

        let fields: Vec<String> = violations(&file).into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["size", "name", "type"]);
    }

    #[test]
    fn test_nested_tasks_are_walked() {
        let entity = Entity {
            tasks: vec![
                Task {
                    entity: Entity::named("ok"),
                    status: Some("queued".to_string()),
                    ..Task::default()
                },
                Task {
                    entity: Entity::named("bad"),
                    status: Some("paused".to_string()),
                    ..Task::default()
                },
            ],
            ..Entity::named("vapp")
        };

        let found = violations(&entity);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "$.tasks[1].status");
        assert!(found[0]
            .kind
            .admissible()
            .is_some_and(|values| values.iter().any(|v| v == "queued")));
    }

    #[test]
    fn test_metadata_entries() {
        let metadata = Metadata {
            metadata_entries: vec![MetadataEntry {
                key: Some("owner".to_string()),
                ..MetadataEntry::default()
            }],
            ..Metadata::default()
        };

        let found = violations(&metadata);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "$.metadataEntries[0].value");
        assert_eq!(found[0].node, NodeKind::MetadataEntry);
    }
}
