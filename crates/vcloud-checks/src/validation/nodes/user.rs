//! Users and groups

use crate::domain::{Group, User};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::primitives::check_email_address;
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Telephone and IM handles are free-form
    pub fn check_user(&mut self, ctx: &ValidationContext, user: &User) -> CheckResult {
        self.apply_opt(ctx, "emailAddress", user.email_address.as_deref(), check_email_address)?;
        self.apply_opt(ctx, "alertEmail", user.alert_email.as_deref(), check_email_address)?;
        self.non_negative(ctx, "storedVmQuota", user.stored_vm_quota)?;
        self.non_negative(ctx, "deployedVmQuota", user.deployed_vm_quota)?;
        self.optional_node(ctx, "role", user.role.as_ref())?;

        self.walk_each(ctx, "groups", &user.groups)?;

        self.check_entity(ctx, &user.entity)
    }

    pub fn check_group(&mut self, ctx: &ValidationContext, group: &Group) -> CheckResult {
        self.optional_node(ctx, "role", group.role.as_ref())?;
        self.walk_each(ctx, "usersList", &group.users_list)?;

        self.check_entity(ctx, &group.entity)
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
    fn test_user_addresses_and_quotas() {
        let user = User {
            entity: Entity::named("jdoe"),
            email_address: Some("jdoe@example.com".to_string()),
            alert_email: Some("jdoe at example".to_string()),
            telephone: Some("not checked".to_string()),
            stored_vm_quota: Some(-2),
            deployed_vm_quota: Some(5),
            ..User::default()
        };

        let found = violations(&user);
        let fields: Vec<&str> = found.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["alertEmail", "storedVmQuota"]);
        assert_eq!(found[0].kind, ViolationKind::MalformedAddress);
    }

    #[test]
    fn test_user_group_references() {
        let user = User {
            entity: Entity::named("jdoe"),
            groups: vec![Reference {
                media_type: Some("application/vnd.vmware.admin.group+xml".to_string()),
                ..Reference::to("https://vcd.example.com/api/admin/group/1")
            }],
            ..User::default()
        };
        assert!(violations(&user).is_empty());
    }

    #[test]
    fn test_group_users_list() {
        let group = Group {
            entity: Entity::named("ops"),
            users_list: vec![Reference::default()],
            role: Some(Reference::to("https://vcd.example.com/api/admin/role/1")),
            ..Group::default()
        };

        let found = violations(&group);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "$.usersList[0].href");
        assert_eq!(found[0].node, NodeKind::Reference);
    }
}
