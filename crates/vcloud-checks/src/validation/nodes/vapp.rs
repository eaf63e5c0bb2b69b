//! vApps, virtual machines and vApp templates
//!
//! vApps nest vApps and templates nest templates to any depth; recursion
//! follows the document.

use crate::domain::{AbstractVApp, VApp, VAppTemplate, Vm};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    pub fn check_abstract_vapp(&mut self, ctx: &ValidationContext, vapp: &AbstractVApp) -> CheckResult {
        self.optional_node(ctx, "vAppParent", vapp.vapp_parent.as_ref())?;
        self.walk_each(ctx, "sections", &vapp.sections)?;

        self.check_resource_entity(ctx, &vapp.resource_entity)
    }

    pub fn check_vapp(&mut self, ctx: &ValidationContext, vapp: &VApp) -> CheckResult {
        self.optional_node(ctx, "owner", vapp.owner.as_ref())?;

        if let Some(children) = &vapp.children {
            let children_ctx = ctx.child("children");
            self.walk_each(&children_ctx, "vApps", &children.vapps)?;
            self.walk_each(&children_ctx, "vms", &children.vms)?;
        }

        self.check_abstract_vapp(ctx, &vapp.abstract_vapp)
    }

    /// The OVF environment is opaque
    pub fn check_vm(&mut self, ctx: &ValidationContext, vm: &Vm) -> CheckResult {
        self.check_abstract_vapp(ctx, &vm.abstract_vapp)
    }

    /// Name, tasks and files are covered by the entity levels
    pub fn check_vapp_template(&mut self, ctx: &ValidationContext, template: &VAppTemplate) -> CheckResult {
        self.optional_node(ctx, "owner", template.owner.as_ref())?;
        self.walk_each(ctx, "children", &template.children)?;
        self.walk_each(ctx, "sections", &template.sections)?;

        self.check_resource_entity(ctx, &template.resource_entity)
    }
}
