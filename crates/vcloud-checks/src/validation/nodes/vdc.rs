//! Virtual datacenters and their capacities

use crate::domain::{AdminVdc, Capacity, ComputeCapacity, Vdc};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::primitives::check_fraction;
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Capabilities only list hardware versions and are not inspected
    pub fn check_vdc(&mut self, ctx: &ValidationContext, vdc: &Vdc) -> CheckResult {
        let tables = self.tables();
        self.required_enumeration(
            ctx,
            "allocationModel",
            vdc.allocation_model.as_deref(),
            &tables.allocation_models,
        )?;
        self.require_node(ctx, "storageCapacity", vdc.storage_capacity.as_ref())?;
        self.require_node(ctx, "computeCapacity", vdc.compute_capacity.as_ref())?;
        self.required_non_negative(ctx, "nicQuota", vdc.nic_quota.as_ref())?;
        self.required_non_negative(ctx, "networkQuota", vdc.network_quota.as_ref())?;

        self.non_negative(ctx, "vmQuota", vdc.vm_quota)?;

        self.walk_each(ctx, "resourceEntities", &vdc.resource_entities)?;
        self.walk_each(ctx, "availableNetworks", &vdc.available_networks)?;

        self.check_entity(ctx, &vdc.entity)
    }

    pub fn check_admin_vdc(&mut self, ctx: &ValidationContext, vdc: &AdminVdc) -> CheckResult {
        self.apply_opt(ctx, "resourceGuaranteedMemory", vdc.resource_guaranteed_memory, check_fraction)?;
        self.apply_opt(ctx, "resourceGuaranteedCpu", vdc.resource_guaranteed_cpu, check_fraction)?;
        self.non_negative(ctx, "vCpuInMhz", vdc.vcpu_in_mhz)?;
        self.optional_node(ctx, "networkPoolReference", vdc.network_pool_reference.as_ref())?;
        self.optional_node(ctx, "providerVdcReference", vdc.provider_vdc_reference.as_ref())?;

        self.check_vdc(ctx, &vdc.vdc)
    }

    pub fn check_capacity(&mut self, ctx: &ValidationContext, capacity: &Capacity) -> CheckResult {
        self.require(ctx, "units", capacity.units.as_deref())?;
        self.required_non_negative(ctx, "limit", capacity.limit.as_ref())?;

        self.non_negative(ctx, "allocated", capacity.allocated)?;
        self.non_negative(ctx, "used", capacity.used)?;
        self.non_negative(ctx, "overhead", capacity.overhead)
    }

    pub fn check_compute_capacity(&mut self, ctx: &ValidationContext, capacity: &ComputeCapacity) -> CheckResult {
        self.require_node(ctx, "cpu", capacity.cpu.as_ref())?;
        self.require_node(ctx, "memory", capacity.memory.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::*;
    use crate::tables::ConstraintTables;
    use crate::validation::base::{Check, Checker, ValidationContext};
    use crate::validation::error::{Violation, ViolationKind};
    use crate::validation::sink::{Collector, FailFast};

    fn violations<T: Check>(node: &T) -> Vec<Violation> {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let _ = node.check(&mut Checker::new(&tables, &mut sink), &ValidationContext::new(node.kind()));
        sink.into_violations()
    }

    fn capacity(limit: i64) -> Capacity {
        Capacity {
            units: Some("MB".to_string()),
            limit: Some(limit),
            ..Capacity::default()
        }
    }

    fn vdc() -> Vdc {
        Vdc {
            entity: Entity::named("vdc-1"),
            allocation_model: Some("AllocationPool".to_string()),
            storage_capacity: Some(capacity(1024)),
            compute_capacity: Some(ComputeCapacity {
                cpu: Some(Capacity {
                    units: Some("MHz".to_string()),
                    ..capacity(2000)
                }),
                memory: Some(capacity(4096)),
            }),
            nic_quota: Some(0),
            network_quota: Some(10),
            ..Vdc::default()
        }
    }

    #[test]
    fn test_valid_vdc() {
        assert!(violations(&vdc()).is_empty());
    }

    #[test]
    fn test_missing_compute_capacity_is_not_traversed() {
        let vdc = Vdc {
            compute_capacity: None,
            nic_quota: Some(-1),
            ..vdc()
        };

        let found = violations(&vdc);
        let paths: Vec<&str> = found.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.computeCapacity", "$.nicQuota"]);
        assert_eq!(found[0].kind, ViolationKind::MissingRequiredField);
    }

    #[test]
    fn test_nested_capacity_violations() {
        let vdc = Vdc {
            compute_capacity: Some(ComputeCapacity {
                cpu: Some(Capacity {
                    used: Some(-10),
                    ..capacity(1000)
                }),
                memory: None,
            }),
            ..vdc()
        };

        let found = violations(&vdc);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, "$.computeCapacity.cpu.used");
        assert_eq!(found[0].node, NodeKind::Capacity);
        assert_eq!(found[1].path, "$.computeCapacity.memory");
        assert_eq!(found[1].node, NodeKind::ComputeCapacity);
    }

    #[test]
    fn test_admin_vdc_guarantees_are_fractions() {
        let admin = AdminVdc {
            vdc: vdc(),
            resource_guaranteed_memory: Some(1.5),
            resource_guaranteed_cpu: Some(0.25),
            vcpu_in_mhz: Some(-1),
            ..AdminVdc::default()
        };

        let found = violations(&admin);
        let fields: Vec<&str> = found.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["resourceGuaranteedMemory", "vCpuInMhz"]);
        assert!(found.iter().all(|v| v.node == NodeKind::AdminVdc));
    }

    #[test]
    fn test_invalid_allocation_model_fails_fast() {
        let vdc = Vdc {
            allocation_model: Some("AllocationFlex".to_string()),
            network_quota: None,
            ..vdc()
        };

        let tables = ConstraintTables::default();
        let mut sink = FailFast::new();
        let result = vdc.check(
            &mut Checker::new(&tables, &mut sink),
            &ValidationContext::new(NodeKind::Vdc),
        );
        assert!(result.is_err());
        assert_eq!(sink.first().map(|v| v.field.as_str()), Some("allocationModel"));
    }
}
