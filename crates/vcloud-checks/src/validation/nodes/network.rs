//! Networks and their IP configuration

use crate::domain::{IpRange, IpScope, Network, NetworkConfiguration, RouterInfo, SyslogServerSettings};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::error::ViolationKind;
use crate::validation::primitives::check_ip_address;
use crate::validation::sink::{CheckResult, ViolationSink};
use std::net::IpAddr;

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    pub fn check_network(&mut self, ctx: &ValidationContext, network: &Network) -> CheckResult {
        self.optional_node(ctx, "configuration", network.configuration.as_ref())?;

        self.check_entity(ctx, &network.entity)
    }

    /// Network features are structure only
    pub fn check_network_configuration(
        &mut self,
        ctx: &ValidationContext,
        configuration: &NetworkConfiguration,
    ) -> CheckResult {
        let tables = self.tables();
        self.optional_node(ctx, "ipScope", configuration.ip_scope.as_ref())?;
        self.optional_node(ctx, "parentNetwork", configuration.parent_network.as_ref())?;
        self.enumeration(ctx, "fenceMode", configuration.fence_mode.as_deref(), &tables.fence_modes)?;
        self.optional_node(ctx, "syslogServerSettings", configuration.syslog_server_settings.as_ref())?;
        self.optional_node(ctx, "routerInfo", configuration.router_info.as_ref())
    }

    pub fn check_ip_scope(&mut self, ctx: &ValidationContext, scope: &IpScope) -> CheckResult {
        self.require(ctx, "isInherited", scope.is_inherited.as_ref())?;

        self.ip_address(ctx, "gateway", scope.gateway.as_deref())?;
        self.ip_address(ctx, "netmask", scope.netmask.as_deref())?;
        self.ip_address(ctx, "dns1", scope.dns1.as_deref())?;
        self.ip_address(ctx, "dns2", scope.dns2.as_deref())?;

        self.walk_each(ctx, "ipRanges", &scope.ip_ranges)?;
        for (index, address) in scope.allocated_ip_addresses.iter().enumerate() {
            let field = format!("allocatedIpAddresses[{}]", index);
            self.apply(ctx, &field, check_ip_address(address))?;
        }
        Ok(())
    }

    /// Both ends are addresses; a range of one family must not run backwards
    pub fn check_ip_range(&mut self, ctx: &ValidationContext, range: &IpRange) -> CheckResult {
        let start = self.require(ctx, "startAddress", range.start_address.as_deref())?;
        let end = self.require(ctx, "endAddress", range.end_address.as_deref())?;

        self.ip_address(ctx, "startAddress", start)?;
        self.ip_address(ctx, "endAddress", end)?;

        let parsed = (
            start.and_then(|s| s.parse::<IpAddr>().ok()),
            end.and_then(|e| e.parse::<IpAddr>().ok()),
        );
        let backwards = match parsed {
            (Some(IpAddr::V4(start)), Some(IpAddr::V4(end))) => start > end,
            (Some(IpAddr::V6(start)), Some(IpAddr::V6(end))) => start > end,
            _ => false,
        };
        if backwards {
            self.report(
                ctx,
                "endAddress",
                ViolationKind::InvariantViolation,
                format!("address not below startAddress {}", start.unwrap_or_default()),
                end.unwrap_or_default(),
            )?;
        }
        Ok(())
    }

    pub fn check_syslog_server_settings(
        &mut self,
        ctx: &ValidationContext,
        settings: &SyslogServerSettings,
    ) -> CheckResult {
        self.ip_address(ctx, "syslogServerIp1", settings.syslog_server_ip1.as_deref())?;
        self.ip_address(ctx, "syslogServerIp2", settings.syslog_server_ip2.as_deref())
    }

    pub fn check_router_info(&mut self, ctx: &ValidationContext, router: &RouterInfo) -> CheckResult {
        let external_ip = self.require(ctx, "externalIp", router.external_ip.as_deref())?;
        self.ip_address(ctx, "externalIp", external_ip)
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

    fn range(start: &str, end: &str) -> IpRange {
        IpRange {
            start_address: Some(start.to_string()),
            end_address: Some(end.to_string()),
        }
    }

    #[test]
    fn test_ip_scope_addresses() {
        let network = Network {
            entity: Entity::named("routed"),
            configuration: Some(NetworkConfiguration {
                ip_scope: Some(IpScope {
                    is_inherited: Some(false),
                    gateway: Some("192.168.1.1".to_string()),
                    netmask: Some("255.255.255.0".to_string()),
                    dns1: Some("dns.example.com".to_string()),
                    ip_ranges: vec![range("192.168.1.100", "192.168.1.199")],
                    allocated_ip_addresses: vec!["192.168.1.100".to_string(), "192.168.1.300".to_string()],
                    ..IpScope::default()
                }),
                fence_mode: Some("natRouted".to_string()),
                ..NetworkConfiguration::default()
            }),
        };

        let found = violations(&network);
        let paths: Vec<&str> = found.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "$.configuration.ipScope.dns1",
                "$.configuration.ipScope.allocatedIpAddresses[1]"
            ]
        );
        assert!(found.iter().all(|v| v.kind == ViolationKind::MalformedAddress));
        assert!(found.iter().all(|v| v.node == NodeKind::IpScope));
    }

    #[test]
    fn test_ip_range_must_not_run_backwards() {
        assert!(violations(&range("10.0.0.1", "10.0.0.1")).is_empty());
        assert!(violations(&range("fe80::1", "fe80::ff")).is_empty());
        // Mixed families are not ordered
        assert!(violations(&range("10.0.0.9", "fe80::1")).is_empty());

        let found = violations(&range("10.0.0.20", "10.0.0.10"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "endAddress");
        assert_eq!(found[0].kind, ViolationKind::InvariantViolation);
    }

    #[test]
    fn test_ip_range_requires_both_ends() {
        let found = violations(&IpRange {
            start_address: Some("not-an-ip".to_string()),
            end_address: None,
        });
        let kinds: Vec<&str> = found.iter().map(|v| v.kind.label()).collect();
        assert_eq!(kinds, vec!["MissingRequiredField", "MalformedAddress"]);
        assert_eq!(found[0].field, "endAddress");
        assert_eq!(found[1].field, "startAddress");
    }

    #[test]
    fn test_router_and_syslog() {
        let configuration = NetworkConfiguration {
            fence_mode: Some("bridge".to_string()),
            syslog_server_settings: Some(SyslogServerSettings {
                syslog_server_ip1: Some("10.1.1.1".to_string()),
                syslog_server_ip2: Some("syslog".to_string()),
            }),
            router_info: Some(RouterInfo::default()),
            ..NetworkConfiguration::default()
        };

        let found = violations(&configuration);
        let paths: Vec<&str> = found.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "$.fenceMode",
                "$.syslogServerSettings.syslogServerIp2",
                "$.routerInfo.externalIp"
            ]
        );
    }
}
