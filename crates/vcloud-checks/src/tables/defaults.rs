//! Built-in enumeration tables of the vCloud Director 1.5 API

pub const IDENTIFIER_NAMESPACE: &str = "vcloud";

pub const MEDIA_TYPES: &[&str] = &[
    "application/vnd.vmware.vcloud.session+xml",
    "application/vnd.vmware.vcloud.error+xml",
    "application/vnd.vmware.vcloud.org+xml",
    "application/vnd.vmware.vcloud.orgList+xml",
    "application/vnd.vmware.vcloud.vdc+xml",
    "application/vnd.vmware.vcloud.vApp+xml",
    "application/vnd.vmware.vcloud.vm+xml",
    "application/vnd.vmware.vcloud.vAppTemplate+xml",
    "application/vnd.vmware.vcloud.catalog+xml",
    "application/vnd.vmware.vcloud.catalogItem+xml",
    "application/vnd.vmware.vcloud.media+xml",
    "application/vnd.vmware.vcloud.network+xml",
    "application/vnd.vmware.vcloud.task+xml",
    "application/vnd.vmware.vcloud.tasksList+xml",
    "application/vnd.vmware.vcloud.owner+xml",
    "application/vnd.vmware.vcloud.metadata+xml",
    "application/vnd.vmware.vcloud.metadata.value+xml",
    "application/vnd.vmware.vcloud.controlAccess+xml",
    "application/vnd.vmware.vcloud.entity+xml",
    "application/vnd.vmware.vcloud.query.references+xml",
    "application/vnd.vmware.vcloud.query.records+xml",
    "application/vnd.vmware.vcloud.screenTicket+xml",
    "application/vnd.vmware.vcloud.mediaInsertOrEjectParams+xml",
    "application/vnd.vmware.vcloud.cloneMediaParams+xml",
    "application/vnd.vmware.vcloud.cloneVAppParams+xml",
    "application/vnd.vmware.vcloud.cloneVAppTemplateParams+xml",
    "application/vnd.vmware.vcloud.captureVAppParams+xml",
    "application/vnd.vmware.vcloud.composeVAppParams+xml",
    "application/vnd.vmware.vcloud.instantiateVAppTemplateParams+xml",
    "application/vnd.vmware.vcloud.instantiateOvfParams+xml",
    "application/vnd.vmware.vcloud.uploadVAppTemplateParams+xml",
    "application/vnd.vmware.vcloud.deployVAppParams+xml",
    "application/vnd.vmware.vcloud.undeployVAppParams+xml",
    "application/vnd.vmware.vcloud.recomposeVAppParams+xml",
    "application/vnd.vmware.vcloud.relocateVmParams+xml",
    "application/vnd.vmware.vcloud.vmPendingQuestion+xml",
    "application/vnd.vmware.vcloud.vmPendingAnswer+xml",
    "application/vnd.vmware.vcloud.leaseSettingsSection+xml",
    "application/vnd.vmware.vcloud.startupSection+xml",
    "application/vnd.vmware.vcloud.networkConfigSection+xml",
    "application/vnd.vmware.vcloud.networkConnectionSection+xml",
    "application/vnd.vmware.vcloud.guestCustomizationSection+xml",
    "application/vnd.vmware.vcloud.customizationSection+xml",
    "application/vnd.vmware.vcloud.productSections+xml",
    "application/vnd.vmware.vcloud.operatingSystemSection+xml",
    "application/vnd.vmware.vcloud.virtualHardwareSection+xml",
    "application/vnd.vmware.vcloud.networkSection+xml",
    "application/vnd.vmware.vcloud.diskSection+xml",
    "application/vnd.vmware.vcloud.rasdItem+xml",
    "application/vnd.vmware.vcloud.rasdItemsList+xml",
    "application/vnd.vmware.vcloud.runtimeInfoSection+xml",
    "application/vnd.vmware.vcloud.vAppNetwork+xml",
    "application/vnd.vmware.admin.vcloud+xml",
    "application/vnd.vmware.admin.organization+xml",
    "application/vnd.vmware.admin.orgSettings+xml",
    "application/vnd.vmware.admin.generalOrgSettings+xml",
    "application/vnd.vmware.admin.vAppLeaseSettings+xml",
    "application/vnd.vmware.admin.vAppTemplateLeaseSettings+xml",
    "application/vnd.vmware.admin.organizationLdapSettings+xml",
    "application/vnd.vmware.admin.organizationEmailSettings+xml",
    "application/vnd.vmware.admin.organizationPasswordPolicySettings+xml",
    "application/vnd.vmware.admin.vdc+xml",
    "application/vnd.vmware.admin.catalog+xml",
    "application/vnd.vmware.admin.network+xml",
    "application/vnd.vmware.admin.user+xml",
    "application/vnd.vmware.admin.group+xml",
    "application/vnd.vmware.admin.role+xml",
    "application/vnd.vmware.admin.right+xml",
    "application/vnd.vmware.admin.publishCatalogParams+xml",
    "application/vnd.vmware.admin.providervdc+xml",
    "application/vnd.vmware.admin.networkPool+xml",
    "application/ovf+xml",
    "text/xml",
];

pub const LINK_RELATIONS: &[&str] = &[
    "add",
    "alternate",
    "catalogItem",
    "collaboration:abort",
    "collaboration:fail",
    "collaboration:resume",
    "consolidate",
    "controlAccess",
    "copy",
    "deploy",
    "disable",
    "discardState",
    "down",
    "download:alternate",
    "download:default",
    "edit",
    "enable",
    "firstPage",
    "installVmwareTools",
    "lastPage",
    "media:ejectMedia",
    "media:insertMedia",
    "move",
    "nextPage",
    "ova",
    "ovf",
    "power:powerOff",
    "power:powerOn",
    "power:reboot",
    "power:reset",
    "power:shutdown",
    "power:suspend",
    "previousPage",
    "publish",
    "recompose",
    "reconnect",
    "register",
    "reject",
    "relocate",
    "remove",
    "repair",
    "screen:acquireTicket",
    "screen:thumbnail",
    "task:cancel",
    "blockingTask",
    "taskOwner",
    "taskParams",
    "taskRequest",
    "undeploy",
    "unlock",
    "unregister",
    "up",
    "updateProgress",
    "upgrade",
    "upload:alternate",
    "upload:default",
    "snapshot:create",
    "snapshot:revertToCurrent",
    "snapshot:removeAll",
    "question:answer",
    "enterMaintenanceMode",
    "exitMaintenanceMode",
];

pub const TASK_STATUSES: &[&str] = &[
    "queued",
    "preRunning",
    "running",
    "success",
    "error",
    "canceled",
    "aborted",
];

pub const ALLOCATION_MODELS: &[&str] = &["AllocationVApp", "AllocationPool", "ReservationPool"];

pub const AUTHENTICATION_MECHANISMS: &[&str] = &["SIMPLE", "KERBEROS", "MD5DIGEST", "NTLM"];

pub const CONNECTOR_TYPES: &[&str] = &["ACTIVE_DIRECTORY", "OPEN_LDAP"];

pub const LDAP_MODES: &[&str] = &["NONE", "SYSTEM", "CUSTOM"];

pub const IP_ALLOCATION_MODES: &[&str] = &["POOL", "DHCP", "MANUAL", "NONE"];

pub const ACCESS_LEVELS: &[&str] = &["FullControl", "Change", "ReadOnly"];

pub const IMAGE_TYPES: &[&str] = &["iso", "floppy"];

pub const FENCE_MODES: &[&str] = &["bridged", "isolated", "natRouted"];
