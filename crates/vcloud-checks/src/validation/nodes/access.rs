//! Access control

use crate::domain::{AccessSetting, ControlAccessParams};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Shared resources need an access level for everyone, private ones an explicit list
    ///
    /// When `isSharedToEveryone` is absent neither branch applies.
    pub fn check_control_access_params(
        &mut self,
        ctx: &ValidationContext,
        params: &ControlAccessParams,
    ) -> CheckResult {
        let tables = self.tables();
        match self.require(ctx, "isSharedToEveryone", params.is_shared_to_everyone.as_ref())?.copied() {
            Some(true) => self.required_enumeration(
                ctx,
                "everyoneAccessLevel",
                params.everyone_access_level.as_deref(),
                &tables.access_levels,
            ),
            Some(false) => match self.require(ctx, "accessSettings", params.access_settings.as_ref())? {
                Some(settings) => self.walk_each(ctx, "accessSettings", settings),
                None => Ok(()),
            },
            None => Ok(()),
        }
    }

    pub fn check_access_setting(&mut self, ctx: &ValidationContext, setting: &AccessSetting) -> CheckResult {
        let tables = self.tables();
        self.require_node(ctx, "subject", setting.subject.as_ref())?;
        self.required_enumeration(ctx, "accessLevel", setting.access_level.as_deref(), &tables.access_levels)
    }
}
