//! Cross-reference checking
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::domain::Reference;
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::error::ViolationKind;
use crate::validation::primitives::{check_enumeration, check_identifier};
use crate::validation::sink::{CheckResult, Halt, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// A reference needs a locator; its type and identifier are checked when present
    ///
    /// A missing locator halts the walk of the whole document in every mode.
    /// The name is free text and never checked.
    pub fn check_reference(&mut self, ctx: &ValidationContext, reference: &Reference) -> CheckResult {
        if reference.href.is_none() {
            self.report(
                ctx,
                "href",
                ViolationKind::MalformedReference,
                "reference with a locator",
                "href is missing",
            )?;
            return Err(Halt);
        }

        let tables = self.tables();
        self.apply_opt(ctx, "id", reference.id.as_deref(), |id| {
            check_identifier(id, &tables.identifier_namespace)
        })?;
        self.apply_opt(ctx, "type", reference.media_type.as_deref(), |media_type| {
            check_enumeration(media_type, &tables.media_types)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;
    use crate::tables::ConstraintTables;
    use crate::validation::sink::{Collector, FailFast};

    fn check(reference: &Reference) -> Vec<crate::validation::error::Violation> {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let _ = Checker::new(&tables, &mut sink).check_reference(&ValidationContext::new(NodeKind::Reference), reference);
        sink.into_violations()
    }

    fn reference(href: Option<&str>, id: &str, media_type: &str) -> Reference {
        Reference {
            href: href.map(str::to_string),
            id: Some(id.to_string()),
            media_type: Some(media_type.to_string()),
            name: None,
        }
    }

    #[test]
    fn test_valid_reference() {
        let reference = Reference {
            href: Some("https://vcd.example.com/api/org/1".to_string()),
            id: Some("urn:vcloud:org:9b2f6c1e-42e5-4d7a-9a63-8e1d0c9b7f10".to_string()),
            media_type: Some("application/vnd.vmware.vcloud.org+xml".to_string()),
            name: Some("anything goes".to_string()),
        };
        assert!(check(&reference).is_empty());
    }

    #[test]
    fn test_missing_href_halts_collect_all() {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let result = Checker::new(&tables, &mut sink).check_reference(
            &ValidationContext::new(NodeKind::Reference),
            &reference(None, "urn:vcloud:x:bad", "nope"),
        );

        assert_eq!(result, Err(Halt));
        let violations = sink.into_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "$.href");
        assert_eq!(violations[0].kind, ViolationKind::MalformedReference);
    }

    #[test]
    fn test_located_reference_checks_id_and_type() {
        let violations = check(&reference(
            Some("https://vcd.example.com/api/org/1"),
            "urn:vcloud:org:nope",
            "application/json",
        ));
        let kinds: Vec<&str> = violations.iter().map(|v| v.kind.label()).collect();
        assert_eq!(kinds, vec!["MalformedIdentifier", "InvalidEnumerationValue"]);
    }

    #[test]
    fn test_missing_href_halts_fail_fast() {
        let tables = ConstraintTables::default();
        let mut sink = FailFast::new();
        let result = Checker::new(&tables, &mut sink)
            .check_reference(&ValidationContext::new(NodeKind::Reference), &Reference::default());
        assert!(result.is_err());
        assert_eq!(sink.first().map(|v| v.field.as_str()), Some("href"));
    }
}
