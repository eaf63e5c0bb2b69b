//! Traversal of nested collections
//!
//! With the `parallel` feature, sibling subtrees are checked on the rayon
//! pool. Each element reports into its own collector, and the collectors are
//! replayed into the caller's sink in element order, stopping after an
//! element whose walk halted, so the outcome matches the sequential walk.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::validation::base::{Check, Checker, ValidationContext};
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Check every element of a collection under the path `role[i]`
    pub fn walk_each<T: Check + Sync>(&mut self, ctx: &ValidationContext, role: &str, items: &[T]) -> CheckResult {
        #[cfg(feature = "parallel")]
        {
            if self.is_parallel() && items.len() > 1 {
                return self.walk_each_parallel(ctx, role, items);
            }
        }

        let collection = ctx.child(role);
        for (index, item) in items.iter().enumerate() {
            let element = collection.child_index(index).with_kind(item.kind());
            item.check(self, &element)?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn walk_each_parallel<T: Check + Sync>(
        &mut self,
        ctx: &ValidationContext,
        role: &str,
        items: &[T],
    ) -> CheckResult {
        use crate::validation::sink::Collector;
        use rayon::prelude::*;

        let tables = self.tables();
        let collection = ctx.child(role);
        let per_element: Vec<(Collector, CheckResult)> = items
            .par_iter()
            .enumerate()
            .map(|(index, item)| {
                let element = collection.child_index(index).with_kind(item.kind());
                let mut collector = Collector::unbounded();
                let mut checker = Checker::new(tables, &mut collector).with_parallel(true);
                let result = item.check(&mut checker, &element);
                (collector, result)
            })
            .collect();

        // Replay in order; an element that halted ends the walk after its own violations
        for (collector, result) in per_element {
            for violation in collector.into_violations() {
                self.sink().accept(violation)?;
            }
            result?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Link, NodeKind, Reference};
    use crate::tables::ConstraintTables;
    use crate::validation::base::{Checker, ValidationContext};
    use crate::validation::error::ViolationKind;
    use crate::validation::sink::{Collector, FailFast, ViolationSink};

    fn link(rel: Option<&str>) -> Link {
        Link {
            reference: Reference::to("https://vcd.example.com/api/vApp/1"),
            rel: rel.map(str::to_string),
        }
    }

    #[test]
    fn test_walk_reports_indexed_paths() {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let links = vec![link(Some("edit")), link(None), link(Some("sideways"))];

        let mut checker = Checker::new(&tables, &mut sink);
        checker
            .walk_each(&ValidationContext::new(NodeKind::VApp), "links", &links)
            .unwrap();

        let violations = sink.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path, "$.links[1].rel");
        assert_eq!(violations[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(violations[0].node, NodeKind::Link);
        assert_eq!(violations[1].path, "$.links[2].rel");
        assert_eq!(violations[1].kind.label(), "InvalidEnumerationValue");
    }

    #[test]
    fn test_walk_stops_for_fail_fast() {
        let tables = ConstraintTables::default();
        let mut sink = FailFast::new();
        let links = vec![link(None), link(None)];

        let mut checker = Checker::new(&tables, &mut sink);
        let result = checker.walk_each(&ValidationContext::new(NodeKind::VApp), "links", &links);
        assert!(result.is_err());
        assert_eq!(sink.count(), 1);
        assert_eq!(sink.first().map(|v| v.path.as_str()), Some("$.links[0].rel"));
    }

    #[test]
    fn test_unlocated_element_halts_collect_all() {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let unlocated = Link {
            reference: Reference::default(),
            rel: Some("edit".to_string()),
        };
        let links = vec![link(Some("bogus")), unlocated, link(Some("sideways"))];

        let mut checker = Checker::new(&tables, &mut sink);
        let result = checker.walk_each(&ValidationContext::new(NodeKind::VApp), "links", &links);
        assert!(result.is_err());

        let paths: Vec<&str> = sink.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.links[0].rel", "$.links[1].href"]);
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let tables = ConstraintTables::default();
        let mut sink = Collector::unbounded();
        let links: Vec<Link> = Vec::new();
        let mut checker = Checker::new(&tables, &mut sink);
        assert!(checker
            .walk_each(&ValidationContext::new(NodeKind::VApp), "links", &links)
            .is_ok());
        assert_eq!(sink.count(), 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_walk_matches_sequential() {
        let tables = ConstraintTables::default();
        let links: Vec<Link> = (0..64)
            .map(|i| match i % 3 {
                0 => link(Some("edit")),
                1 => link(None),
                _ => link(Some("bogus")),
            })
            .collect();
        let ctx = ValidationContext::new(NodeKind::VApp);

        let mut sequential = Collector::unbounded();
        Checker::new(&tables, &mut sequential).walk_each(&ctx, "links", &links).unwrap();

        let mut parallel = Collector::unbounded();
        Checker::new(&tables, &mut parallel)
            .with_parallel(true)
            .walk_each(&ctx, "links", &links)
            .unwrap();

        assert_eq!(sequential.violations(), parallel.violations());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_walk_stops_after_halted_element() {
        let tables = ConstraintTables::default();
        let mut links: Vec<Link> = (0..16).map(|_| link(Some("bogus"))).collect();
        links[5].reference = Reference::default();
        let ctx = ValidationContext::new(NodeKind::VApp);

        let mut sequential = Collector::unbounded();
        let sequential_result = Checker::new(&tables, &mut sequential).walk_each(&ctx, "links", &links);

        let mut parallel = Collector::unbounded();
        let parallel_result = Checker::new(&tables, &mut parallel)
            .with_parallel(true)
            .walk_each(&ctx, "links", &links);

        assert!(sequential_result.is_err());
        assert_eq!(sequential_result, parallel_result);
        assert_eq!(sequential.violations(), parallel.violations());
        assert_eq!(parallel.violations().last().map(|v| v.path.as_str()), Some("$.links[5].href"));
    }
}
