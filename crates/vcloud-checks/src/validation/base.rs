//! Validation context, the `Check` trait and the checker that drives a walk
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::domain::NodeKind;
use crate::tables::ConstraintTables;
use crate::validation::error::{Violation, ViolationKind};
use crate::validation::primitives::{Failure, PrimitiveResult};
use crate::validation::sink::{CheckResult, ViolationSink};
use tracing::trace;

/// Validation mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first violation
    FailFast,
    /// Gather every violation in the document
    #[default]
    CollectAll,
}

/// Position of the node currently being validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current document path
    pub path: String,
    /// Concrete kind of the node at this path
    pub node: NodeKind,
}

impl ValidationContext {
    /// Create a root context for a node of the given kind
    pub fn new(node: NodeKind) -> Self {
        Self {
            path: "$".to_string(),
            node,
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: self.field_path(path_segment.as_ref()),
            node: self.node,
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            node: self.node,
        }
    }

    /// Same position, viewed as a node of another kind
    pub fn with_kind(mut self, node: NodeKind) -> Self {
        self.node = node;
        self
    }

    /// Path of a field of the current node
    pub fn field_path(&self, field: &str) -> String {
        format!("{}.{}", self.path, field)
    }
}

/// A node that knows which checker validates it
///
/// Implemented by every domain type; the checker of a subtype calls the
/// checker of its supertype on the embedded supertype fields.
pub trait Check {
    /// Kind of this node
    fn kind(&self) -> NodeKind;

    /// Validate this node, reporting violations to the checker's sink
    fn check<S: ViolationSink + ?Sized>(
        &self,
        checker: &mut Checker<'_, S>,
        ctx: &ValidationContext,
    ) -> CheckResult;
}

/// Carries the constraint tables and the sink through a walk
pub struct Checker<'a, S: ViolationSink + ?Sized> {
    tables: &'a ConstraintTables,
    sink: &'a mut S,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl<'a, S: ViolationSink + ?Sized> Checker<'a, S> {
    pub fn new(tables: &'a ConstraintTables, sink: &'a mut S) -> Self {
        Self {
            tables,
            sink,
            parallel: false,
        }
    }

    /// Fan out over sibling subtrees (effective with the `parallel` feature)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tables(&self) -> &'a ConstraintTables {
        self.tables
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn is_parallel(&self) -> bool {
        self.parallel
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    /// Record a violation against `field` of the current node
    pub fn report(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        kind: ViolationKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> CheckResult {
        let violation = Violation {
            path: ctx.field_path(field),
            node: ctx.node,
            field: field.to_string(),
            kind,
            expected: expected.into(),
            actual: actual.into(),
        };
        trace!(path = %violation.path, kind = violation.kind.label(), "violation");
        self.sink.accept(violation)
    }

    /// Report a primitive check failure, if any
    pub fn apply(&mut self, ctx: &ValidationContext, field: &str, result: PrimitiveResult) -> CheckResult {
        match result {
            Ok(()) => Ok(()),
            Err(Failure {
                kind,
                expected,
                actual,
            }) => self.report(ctx, field, kind, expected, actual),
        }
    }

    /// Run a primitive check on an optional value; absence is never a violation
    pub fn apply_opt<T>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<T>,
        rule: impl FnOnce(T) -> PrimitiveResult,
    ) -> CheckResult {
        match value {
            Some(value) => self.apply(ctx, field, rule(value)),
            None => Ok(()),
        }
    }

    /// Report a missing required field, handing the value on when present
    pub fn require<'v, T: ?Sized>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&'v T>,
    ) -> Result<Option<&'v T>, crate::validation::sink::Halt> {
        if value.is_none() {
            self.report(
                ctx,
                field,
                ViolationKind::MissingRequiredField,
                format!("{} to be present", field),
                "field is missing",
            )?;
        }
        Ok(value)
    }

    /// Validate a required nested node; a missing node is reported and not traversed
    pub fn require_node<T: Check>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&T>,
    ) -> CheckResult {
        match self.require(ctx, field, value)? {
            Some(node) => self.check_node(ctx, field, node),
            None => Ok(()),
        }
    }

    /// Validate an optional nested node
    pub fn optional_node<T: Check>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&T>,
    ) -> CheckResult {
        match value {
            Some(node) => self.check_node(ctx, field, node),
            None => Ok(()),
        }
    }

    fn check_node<T: Check>(&mut self, ctx: &ValidationContext, field: &str, node: &T) -> CheckResult {
        let child = ctx.child(field).with_kind(node.kind());
        node.check(self, &child)
    }
}
