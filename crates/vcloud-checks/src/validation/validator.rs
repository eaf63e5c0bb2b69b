//! Document-level entry points
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::domain::Node;
use crate::tables::ConstraintTables;
use crate::validation::base::{Check, Checker, ValidationContext, ValidationMode};
use crate::validation::error::{ValidationErrors, ValidationResult};
use crate::validation::sink::{CheckResult, Collector, FailFast, ViolationSink};
use crate::validation::ValidationConfig;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Core validation trait for validated document types
pub trait SchemaValidator {
    /// The type being validated
    type Input;

    /// Context the walk starts from for this input
    fn root_context(&self, input: &Self::Input) -> ValidationContext;

    /// Report every violation of `input` to `sink`, stopping when the sink halts
    fn validate_into<S: ViolationSink + ?Sized>(
        &self,
        input: &Self::Input,
        context: &ValidationContext,
        sink: &mut S,
    ) -> CheckResult;

    /// Validate, stopping at the first violation
    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        self.validate_with_context(input, &self.root_context(input))
    }

    /// Validate from a specific context, stopping at the first violation
    fn validate_with_context(&self, input: &Self::Input, context: &ValidationContext) -> ValidationResult<()> {
        let mut sink = FailFast::new();
        // Halting is how the sink ends the walk; the outcome lives in the sink
        let _ = self.validate_into(input, context, &mut sink);
        sink.into_result()
    }

    /// Collect all validation errors (non-failing)
    fn collect_errors(&self, input: &Self::Input) -> ValidationErrors {
        let mut sink = Collector::unbounded();
        let _ = self.validate_into(input, &self.root_context(input), &mut sink);
        ValidationErrors::from(sink.into_violations())
    }

    /// Validate according to a batch configuration
    fn validate_with_config(&self, input: &Self::Input, config: &ValidationConfig) -> Result<(), ValidationErrors> {
        let context = self.root_context(input);
        match config.mode {
            ValidationMode::FailFast => self.validate_with_context(input, &context).map_err(ValidationErrors::from),
            ValidationMode::CollectAll => {
                let mut sink = Collector::bounded(config.max_errors);
                let _ = self.validate_into(input, &context, &mut sink);
                sink.into_result()
            }
        }
    }
}

/// Validates vCloud documents against a set of constraint tables
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    tables: Arc<ConstraintTables>,
    parallel: bool,
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidator {
    /// A validator over the built-in tables
    pub fn new() -> Self {
        Self::with_tables(Arc::new(ConstraintTables::embedded()))
    }

    pub fn with_tables(tables: Arc<ConstraintTables>) -> Self {
        Self {
            tables,
            parallel: false,
        }
    }

    /// Check sibling subtrees on the rayon pool (needs the `parallel` feature)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tables(&self) -> &ConstraintTables {
        &self.tables
    }

    /// Validate any node, not only a top-level document
    pub fn check_into<T: Check, S: ViolationSink + ?Sized>(
        &self,
        node: &T,
        context: &ValidationContext,
        sink: &mut S,
    ) -> CheckResult {
        let started = Instant::now();
        let before = sink.count();
        debug!(kind = %node.kind(), path = %context.path, parallel = self.parallel, "Validating document");

        let mut checker = Checker::new(&self.tables, sink).with_parallel(self.parallel);
        let result = node.check(&mut checker, context);

        debug!(
            kind = %node.kind(),
            violations = sink.count() - before,
            halted = result.is_err(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Document validated"
        );
        result
    }

    /// Validate many documents, prefixing each path with the document index
    ///
    /// Fail-fast stops at the first violation of any document; `max_errors`
    /// bounds the violations collected across the whole batch. A document
    /// whose walk halts, such as one holding a reference without a locator,
    /// does not stop the documents after it in collect-all mode.
    pub fn validate_batch(&self, documents: &[Node], config: &ValidationConfig) -> Result<(), ValidationErrors> {
        let validator = self.clone().with_parallel(self.parallel || config.parallel);
        debug!(documents = documents.len(), mode = ?config.mode, "Validating batch");

        match config.mode {
            ValidationMode::FailFast => {
                let mut sink = FailFast::new();
                for (i, document) in documents.iter().enumerate() {
                    let context = ValidationContext::new(document.kind()).child_index(i);
                    if validator.check_into(document, &context, &mut sink).is_err() {
                        break;
                    }
                }
                sink.into_result().map_err(ValidationErrors::from)
            }
            ValidationMode::CollectAll => {
                let mut sink = Collector::bounded(config.max_errors);
                for (i, document) in documents.iter().enumerate() {
                    let context = ValidationContext::new(document.kind()).child_index(i);
                    // A halted document ends only itself unless the bound is reached
                    if validator.check_into(document, &context, &mut sink).is_err() && sink.is_exhausted() {
                        break;
                    }
                }
                sink.into_result()
            }
        }
    }
}

impl SchemaValidator for DocumentValidator {
    type Input = Node;

    fn root_context(&self, input: &Node) -> ValidationContext {
        ValidationContext::new(input.kind())
    }

    fn validate_into<S: ViolationSink + ?Sized>(
        &self,
        input: &Node,
        context: &ValidationContext,
        sink: &mut S,
    ) -> CheckResult {
        self.check_into(input, context, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;
    use crate::validation::error::ViolationKind;

    fn task(status: &str, progress: i32) -> Node {
        Node::Task(Task {
            entity: Entity::named("deploy"),
            status: Some(status.to_string()),
            progress: Some(progress),
            ..Task::default()
        })
    }

    #[test]
    fn test_valid_document() {
        let validator = DocumentValidator::new();
        assert!(validator.validate(&task("running", 40)).is_ok());
        assert!(validator.collect_errors(&task("running", 40)).is_empty());
    }

    #[test]
    fn test_fail_fast_matches_first_collected() {
        let validator = DocumentValidator::new();
        let node = task("paused", 101);

        let error = validator.validate(&node).unwrap_err();
        let all = validator.collect_errors(&node);
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().next(), Some(&error.violation));
        assert_eq!(error.path, "$.status");
    }

    #[test]
    fn test_validate_with_config() {
        let validator = DocumentValidator::new();
        let node = task("paused", 101);

        let errors = validator
            .validate_with_config(&node, &ValidationConfig::collect_all().with_max_errors(1))
            .unwrap_err();
        assert_eq!(errors.len(), 1);

        let errors = validator
            .validate_with_config(&node, &ValidationConfig::fail_fast())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_batch_prefixes_document_index() {
        let validator = DocumentValidator::new();
        let documents = vec![task("running", 10), task("success", 150), Node::Reference(Reference::default())];

        let errors = validator
            .validate_batch(&documents, &ValidationConfig::collect_all())
            .unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$[1].progress", "$[2].href"]);
        assert_eq!(errors.iter().nth(1).map(|v| &v.kind), Some(&ViolationKind::MalformedReference));

        let errors = validator
            .validate_batch(&documents, &ValidationConfig::fail_fast())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(validator.validate_batch(&documents[..1], &ValidationConfig::default()).is_ok());
    }

    #[test]
    fn test_referenceless_document_does_not_end_batch() {
        let validator = DocumentValidator::new();
        let documents = vec![
            Node::Reference(Reference {
                id: Some("urn:vcloud:org:bad".to_string()),
                ..Reference::default()
            }),
            task("success", 150),
        ];

        let errors = validator
            .validate_batch(&documents, &ValidationConfig::collect_all())
            .unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$[0].href", "$[1].progress"]);
    }
}
