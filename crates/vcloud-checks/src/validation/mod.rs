//! Validation of vCloud domain documents
//!
//! Validation is a single read-only walk over a document. Each node kind has
//! a checker that validates the fields the kind declares and then delegates
//! to the checker of its supertype. Violations flow into a
//! [`ViolationSink`], which decides between the two modes:
//!
//! - **FailFast**: stop at the first violation
//! - **CollectAll**: gather every violation, optionally bounded by `max_errors`
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
mod nodes;
pub mod primitives;
mod reference;
pub mod sink;
mod validator;
mod walk;

// Re-export commonly used types
pub use base::{Check, Checker, ValidationContext, ValidationMode};
pub use error::{ValidationError, ValidationErrors, ValidationResult, Violation, ViolationKind};
pub use sink::{CheckResult, Collector, FailFast, Halt, ViolationSink};
pub use validator::{DocumentValidator, SchemaValidator};

use crate::domain::Node;

/// Validation configuration for batch operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Validation mode to use
    pub mode: ValidationMode,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
    /// Check sibling subtrees in parallel (needs the `parallel` feature)
    pub parallel: bool,
}

impl ValidationConfig {
    /// Stop at the first violation
    pub fn fail_fast() -> Self {
        Self {
            mode: ValidationMode::FailFast,
            ..Self::default()
        }
    }

    /// Collect every violation
    pub fn collect_all() -> Self {
        Self::default()
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.mode = ValidationMode::FailFast;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Batch validation of documents against the built-in tables
///
/// # Examples
///
/// ```rust
/// use vcloud_checks::domain::{Entity, Node, Task};
/// use vcloud_checks::validation::{validate_documents_batch, ValidationConfig};
///
/// let documents = vec![
///     Node::Task(Task { entity: Entity::named("deploy"), status: Some("running".into()), ..Task::default() }),
///     Node::Task(Task { entity: Entity::named("undeploy"), ..Task::default() }),
/// ];
///
/// let errors = validate_documents_batch(&documents, &ValidationConfig::collect_all()).unwrap_err();
/// assert_eq!(errors.iter().next().map(|v| v.path.as_str()), Some("$[1].status"));
/// ```
pub fn validate_documents_batch(documents: &[Node], config: &ValidationConfig) -> Result<(), ValidationErrors> {
    DocumentValidator::new().validate_batch(documents, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.mode, ValidationMode::CollectAll);
        assert_eq!(config.max_errors, 0);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validation_config_builders() {
        let config = ValidationConfig::collect_all().with_fail_fast().with_max_errors(5);
        assert_eq!(config.mode, ValidationMode::FailFast);
        assert_eq!(config.max_errors, 5);

        assert_eq!(ValidationConfig::fail_fast().mode, ValidationMode::FailFast);
        assert!(ValidationConfig::default().with_parallel(true).parallel);
    }

    #[test]
    fn test_batch_max_errors_spans_documents() {
        let documents: Vec<Node> = (0..4).map(|_| Node::Reference(Reference::default())).collect();

        let errors = validate_documents_batch(&documents, &ValidationConfig::collect_all()).unwrap_err();
        assert_eq!(errors.len(), 4);

        let errors =
            validate_documents_batch(&documents, &ValidationConfig::collect_all().with_max_errors(3)).unwrap_err();
        let paths: Vec<&str> = errors.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$[0].href", "$[1].href", "$[2].href"]);
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_documents_batch(&[], &ValidationConfig::fail_fast()).is_ok());
    }
}
