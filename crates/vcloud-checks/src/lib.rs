//! vCloud Checks - structural validation of vCloud Director documents
//!
//! This crate validates typed vCloud Director API documents (organizations,
//! virtual datacenters, networks, catalogs, vApps, VMs, templates, users, OVF
//! sections and more) against the structural rules of the API:
//!
//! - **Required fields**: a missing field is reported once and not traversed
//! - **Closed enumerations**: media types, link relations, task statuses, ...
//! - **Numeric bounds**: non-negative quotas, percentages, fractions
//! - **Textual formats**: `urn:vcloud:<type>:<uuid>` identifiers, IP, MAC and
//!   e-mail addresses
//! - **Invariants**: cross-field rules such as guest customization settings
//!
//! ## Quick Start
//!
//! ```rust
//! use vcloud_checks::{DocumentValidator, Node, SchemaValidator};
//!
//! let task: Node = serde_json::from_str(
//!     r#"{"kind": "Task", "name": "deploy", "status": "success", "progress": 150}"#,
//! ).unwrap();
//!
//! let validator = DocumentValidator::new();
//! let errors = validator.collect_errors(&task);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.iter().next().map(|v| v.path.as_str()), Some("$.progress"));
//! ```
//!
//! ## Validation Modes
//!
//! - **FailFast**: [`SchemaValidator::validate`] returns the first violation
//! - **CollectAll**: [`SchemaValidator::collect_errors`] returns every
//!   violation in document order
//!
//! Both modes report the same first violation. With the `parallel` feature,
//! sibling subtrees are checked on the rayon pool and merged back in order.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

pub mod domain;
pub mod format;
pub mod tables;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{Node, NodeKind};
pub use format::{DecodeError, Format};
pub use tables::{ConstraintTables, EnumerationSet, TablesError, TablesResult, TABLES_PATH_ENV};
pub use validation::{
    validate_documents_batch, Check, DocumentValidator, SchemaValidator, ValidationConfig, ValidationContext,
    ValidationError, ValidationErrors, ValidationMode, ValidationResult, Violation, ViolationKind,
};
