//! Violation and error types produced by the validation engine
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::domain::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The class of constraint a violation breaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViolationKind {
    /// A required field is absent
    MissingRequiredField,
    /// A present value is not a member of its closed enumeration
    InvalidEnumerationValue {
        /// Name of the enumeration table
        enumeration: String,
        /// Every admissible value of the enumeration
        admissible: Vec<String>,
    },
    /// A numeric value lies outside its declared bounds
    OutOfRangeValue {
        lower: f64,
        /// `None` when the value is only bounded from below
        upper: Option<f64>,
    },
    /// An identifier does not have the `urn:<namespace>:<type>:<uuid>` shape
    MalformedIdentifier,
    /// A cross-reference is missing its locator
    MalformedReference,
    /// A network, hardware or e-mail address is not well formed
    MalformedAddress,
    /// A cross-field conditional invariant does not hold
    InvariantViolation,
}

impl ViolationKind {
    /// Stable name of the violation class
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MissingRequiredField",
            Self::InvalidEnumerationValue { .. } => "InvalidEnumerationValue",
            Self::OutOfRangeValue { .. } => "OutOfRangeValue",
            Self::MalformedIdentifier => "MalformedIdentifier",
            Self::MalformedReference => "MalformedReference",
            Self::MalformedAddress => "MalformedAddress",
            Self::InvariantViolation => "InvariantViolation",
        }
    }

    /// The admissible set carried by an enumeration violation
    pub fn admissible(&self) -> Option<&[String]> {
        match self {
            Self::InvalidEnumerationValue { admissible, .. } => Some(admissible),
            _ => None,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single failed constraint on one field of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Document path of the offending field, e.g. `$.children.vms[0].name`
    pub path: String,
    /// Concrete kind of the node being validated
    pub node: NodeKind,
    /// Serialized field name
    pub field: String,
    /// Class of the broken constraint
    pub kind: ViolationKind,
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at '{}' ({}.{}): expected {}, but found {}",
            self.kind, self.path, self.node, self.field, self.expected, self.actual
        )
    }
}

/// Fail-fast validation error wrapping the first violation encountered
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Document path where the error occurred
    pub path: String,
    /// Human-readable error message
    pub message: String,
    /// The violation that aborted validation
    pub violation: Violation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error at '{}': {}", self.path, self.message)
    }
}

impl ValidationError {
    /// Create a validation error from a violation
    pub fn new(violation: Violation) -> Self {
        Self {
            path: violation.path.clone(),
            message: format!(
                "{} {}.{}: expected {}, but found {}",
                violation.kind, violation.node, violation.field, violation.expected, violation.actual
            ),
            violation,
        }
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(violation)
    }
}

/// Result type for fail-fast validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Every violation gathered by a collect-all run, in discovery order
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of violations
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s) found:", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Add a violation to the collection
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterate over the violations in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations reported against the given field name
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Convert to result - Ok if no violations, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            violations: vec![error.violation],
        }
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
