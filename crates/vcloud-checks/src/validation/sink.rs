//! Violation sinks: the pluggable aggregation policy of a validation run
//!
//! Every checker reports through a [`ViolationSink`]. The sink decides whether
//! the walk continues ([`Ok`]) or stops ([`Halt`]), which is how a single set
//! of recursive checkers serves both fail-fast and collect-all validation.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ValidationError, ValidationErrors, ValidationResult, Violation};

/// Signal raised by a sink that refuses further violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// Outcome of a single check step
pub type CheckResult = Result<(), Halt>;

/// Destination for violations discovered during a walk
pub trait ViolationSink {
    /// Record a violation, returning [`Halt`] to abort the walk
    fn accept(&mut self, violation: Violation) -> CheckResult;

    /// Number of violations recorded so far
    fn count(&self) -> usize;
}

impl<S: ViolationSink + ?Sized> ViolationSink for &mut S {
    fn accept(&mut self, violation: Violation) -> CheckResult {
        (**self).accept(violation)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

/// Keeps the first violation and halts immediately
#[derive(Debug, Default)]
pub struct FailFast {
    first: Option<Violation>,
}

impl FailFast {
    pub fn new() -> Self {
        Self::default()
    }

    /// The violation that stopped the walk, if any
    pub fn first(&self) -> Option<&Violation> {
        self.first.as_ref()
    }

    pub fn into_result(self) -> ValidationResult<()> {
        match self.first {
            Some(violation) => Err(ValidationError::from(violation)),
            None => Ok(()),
        }
    }
}

impl ViolationSink for FailFast {
    fn accept(&mut self, violation: Violation) -> CheckResult {
        if self.first.is_none() {
            self.first = Some(violation);
        }
        Err(Halt)
    }

    fn count(&self) -> usize {
        usize::from(self.first.is_some())
    }
}

/// Gathers every violation, optionally halting once a bound is reached
#[derive(Debug, Default)]
pub struct Collector {
    violations: Vec<Violation>,
    /// Maximum number of violations to keep (0 = unlimited)
    max_errors: usize,
}

impl Collector {
    /// A collector that never halts
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A collector that halts after `max_errors` violations (0 = unlimited)
    pub fn bounded(max_errors: usize) -> Self {
        Self {
            violations: Vec::new(),
            max_errors,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the bound has been reached
    pub fn is_exhausted(&self) -> bool {
        self.max_errors > 0 && self.violations.len() >= self.max_errors
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        ValidationErrors::from(self.violations).into_result()
    }
}

impl ViolationSink for Collector {
    fn accept(&mut self, violation: Violation) -> CheckResult {
        self.violations.push(violation);
        if self.is_exhausted() {
            Err(Halt)
        } else {
            Ok(())
        }
    }

    fn count(&self) -> usize {
        self.violations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;
    use crate::validation::error::ViolationKind;

    fn violation(field: &str) -> Violation {
        Violation {
            path: format!("$.{}", field),
            node: NodeKind::Vdc,
            field: field.to_string(),
            kind: ViolationKind::MissingRequiredField,
            expected: "field to be present".to_string(),
            actual: "field is missing".to_string(),
        }
    }

    #[test]
    fn test_fail_fast_halts_on_first() {
        let mut sink = FailFast::new();
        assert_eq!(sink.accept(violation("nicQuota")), Err(Halt));
        assert_eq!(sink.accept(violation("networkQuota")), Err(Halt));
        assert_eq!(sink.count(), 1);
        assert_eq!(sink.first().map(|v| v.field.as_str()), Some("nicQuota"));
        assert!(sink.into_result().is_err());
    }

    #[test]
    fn test_collector_keeps_everything() {
        let mut sink = Collector::unbounded();
        assert!(sink.accept(violation("a")).is_ok());
        assert!(sink.accept(violation("b")).is_ok());
        assert_eq!(sink.count(), 2);
        assert_eq!(sink.into_result().unwrap_err().len(), 2);
    }

    #[test]
    fn test_bounded_collector_halts_at_limit() {
        let mut sink = Collector::bounded(2);
        assert!(sink.accept(violation("a")).is_ok());
        assert!(!sink.is_exhausted());
        assert_eq!(sink.accept(violation("b")), Err(Halt));
        assert_eq!(sink.violations().len(), 2);
        assert!(sink.is_exhausted());
        assert!(!Collector::unbounded().is_exhausted());
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        let mut collector = Collector::unbounded();
        {
            let mut by_ref = &mut collector;
            by_ref.accept(violation("a")).unwrap();
        }
        assert_eq!(collector.count(), 1);
    }
}
