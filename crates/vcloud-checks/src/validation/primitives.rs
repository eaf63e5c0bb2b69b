//! Stateless predicates over scalar values
//!
//! Each check returns `Ok(())` or a [`Failure`] describing the broken
//! constraint. The caller attaches the path, node and field to turn a failure
//! into a violation.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use crate::tables::EnumerationSet;
use crate::validation::error::ViolationKind;
use regex::Regex;
use std::fmt::Display;
use std::net::IpAddr;
use std::sync::OnceLock;
use uuid::Uuid;

/// A failed primitive check, not yet bound to a field
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: ViolationKind,
    pub expected: String,
    pub actual: String,
}

impl Failure {
    fn new(kind: ViolationKind, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type PrimitiveResult = Result<(), Failure>;

/// Value must be `>= 0`
pub fn check_non_negative<T: Into<i64> + Copy>(value: T) -> PrimitiveResult {
    let value: i64 = value.into();
    if value >= 0 {
        Ok(())
    } else {
        Err(Failure::new(
            ViolationKind::OutOfRangeValue {
                lower: 0.0,
                upper: None,
            },
            "value greater than or equal to 0",
            value.to_string(),
        ))
    }
}

/// Value must lie in the inclusive range `[lower, upper]`
pub fn check_range<T>(value: T, lower: T, upper: T) -> PrimitiveResult
where
    T: PartialOrd + Into<f64> + Display + Copy,
{
    if value >= lower && value <= upper {
        Ok(())
    } else {
        Err(Failure::new(
            ViolationKind::OutOfRangeValue {
                lower: lower.into(),
                upper: Some(upper.into()),
            },
            format!("value between {} and {}", lower, upper),
            value.to_string(),
        ))
    }
}

/// Value must lie in `[0.0, 1.0]`; NaN is rejected
pub fn check_fraction(value: f64) -> PrimitiveResult {
    check_range(value, 0.0, 1.0)
}

/// Value must be a member of the enumeration
pub fn check_enumeration(value: &str, set: &EnumerationSet) -> PrimitiveResult {
    if set.contains(value) {
        Ok(())
    } else {
        let admissible = set.admissible();
        let expected = format!("one of [{}]", admissible.join(", "));
        Err(Failure::new(
            ViolationKind::InvalidEnumerationValue {
                enumeration: set.name().to_string(),
                admissible,
            },
            expected,
            value,
        ))
    }
}

/// Identifier must be `urn:<namespace>:<type>:<uuid>`
///
/// Any deviation, including an unparseable UUID, is a single
/// `MalformedIdentifier` failure.
pub fn check_identifier(value: &str, namespace: &str) -> PrimitiveResult {
    let segments: Vec<&str> = value.split(':').collect();
    let well_formed = segments.len() == 4
        && segments[0] == "urn"
        && segments[1] == namespace
        && Uuid::parse_str(segments[3]).is_ok();

    if well_formed {
        Ok(())
    } else {
        Err(Failure::new(
            ViolationKind::MalformedIdentifier,
            format!("identifier of the form urn:{}:<type>:<uuid>", namespace),
            value,
        ))
    }
}

/// Value must be an IPv4 or IPv6 address in textual form
pub fn check_ip_address(value: &str) -> PrimitiveResult {
    match value.parse::<IpAddr>() {
        Ok(_) => Ok(()),
        Err(_) => Err(Failure::new(ViolationKind::MalformedAddress, "IP address", value)),
    }
}

fn mac_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)([0-9a-f]{2}[:-]){5}[0-9a-f]{2}$").expect("valid MAC address pattern")
    })
}

/// Value must be six two-hex-digit groups separated by `:` or `-`, in either case
pub fn check_mac_address(value: &str) -> PrimitiveResult {
    if mac_pattern().is_match(value) {
        Ok(())
    } else {
        Err(Failure::new(
            ViolationKind::MalformedAddress,
            "MAC address of six hex pairs separated by ':' or '-'",
            value,
        ))
    }
}

/// Value must be `local@domain` with no whitespace
pub fn check_email_address(value: &str) -> PrimitiveResult {
    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(Failure::new(ViolationKind::MalformedAddress, "e-mail address", value))
    }
}
