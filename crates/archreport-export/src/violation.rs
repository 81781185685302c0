use std::fmt;

use archreport_core::types::ViolationRecord;
use serde::{Deserialize, Serialize};

/// A method or constructor call that breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallViolation {
    /// Full name of the calling code unit.
    pub origin: String,
    /// Full name of the called method or constructor.
    pub target: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A field read or write that breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAccessViolation {
    /// Full name of the accessing code unit.
    pub origin: String,
    /// Full name of the accessed field.
    pub target: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Call,
    FieldAccess,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Call => f.write_str("call"),
            ViolationKind::FieldAccess => f.write_str("field access"),
        }
    }
}

/// Either kind of raw violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Call(CallViolation),
    FieldAccess(FieldAccessViolation),
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::Call(_) => ViolationKind::Call,
            Violation::FieldAccess(_) => ViolationKind::FieldAccess,
        }
    }
}

impl From<CallViolation> for Violation {
    fn from(v: CallViolation) -> Self {
        Violation::Call(v)
    }
}

impl From<FieldAccessViolation> for Violation {
    fn from(v: FieldAccessViolation) -> Self {
        Violation::FieldAccess(v)
    }
}

fn record(origin: &str, target: &str, description: Option<&str>) -> ViolationRecord {
    ViolationRecord::new(origin, target, description.unwrap_or_default())
}

impl From<&CallViolation> for ViolationRecord {
    fn from(v: &CallViolation) -> Self {
        record(&v.origin, &v.target, v.description.as_deref())
    }
}

impl From<&FieldAccessViolation> for ViolationRecord {
    fn from(v: &FieldAccessViolation) -> Self {
        record(&v.origin, &v.target, v.description.as_deref())
    }
}

impl From<&Violation> for ViolationRecord {
    fn from(v: &Violation) -> Self {
        match v {
            Violation::Call(call) => call.into(),
            Violation::FieldAccess(access) => access.into(),
        }
    }
}
