//! Rule result export for archreport.
//!
//! Turns the violations reported by a rule evaluation into a [`RuleResult`]
//! and merges it into the persisted report:
//! - [`violation`]: call and field-access violations, normalized into records
//! - [`evaluation`]: the [`EvaluationResult`](evaluation::EvaluationResult)
//!   contract and a JSON-backed implementation
//! - [`exporter`]: decode, collect, merge, encode
//!
//! [`RuleResult`]: archreport_core::types::RuleResult

pub mod evaluation;
pub mod exporter;
pub mod violation;
