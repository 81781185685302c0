//! Core data model, merge, and persistence for archreport.
//!
//! This crate provides the building blocks shared by all archreport crates:
//! - [`types`]: Violation records, per-rule results, and the result set
//! - [`merge`]: Inserting a fresh rule result into an existing result set
//! - [`codec`]: Reading and writing the JSON report document
//! - [`error`]: The [`ReportError`](error::ReportError) type
//! - [`config`]: Configuration loading from `.archreport/archreport.json`

pub mod codec;
pub mod config;
pub mod error;
pub mod merge;
pub mod types;
