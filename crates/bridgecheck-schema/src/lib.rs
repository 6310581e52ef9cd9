//! # bridgecheck-schema — Schema Validation
//!
//! Runtime validation of bridge configuration documents against a JSON
//! Schema (Draft 2020-12).
//!
//! ## Design
//!
//! The validation capability is a trait, [`SchemaEngine`], rather than a
//! hard-coded call: the orchestrator treats a missing engine as a
//! reportable environment error instead of a crash, and tests can inject a
//! double. [`DraftEngine`] is the production implementation, backed by the
//! `jsonschema` crate. Validation failures carry every violation with its
//! instance and schema paths, not just the first one found.

pub mod engine;

// Re-export primary types.
pub use engine::{DraftEngine, EngineError, SchemaEngine, Violation, Violations};
