//! # Schema Engine
//!
//! Structural conformance checking for bridge documents. The engine
//! receives an already-parsed instance and an already-parsed schema; file
//! loading stays with the caller so that a schema-load failure and a
//! validation failure remain distinct diagnostics.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The document did not conform to the schema.
    #[error("{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// The schema itself could not be compiled into a validator.
    #[error("cannot compile schema: {reason}")]
    Build {
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// The injected schema-validation capability.
///
/// The orchestrator holds an `Option<&dyn SchemaEngine>`; absence is an
/// environment error it reports itself. Implementations check a parsed
/// instance against a parsed schema and either succeed silently or return
/// every violation found.
pub trait SchemaEngine {
    /// Validate `instance` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Build`] if the schema cannot be compiled and
    /// [`EngineError::ValidationFailed`] with all collected violations if
    /// the instance does not conform.
    fn check(&self, instance: &Value, schema: &Value) -> Result<(), EngineError>;
}

/// Engine backed by the `jsonschema` crate, targeting Draft 2020-12.
#[derive(Debug, Default)]
pub struct DraftEngine;

impl SchemaEngine for DraftEngine {
    fn check(&self, instance: &Value, schema: &Value) -> Result<(), EngineError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);

        let validator = opts.build(schema).map_err(|e| EngineError::Build {
            reason: e.to_string(),
        })?;

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(EngineError::ValidationFailed {
                violations: Violations { violations },
            })
        }
    }
}
