//! # bridgecheck-cli — Bridge Configuration Checker
//!
//! Provides the `bridgecheck` command-line tool, replacing the Python
//! `tools/check_bridge_config.py` script with a structured Rust
//! implementation.
//!
//! ## Checks
//!
//! - Schema conformance of the bridge document (Draft 2020-12).
//! - Existence of every inline endpoint `config_path`, resolved against
//!   the bridge file's directory.
//! - Reference integrity between connections, endpoints, transfer
//!   policies, and PDU key groups.
//! - Existence of every `config_path` in the endpoint-container document,
//!   resolved against that file's own directory.
//!
//! ## Backward Compatibility
//!
//! The CLI surface and output format match the Python implementation:
//! one diagnostic per line, `ERROR:`-prefixed failures, a single
//! `OK:`-prefixed summary on success, exit code 0/1. CI pipelines consuming
//! the old script's output keep working:
//!
//! ```bash
//! bridgecheck config/bridge.json
//! bridgecheck config/bridge.json --schema config/schema/bridge-schema.json
//! bridgecheck config/bridge.json --endpoint-container config/endpoint_container.json
//! ```

pub mod check;

/// Conventional schema location, relative to the invocation directory.
pub const DEFAULT_SCHEMA_PATH: &str = "config/schema/bridge-schema.json";
