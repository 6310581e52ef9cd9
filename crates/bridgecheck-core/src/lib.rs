#![deny(missing_docs)]

//! # bridgecheck-core — Document Loading & Bridge Checks
//!
//! This crate implements the checks behind the `bridgecheck` binary. It has
//! no internal crate dependencies — only `serde_json` and `thiserror` from
//! the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Untyped document trees.** Bridge and endpoint-container documents are
//!    `serde_json::Value` trees, read with optional-field helpers ([`seq`],
//!    [`str_field`]) that treat absent or mis-typed fields as "nothing to
//!    check" rather than failing.
//!
//! 2. **Two-tier failure model.** Loading a document returns a typed
//!    [`LoadError`]; everything downstream reports each problem as it is
//!    found and folds the result into a plain `bool` tally, so one bad path
//!    never hides the next one.
//!
//! 3. **Containing-file-relative resolution.** Every `config_path` resolves
//!    against the directory of the file that references it, never against
//!    the process working directory.

pub mod document;
pub mod error;
pub mod paths;
pub mod refs;

// Re-export primary items at crate root for ergonomic imports.
pub use document::{load_json, resolve_against, seq, str_field};
pub use error::LoadError;
pub use paths::{check_bridge_paths, check_container_paths};
pub use refs::check_references;
