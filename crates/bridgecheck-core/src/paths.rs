//! # Endpoint `config_path` Existence Checks
//!
//! A bridge document names secondary endpoint configuration files through
//! `config_path` fields; an optional endpoint-container document holds the
//! same entries in a standalone list. Both checks resolve every path against
//! the directory of the file that references it and verify the target is an
//! existing file.
//!
//! Failures accumulate: every unresolved path is reported before the check
//! returns, so a single run surfaces the maximum number of issues.

use std::path::Path;

use serde_json::Value;

use crate::document::{load_json, resolve_against, seq, str_field};

/// Check every inline endpoint `config_path` in a bridge document.
///
/// Iterates `endpoints` → each node's `endpoints` → each entry's
/// `config_path`, resolving against the bridge file's directory. Entries
/// without a `config_path` are configuration, not errors, and are skipped.
///
/// Returns `true` only if every referenced path resolved to an existing
/// file (vacuously true when there are none).
pub fn check_bridge_paths(bridge_path: &Path, config: &Value) -> bool {
    let base_dir = bridge_path.parent().unwrap_or_else(|| Path::new(""));
    let mut ok = true;

    for node in seq(config, "endpoints") {
        for entry in seq(node, "endpoints") {
            let Some(config_path) = str_field(entry, "config_path") else {
                continue;
            };
            let resolved = resolve_against(base_dir, config_path);
            if !resolved.is_file() {
                println!(
                    "ERROR: endpoint config_path not found: {config_path} (resolved: {})",
                    resolved.display()
                );
                ok = false;
            }
        }
    }

    ok
}

/// Load an endpoint-container document and check every `config_path` in it.
///
/// The top-level value must be an array; anything else is a structural
/// error and fails immediately. Inside the array the check is deliberately
/// lenient: non-object nodes and non-object endpoint entries are treated as
/// having nothing to check. Paths resolve against the container file's own
/// directory, which may differ from the bridge file's.
pub fn check_container_paths(container_path: &Path) -> bool {
    let data = match load_json(container_path) {
        Ok(value) => value,
        Err(e) => {
            println!("ERROR: {e}");
            return false;
        }
    };

    let Some(nodes) = data.as_array() else {
        println!(
            "ERROR: endpoint container must be a JSON array: {}",
            container_path.display()
        );
        return false;
    };

    let base_dir = container_path.parent().unwrap_or_else(|| Path::new(""));
    let mut ok = true;

    for node in nodes {
        for entry in seq(node, "endpoints") {
            let Some(config_path) = str_field(entry, "config_path") else {
                continue;
            };
            let resolved = resolve_against(base_dir, config_path);
            if !resolved.is_file() {
                println!(
                    "ERROR: endpoint_container config_path not found: {config_path} (resolved: {})",
                    resolved.display()
                );
                ok = false;
            }
        }
    }

    ok
}
