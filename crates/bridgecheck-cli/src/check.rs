//! # Check Orchestration
//!
//! Runs the full validation sequence for one bridge document. The only
//! short-circuit is a bridge document that cannot be loaded at all; every
//! other failure is reported where it is found and folded into the final
//! exit code, so one invocation surfaces the maximum number of issues.

use std::path::{Path, PathBuf};

use clap::Args;
use serde_json::Value;

use bridgecheck_core::{
    check_bridge_paths, check_container_paths, check_references, load_json, resolve_against,
    str_field,
};
use bridgecheck_schema::{EngineError, SchemaEngine};

/// Arguments for the bridge configuration check.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the bridge configuration document.
    #[arg(value_name = "BRIDGE_JSON")]
    pub bridge: PathBuf,

    /// Path to the bridge JSON schema.
    #[arg(long, value_name = "PATH", default_value = crate::DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Optional endpoint-container document for config_path checks,
    /// overriding the bridge document's endpoints_config_path field.
    #[arg(long, value_name = "PATH")]
    pub endpoint_container: Option<PathBuf>,
}

/// Execute the check sequence.
///
/// Returns the process exit code: 0 when every attempted check passed,
/// 1 otherwise.
pub fn run_check(args: &CheckArgs, engine: Option<&dyn SchemaEngine>) -> u8 {
    let bridge_data = match load_json(&args.bridge) {
        Ok(value) => value,
        Err(e) => {
            // Nothing downstream is possible without the bridge document.
            println!("ERROR: {e}");
            return 1;
        }
    };

    tracing::debug!(bridge = %args.bridge.display(), "loaded bridge document");

    let mut ok = true;

    if !validate_schema(&bridge_data, &args.schema, engine) {
        ok = false;
    }

    if !check_bridge_paths(&args.bridge, &bridge_data) {
        ok = false;
    }

    if !check_references(&bridge_data) {
        ok = false;
    }

    let container_path = match &args.endpoint_container {
        Some(path) => Some(path.clone()),
        None => container_path_from_bridge(&args.bridge, &bridge_data, &mut ok),
    };

    if let Some(container) = container_path {
        tracing::debug!(container = %container.display(), "checking endpoint container");
        if !check_container_paths(&container) {
            ok = false;
        }
    }

    if ok {
        println!("OK: schema and path checks passed");
        0
    } else {
        1
    }
}

/// Validate the bridge document against the schema at `schema_path`.
///
/// The schema is loaded through the same JSON loader as every other
/// document; a load failure fails this step with the loader's own
/// diagnostic. A missing engine is an environment error, not a data error,
/// and fails the step the same way.
fn validate_schema(instance: &Value, schema_path: &Path, engine: Option<&dyn SchemaEngine>) -> bool {
    let Some(engine) = engine else {
        println!(
            "ERROR: no JSON Schema engine available; \
             run a bridgecheck build with the draft 2020-12 engine wired in"
        );
        return false;
    };

    let schema = match load_json(schema_path) {
        Ok(value) => value,
        Err(e) => {
            println!("ERROR: {e}");
            return false;
        }
    };

    match engine.check(instance, &schema) {
        Ok(()) => true,
        Err(EngineError::ValidationFailed { violations }) => {
            for violation in violations.violations() {
                println!("ERROR: schema validation failed: {violation}");
            }
            false
        }
        Err(e) => {
            println!("ERROR: {e}");
            false
        }
    }
}

/// Derive the endpoint-container path from the bridge document.
///
/// Reads the optional `endpoints_config_path` field, resolved against the
/// bridge file's directory. An absent field skips the container check
/// silently; a field pointing at a missing file is reported, marks the run
/// failed, and skips the check (there is nothing to load).
fn container_path_from_bridge(bridge_path: &Path, config: &Value, ok: &mut bool) -> Option<PathBuf> {
    let relative = str_field(config, "endpoints_config_path")?;
    let base_dir = bridge_path.parent().unwrap_or_else(|| Path::new(""));
    let resolved = resolve_against(base_dir, relative);

    if resolved.is_file() {
        Some(resolved)
    } else {
        println!(
            "ERROR: endpoints_config_path not found: {relative} (resolved: {})",
            resolved.display()
        );
        *ok = false;
        None
    }
}
