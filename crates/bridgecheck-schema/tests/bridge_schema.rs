//! Integration tests for the shipped bridge schema.
//!
//! These exercise `config/schema/bridge-schema.json` — the default schema
//! the CLI validates against — with representative bridge documents.

use std::path::PathBuf;

use serde_json::{json, Value};

use bridgecheck_schema::{DraftEngine, EngineError, SchemaEngine};

/// Locate the repository root from the crate manifest directory.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn shipped_schema() -> Value {
    let path = repo_root().join("config/schema/bridge-schema.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap()
}

fn well_formed_bridge() -> Value {
    json!({
        "version": "1.0",
        "time_source_type": "virtual",
        "transferPolicies": {
            "now": { "type": "immediate" },
            "paced": { "type": "ticker", "intervalMs": 50 }
        },
        "nodes": [{ "id": "drone" }, { "id": "ground" }],
        "endpoints": [
            {
                "nodeId": "drone",
                "endpoints": [
                    { "id": "drone-shm", "mode": "server", "config_path": "endpoints/drone-shm.json" }
                ]
            },
            {
                "nodeId": "ground",
                "endpoints": [
                    { "id": "ground-udp", "mode": "client", "config_path": "endpoints/ground-udp.json" }
                ]
            }
        ],
        "wireLinks": [{ "from": "drone", "to": "ground" }],
        "pduKeyGroups": {
            "telemetry": [
                { "id": "pos", "robot_name": "drone", "pdu_name": "pos" },
                { "id": "motor", "robot_name": "drone", "pdu_name": "motor" }
            ]
        },
        "connections": [{
            "id": "downlink",
            "nodeId": "drone",
            "source": { "endpointId": "drone-shm" },
            "destinations": [{ "endpointId": "ground-udp" }],
            "transferPdus": [{ "pduKeyGroupId": "telemetry", "policyId": "paced" }]
        }]
    })
}

#[test]
fn shipped_schema_compiles() {
    // An uncompilable schema would turn every run into a Build error.
    let result = DraftEngine.check(&json!({}), &shipped_schema());
    assert!(
        !matches!(result, Err(EngineError::Build { .. })),
        "shipped schema failed to compile"
    );
}

#[test]
fn well_formed_bridge_passes() {
    DraftEngine
        .check(&well_formed_bridge(), &shipped_schema())
        .unwrap();
}

#[test]
fn bridge_with_container_reference_passes() {
    let mut doc = well_formed_bridge();
    doc["endpoints_config_path"] = json!("endpoint_container.json");
    DraftEngine.check(&doc, &shipped_schema()).unwrap();
}

#[test]
fn missing_version_is_rejected() {
    let mut doc = well_formed_bridge();
    doc.as_object_mut().unwrap().remove("version");

    let err = DraftEngine
        .check(&doc, &shipped_schema())
        .unwrap_err();
    match err {
        EngineError::ValidationFailed { violations } => {
            assert!(violations
                .violations()
                .iter()
                .any(|v| v.message.contains("version")));
        }
        other => panic!("expected ValidationFailed, got: {other}"),
    }
}

#[test]
fn unknown_time_source_type_is_rejected() {
    let mut doc = well_formed_bridge();
    doc["time_source_type"] = json!("simulated");
    DraftEngine
        .check(&doc, &shipped_schema())
        .unwrap_err();
}

#[test]
fn endpoint_entry_without_config_path_is_rejected() {
    // The schema requires config_path on every declared endpoint; only the
    // existence checker tolerates its absence.
    let mut doc = well_formed_bridge();
    doc["endpoints"][0]["endpoints"][0]
        .as_object_mut()
        .unwrap()
        .remove("config_path");
    DraftEngine
        .check(&doc, &shipped_schema())
        .unwrap_err();
}

#[test]
fn non_integer_policy_interval_is_rejected() {
    let mut doc = well_formed_bridge();
    doc["transferPolicies"]["paced"]["intervalMs"] = json!("50");
    DraftEngine
        .check(&doc, &shipped_schema())
        .unwrap_err();
}
