//! # Reference Integrity
//!
//! A bridge document wires its sections together by identifier: connections
//! name source and destination endpoints, transfer-PDU entries name a
//! transfer policy and a PDU key group, and timed policies carry an
//! interval. A schema cannot express these cross-references; without this
//! check a dangling identifier only surfaces when the bridge starts up.
//!
//! Absent fields are not checked here; required-ness belongs to schema
//! validation. A reference is only verified once it is actually written
//! down, and then it must name something that exists.

use std::collections::HashSet;

use serde_json::Value;

use crate::document::{seq, str_field};

/// Verify every identifier reference inside a bridge document.
///
/// Checks, each accumulating rather than short-circuiting:
/// - `time_source_type`, when present, is `"real"` or `"virtual"`;
/// - `throttle` and `ticker` transfer policies carry an `intervalMs`;
/// - connection `source`/`destinations` endpoint ids are defined under
///   some node's `endpoints`;
/// - transfer-PDU `policyId` and `pduKeyGroupId` values name entries of
///   `transferPolicies` and `pduKeyGroups`.
///
/// Returns `true` when nothing is broken.
pub fn check_references(config: &Value) -> bool {
    let mut ok = true;

    if let Some(kind) = str_field(config, "time_source_type") {
        if kind != "real" && kind != "virtual" {
            println!("ERROR: unknown time_source_type: {kind}");
            ok = false;
        }
    }

    let policies = config.get("transferPolicies").and_then(Value::as_object);
    if let Some(policies) = policies {
        for (id, policy) in policies {
            let timed = matches!(
                policy.get("type").and_then(Value::as_str),
                Some("throttle") | Some("ticker")
            );
            if timed && policy.get("intervalMs").and_then(Value::as_i64).is_none() {
                println!("ERROR: transfer policy requires intervalMs: {id}");
                ok = false;
            }
        }
    }

    let mut endpoint_ids: HashSet<&str> = HashSet::new();
    for node in seq(config, "endpoints") {
        for entry in seq(node, "endpoints") {
            if let Some(id) = str_field(entry, "id") {
                endpoint_ids.insert(id);
            }
        }
    }

    let key_groups = config.get("pduKeyGroups").and_then(Value::as_object);

    for connection in seq(config, "connections") {
        let connection_id = str_field(connection, "id").unwrap_or("<unnamed>");

        let source_id = connection
            .get("source")
            .and_then(|source| source.get("endpointId"))
            .and_then(Value::as_str);
        if let Some(id) = source_id {
            if !endpoint_ids.contains(id) {
                println!("ERROR: connection {connection_id}: source endpoint not found: {id}");
                ok = false;
            }
        }

        for destination in seq(connection, "destinations") {
            if let Some(id) = str_field(destination, "endpointId") {
                if !endpoint_ids.contains(id) {
                    println!(
                        "ERROR: connection {connection_id}: destination endpoint not found: {id}"
                    );
                    ok = false;
                }
            }
        }

        for transfer in seq(connection, "transferPdus") {
            if let Some(policy_id) = str_field(transfer, "policyId") {
                if !policies.is_some_and(|map| map.contains_key(policy_id)) {
                    println!(
                        "ERROR: connection {connection_id}: transfer policy not found: {policy_id}"
                    );
                    ok = false;
                }
            }
            if let Some(group_id) = str_field(transfer, "pduKeyGroupId") {
                if !key_groups.is_some_and(|map| map.contains_key(group_id)) {
                    println!(
                        "ERROR: connection {connection_id}: pduKeyGroup not found: {group_id}"
                    );
                    ok = false;
                }
            }
        }
    }

    ok
}
