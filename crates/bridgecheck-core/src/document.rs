//! # Document Loading & Field Access
//!
//! JSON documents are loaded into untyped `serde_json::Value` trees and read
//! with optional-field helpers that return an explicit "absent" value for
//! missing or mis-typed fields. An endpoint entry without a `config_path`
//! is configuration, not corruption; nothing in this module fails on shape
//! alone.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;

/// Load and parse a JSON document from `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist,
/// [`LoadError::Read`] for any other I/O failure, and [`LoadError::Parse`]
/// if the content is not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Look up a sequence field, treating absent or non-array values as empty.
pub fn seq<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Look up a string field, treating absent, non-string, and empty values
/// as absent.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    match value.get(key).and_then(Value::as_str) {
        None | Some("") => None,
        some => some,
    }
}

/// Resolve `relative` against `base_dir` into an absolute, lexically
/// normalized path.
///
/// Normalization is lexical (`.` and `..` segments are folded without
/// touching the filesystem) so that diagnostics can show the resolved
/// location even when the target does not exist. A relative `base_dir` is
/// anchored at the current working directory first.
pub fn resolve_against(base_dir: &Path, relative: &str) -> PathBuf {
    let mut joined = base_dir.join(relative);
    if joined.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            joined = cwd.join(joined);
        }
    }

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root.
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_json_missing_file_is_not_found() {
        let err = load_json(Path::new("/tmp/bridgecheck-no-such-file.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn load_json_malformed_content_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ \"endpoints\": [ ").unwrap();

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        let msg = err.to_string();
        assert!(msg.contains("invalid JSON"));
        assert!(msg.contains("broken.json"));
    }

    #[test]
    fn load_json_returns_any_top_level_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, b"[1, 2, 3]").unwrap();

        let value = load_json(&path).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn seq_is_empty_for_absent_or_mistyped_fields() {
        let doc = json!({ "endpoints": "not-a-list" });
        assert!(seq(&doc, "endpoints").is_empty());
        assert!(seq(&doc, "missing").is_empty());
        // Non-object values have no fields at all.
        assert!(seq(&json!(42), "endpoints").is_empty());
    }

    #[test]
    fn seq_returns_array_elements() {
        let doc = json!({ "endpoints": [{ "id": "a" }, { "id": "b" }] });
        assert_eq!(seq(&doc, "endpoints").len(), 2);
    }

    #[test]
    fn str_field_treats_empty_string_as_absent() {
        let doc = json!({ "config_path": "", "other": "x", "num": 3 });
        assert_eq!(str_field(&doc, "config_path"), None);
        assert_eq!(str_field(&doc, "other"), Some("x"));
        assert_eq!(str_field(&doc, "num"), None);
        assert_eq!(str_field(&doc, "missing"), None);
    }

    #[test]
    fn resolve_against_folds_dot_segments() {
        let resolved = resolve_against(Path::new("/etc/bridge/nodes"), "../shared/./ep.json");
        assert_eq!(resolved, PathBuf::from("/etc/bridge/shared/ep.json"));
    }

    #[test]
    fn resolve_against_keeps_absolute_targets_under_base() {
        let resolved = resolve_against(Path::new("/etc/bridge"), "ep.json");
        assert_eq!(resolved, PathBuf::from("/etc/bridge/ep.json"));
    }

    #[test]
    fn resolve_against_anchors_relative_base_at_cwd() {
        let resolved = resolve_against(Path::new("configs"), "ep.json");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("configs/ep.json"));
    }

    #[test]
    fn resolve_against_clamps_parent_traversal_at_root() {
        let resolved = resolve_against(Path::new("/"), "../../ep.json");
        assert_eq!(resolved, PathBuf::from("/ep.json"));
    }
}
