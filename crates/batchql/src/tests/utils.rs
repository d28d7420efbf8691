//! Shared helpers for merge and multiplexer tests.

use crate::merge::merge_operations;
use crate::merge::CallDocument;
use crate::merge::FieldPath;
use crate::merge::MergedBatch;
use crate::MergeError;
use serde_json::Map;
use serde_json::Value;

/// Parses `source` as call `call_index`, panicking on any error.
pub fn call(call_index: usize, source: &str) -> CallDocument {
    CallDocument::parse(call_index, source).unwrap_or_else(|err| {
        panic!("expected `{source}` to parse, got: {err}")
    })
}

/// Merges `sources` as calls 0, 1, 2, ... of one batch.
pub fn merge(sources: &[&str]) -> MergedBatch {
    merge_operations(&calls(sources)).expect("batch should merge")
}

/// Merges `sources` and returns the merge error, panicking if they merge.
pub fn merge_error(sources: &[&str]) -> MergeError {
    merge_operations(&calls(sources)).expect_err("expected a merge error")
}

fn calls(sources: &[&str]) -> Vec<CallDocument> {
    sources
        .iter()
        .enumerate()
        .map(|(call_index, source)| call(call_index, source))
        .collect()
}

/// Parses a dot-separated path; the empty string is the root.
pub fn path(dotted: &str) -> FieldPath {
    if dotted.is_empty() {
        return FieldPath::root();
    }
    dotted.split('.').collect()
}

/// Unwraps a JSON object literal into a variables map.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
