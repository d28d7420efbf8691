use crate::merge::FieldPath;
use crate::merge::PathMapping;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// The response delivered to one call.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct QueryResponse {
    pub data: Value,

    /// The transport's `errors`, passed unchanged to every call of the
    /// batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
}

/// Rebuilds one call's response data from the merged response.
///
/// At the root, only the call's own fields are extracted, keyed by the
/// response keys the call originally wrote. Nested objects start as a copy
/// of the merged object, so fields other calls selected alongside this
/// call's remain visible, and the call's own fields are then written over
/// it under their original keys. Lists are rebuilt element by element, and
/// a mapped field missing from the response comes back as `null`.
///
/// Fields reached only through fragment spreads or inline fragments are
/// not mapped individually; a root selection set containing fragments
/// therefore keeps the whole root object too.
pub fn demultiplex(
    mapping: &PathMapping,
    call_index: usize,
    data: &Value,
) -> Value {
    let root = FieldPath::root();
    let keep_siblings = mapping.selects_fragments(call_index, &root);
    rebuild_object(mapping, call_index, &root, data, keep_siblings)
}

fn rebuild_value(
    mapping: &PathMapping,
    call_index: usize,
    original: &FieldPath,
    value: &Value,
) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| rebuild_value(mapping, call_index, original, item))
                .collect(),
        ),
        Value::Object(_) => {
            rebuild_object(mapping, call_index, original, value, true)
        },
        other => other.clone(),
    }
}

fn rebuild_object(
    mapping: &PathMapping,
    call_index: usize,
    original_parent: &FieldPath,
    value: &Value,
    keep_siblings: bool,
) -> Value {
    let Value::Object(merged) = value else {
        return value.clone();
    };

    let mut rebuilt = if keep_siblings {
        merged.clone()
    } else {
        Map::new()
    };
    for (original, merged_path) in mapping.children_of(call_index, original_parent) {
        let (Some(original_key), Some(merged_key)) =
            (original.last(), merged_path.last())
        else {
            continue;
        };
        let field_value = merged.get(merged_key).unwrap_or(&Value::Null);
        let field_value = if mapping.has_children(call_index, original) {
            rebuild_value(mapping, call_index, original, field_value)
        } else {
            field_value.clone()
        };
        rebuilt.insert(original_key.to_string(), field_value);
    }
    Value::Object(rebuilt)
}
