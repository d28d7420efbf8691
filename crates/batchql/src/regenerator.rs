use crate::merge::namespaced_variable;
use crate::merge::MergedBatch;
use batchql_parser::ast::AstNode;
use serde_json::Map;
use serde_json::Value;

/// The variable values one call supplied, keyed by their original names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallVariables {
    pub call_index: usize,
    pub values: Map<String, Value>,
}

/// The text and variables of a merged request.
#[derive(Clone, Debug, PartialEq)]
pub struct RegeneratedQuery {
    pub query: String,
    pub variables: Map<String, Value>,
}

/// Renders a merged batch as canonical query text and collects every
/// call's variable values under their namespaced names.
///
/// The query is the merged operation followed by its fragment definitions,
/// all in canonical form. Variables are inserted in call order.
pub fn regenerate(
    batch: &MergedBatch,
    variables: &[CallVariables],
) -> RegeneratedQuery {
    let mut query = batch.operation.to_canonical();
    for fragment in &batch.fragments {
        query.push(' ');
        fragment.append_canonical(&mut query);
    }

    let mut combined = Map::new();
    for call in variables {
        for (name, value) in &call.values {
            combined.insert(
                namespaced_variable(call.call_index, name),
                value.clone(),
            );
        }
    }

    RegeneratedQuery {
        query,
        variables: combined,
    }
}
