use crate::merge::fragment_registry::rename_spreads;
use crate::merge::fragment_registry::FragmentRegistry;
use crate::merge::variable_namespace::namespace_fragment;
use crate::merge::variable_namespace::namespace_operation;
use crate::merge::CallDocument;
use crate::merge::FieldPath;
use crate::merge::FieldSignature;
use crate::merge::PathMapping;
use crate::MergeError;
use batchql_parser::ast::AstNode;
use batchql_parser::ast::Field;
use batchql_parser::ast::FragmentDefinition;
use batchql_parser::ast::OperationDefinition;
use batchql_parser::ast::Selection;
use batchql_parser::ast::SelectionSet;
use batchql_parser::SourcePosition;
use std::collections::HashMap;
use std::collections::HashSet;

/// One merged operation serving every call of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedBatch {
    pub operation: OperationDefinition,

    /// Fragment definitions of all calls, each emitted once, in order of
    /// first appearance.
    pub fragments: Vec<FragmentDefinition>,

    pub mapping: PathMapping,
}

/// Merges the operations of a batch into one.
///
/// Each call's variables are first renamed into the call's namespace
/// (`$id` of call 2 becomes `$c2_id`). Then, level by level, fields with
/// the same [`FieldSignature`] collapse into one field whose selection set
/// merges all of theirs. A field whose response key is already taken by a
/// different signature keeps its own slot under a synthetic alias
/// `<name>_<call_index>`. Field order follows first appearance across the
/// batch.
///
/// Fields whose arguments reference variables never merge across calls,
/// because each call's variables live in their own namespace. Fragment
/// definitions are shared between calls only when their namespaced bodies
/// are identical; otherwise a call's copy is emitted as
/// `<name>_<call_index>` and that call's spreads are pointed at it.
///
/// Directives are not part of a field's signature, and a merged field
/// keeps the directives of its first contributor. A call selecting a field
/// without a directive that an earlier call put on the same field
/// therefore receives `null` whenever that directive skips the field.
pub fn merge_operations(
    calls: &[CallDocument],
) -> Result<MergedBatch, MergeError> {
    let Some(first) = calls.first() else {
        return Err(MergeError::EmptyBatch);
    };
    let kind = first.operation().kind;

    let mut operations = Vec::with_capacity(calls.len());
    let mut fragments = FragmentRegistry::default();
    for call in calls {
        let found = call.operation().kind;
        if found != kind {
            return Err(MergeError::MixedOperationKinds {
                expected: kind,
                found,
            });
        }

        let call_fragments: Vec<FragmentDefinition> = call
            .fragments()
            .iter()
            .cloned()
            .map(|mut fragment| {
                namespace_fragment(&mut fragment, call.call_index());
                fragment
            })
            .collect();
        let renames = fragments.register_call(call.call_index(), &call_fragments);

        let mut operation = call.operation().clone();
        namespace_operation(&mut operation, call.call_index());
        rename_spreads(&mut operation.selection_set, &renames);
        operations.push((call.call_index(), operation));
    }

    let mut state = MergeState::default();
    let contributions = operations
        .iter()
        .map(|(call_index, operation)| Contribution {
            call_index: *call_index,
            original_parent: FieldPath::root(),
            selection_set: &operation.selection_set,
        })
        .collect();
    let selection_set =
        merge_selection_sets(contributions, &FieldPath::root(), &mut state)?;

    let mut directives = vec![];
    let mut seen_directives = HashSet::new();
    for (_, operation) in &operations {
        for directive in &operation.directives {
            if seen_directives.insert(directive.to_canonical()) {
                directives.push(directive.clone());
            }
        }
    }

    let name = match operations.as_slice() {
        [(_, only)] => only.name.clone(),
        _ => None,
    };
    let variable_definitions = operations
        .iter()
        .flat_map(|(_, operation)| operation.variable_definitions.iter().cloned())
        .collect();

    let MergeState {
        mapping,
        synthetic_aliases,
    } = state;
    tracing::trace!(
        event = "merge_complete",
        calls = calls.len(),
        mapped_fields = mapping.len(),
        synthetic_aliases,
        fragments = fragments.len(),
        renamed_fragments = fragments.renamed(),
        "merged batch"
    );

    Ok(MergedBatch {
        operation: OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            position: SourcePosition::default(),
        },
        fragments: fragments.into_fragments(),
        mapping,
    })
}

#[derive(Default)]
struct MergeState {
    mapping: PathMapping,
    synthetic_aliases: usize,
}

/// One call's selection set at the level being merged.
struct Contribution<'a> {
    call_index: usize,
    original_parent: FieldPath,
    selection_set: &'a SelectionSet,
}

/// An output field whose nested selection set is still to be merged from
/// `nested`.
struct PendingField<'a> {
    field: Field,
    has_selection_set: bool,
    nested: Vec<Contribution<'a>>,
}

enum Slot {
    Field,
    Passthrough(Selection),
}

fn merge_selection_sets<'a>(
    contributions: Vec<Contribution<'a>>,
    merged_parent: &FieldPath,
    state: &mut MergeState,
) -> Result<SelectionSet, MergeError> {
    let mut order: Vec<Slot> = vec![];
    let mut fields: Vec<PendingField<'a>> = vec![];
    let mut by_signature: HashMap<FieldSignature, usize> = HashMap::new();
    let mut taken_keys: HashSet<String> = HashSet::new();
    let mut call_keys: HashMap<(usize, String), FieldSignature> = HashMap::new();
    let mut passthrough: HashSet<String> = HashSet::new();

    for contribution in contributions {
        let call_index = contribution.call_index;
        let selection_set: &'a SelectionSet = contribution.selection_set;
        for selection in &selection_set.selections {
            let field = match selection {
                Selection::Field(field) => field,
                Selection::FragmentSpread(_) | Selection::InlineFragment(_) => {
                    state.mapping.mark_fragment_level(
                        call_index,
                        contribution.original_parent.clone(),
                    );
                    if passthrough.insert(selection.to_canonical()) {
                        order.push(Slot::Passthrough(selection.clone()));
                    }
                    continue;
                },
            };

            let signature = FieldSignature::of(field);
            let original_key = field.response_key();
            let call_key = (call_index, original_key.to_string());
            match call_keys.get(&call_key) {
                Some(previous) if *previous != signature => {
                    return Err(MergeError::ConflictingField {
                        call_index,
                        response_key: original_key.to_string(),
                    });
                },
                Some(_) => {},
                None => {
                    call_keys.insert(call_key, signature.clone());
                },
            }

            let index = match by_signature.get(&signature) {
                Some(index) => *index,
                None => {
                    let key = if taken_keys.contains(original_key) {
                        state.synthetic_aliases += 1;
                        synthetic_alias(&field.name, call_index, &taken_keys)
                    } else {
                        original_key.to_string()
                    };
                    taken_keys.insert(key.clone());
                    fields.push(PendingField {
                        field: Field {
                            alias: (key != field.name).then_some(key),
                            name: field.name.clone(),
                            arguments: field.arguments.clone(),
                            directives: field.directives.clone(),
                            selection_set: None,
                        },
                        has_selection_set: field.selection_set.is_some(),
                        nested: vec![],
                    });
                    order.push(Slot::Field);
                    by_signature.insert(signature, fields.len() - 1);
                    fields.len() - 1
                },
            };

            let target = &mut fields[index];
            if target.has_selection_set != field.selection_set.is_some() {
                return Err(MergeError::SelectionShapeMismatch {
                    response_key: original_key.to_string(),
                });
            }

            let original = contribution.original_parent.child(original_key);
            state.mapping.insert(
                call_index,
                original.clone(),
                merged_parent.child(target.field.response_key()),
            );
            if let Some(nested) = &field.selection_set {
                target.nested.push(Contribution {
                    call_index,
                    original_parent: original,
                    selection_set: nested,
                });
            }
        }
    }

    let mut fields = fields.into_iter();
    let mut selections = Vec::with_capacity(order.len());
    for slot in order {
        match slot {
            Slot::Passthrough(selection) => selections.push(selection),
            Slot::Field => {
                let Some(PendingField {
                    mut field,
                    has_selection_set,
                    nested,
                }) = fields.next() else {
                    continue;
                };
                if has_selection_set {
                    let merged_path = merged_parent.child(field.response_key());
                    field.selection_set =
                        Some(merge_selection_sets(nested, &merged_path, state)?);
                }
                selections.push(Selection::Field(field));
            },
        }
    }
    Ok(SelectionSet::new(selections))
}

/// `<name>_<call_index>`, suffixed `_2`, `_3`, ... until it is free.
fn synthetic_alias(
    name: &str,
    call_index: usize,
    taken_keys: &HashSet<String>,
) -> String {
    let base = format!("{name}_{call_index}");
    let mut candidate = base.clone();
    let mut suffix = 2;
    while taken_keys.contains(&candidate) {
        candidate = format!("{base}_{suffix}");
        suffix += 1;
    }
    candidate
}
