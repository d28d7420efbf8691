//! Tests for merging the operations of a batch.

use crate::merge::merge_operations;
use crate::merge::MergedBatch;
use crate::tests::utils::merge;
use crate::tests::utils::merge_error;
use crate::tests::utils::path;
use crate::MergeError;
use batchql_parser::ast::AstNode;
use batchql_parser::ast::OperationKind;

/// Verifies that disjoint fields from two calls are unioned in order of
/// first appearance.
#[test]
fn disjoint_fields_are_unioned() {
    let batch = merge(&["query{a}", "query{b}"]);
    assert_eq!(batch.operation.to_canonical(), "query { a b }");
    assert_eq!(batch.mapping.get(0, &path("a")), Some(&path("a")));
    assert_eq!(batch.mapping.get(1, &path("b")), Some(&path("b")));
}

/// Verifies that the same field requested by two calls appears once and
/// serves both.
#[test]
fn identical_fields_are_deduplicated() {
    let batch = merge(&["query{a}", "query{a}"]);
    assert_eq!(batch.operation.to_canonical(), "query { a }");
    assert_eq!(batch.mapping.get(0, &path("a")), Some(&path("a")));
    assert_eq!(batch.mapping.get(1, &path("a")), Some(&path("a")));
}

/// Verifies that nested selection sets of a shared field are merged
/// recursively.
#[test]
fn nested_selections_are_merged() {
    let batch = merge(&[
        "{ user { id name } }",
        "{ user { id email friends { name } } }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { user { id name email friends { name } } }",
    );
    assert_eq!(
        batch.mapping.get(1, &path("user.friends.name")),
        Some(&path("user.friends.name")),
    );
}

/// Verifies that a field selected twice with different arguments gets a
/// synthetic alias for the later call.
#[test]
fn differing_arguments_get_synthetic_alias() {
    let batch = merge(&[
        "{ user(id: 1) { name } }",
        "{ user(id: 2) { name } }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { user(id: 1) { name } user_1: user(id: 2) { name } }",
    );
    assert_eq!(batch.mapping.get(0, &path("user")), Some(&path("user")));
    assert_eq!(batch.mapping.get(1, &path("user")), Some(&path("user_1")));
    assert_eq!(
        batch.mapping.get(1, &path("user.name")),
        Some(&path("user_1.name")),
    );
}

/// Verifies that a synthetic alias already in use is suffixed until it is
/// free.
#[test]
fn synthetic_alias_avoids_taken_keys() {
    let batch = merge(&["{ a(x: 1) a_1: b }", "{ a(x: 2) }"]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { a(x: 1) a_1: b a_1_2: a(x: 2) }",
    );
    assert_eq!(batch.mapping.get(1, &path("a")), Some(&path("a_1_2")));
}

/// Verifies that an alias colliding with another call's different field
/// is re-aliased after the field name.
#[test]
fn colliding_aliases_across_calls() {
    let batch = merge(&["{ a: foo }", "{ a: bar }"]);
    assert_eq!(batch.operation.to_canonical(), "query { a: foo bar_1: bar }");
    assert_eq!(batch.mapping.get(1, &path("a")), Some(&path("bar_1")));
}

/// Verifies that nested collisions are aliased within their own level.
#[test]
fn nested_collisions_are_aliased() {
    let batch = merge(&[
        "{ user { pic(size: 1) } }",
        "{ user { pic(size: 2) } }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { user { pic(size: 1) pic_1: pic(size: 2) } }",
    );
    assert_eq!(
        batch.mapping.get(1, &path("user.pic")),
        Some(&path("user.pic_1")),
    );
}

/// Verifies that every call's variables are renamed into the call's
/// namespace, so identical queries with variables stay separate.
#[test]
fn variables_are_namespaced_per_call() {
    let query = "query($id: ID!) { user(id: $id) { name } }";
    let batch = merge(&[query, query]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query ($c0_id: ID!, $c1_id: ID!) { user(id: $c0_id) { name } \
        user_1: user(id: $c1_id) { name } }",
    );
}

/// Verifies that variables nested inside object and list arguments are
/// renamed too.
#[test]
fn nested_variable_references_are_namespaced() {
    let batch = merge(&[
        "query($x: [String]) { allUsers(filter: {name_in: $x}) { name } }",
        "query($x: [String]) { allUsers(filter: {name_in: $x}) { name } }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query ($c0_x: [String], $c1_x: [String]) { \
        allUsers(filter: {name_in: $c0_x}) { name } \
        allUsers_1: allUsers(filter: {name_in: $c1_x}) { name } }",
    );
}

/// Verifies that variables in directives are renamed.
#[test]
fn directive_variables_are_namespaced() {
    let batch = merge(&["query($on: Boolean!) { a @include(if: $on) }"]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query ($c0_on: Boolean!) { a @include(if: $c0_on) }",
    );
}

/// Verifies that a call may repeat a field with the same signature.
#[test]
fn repeated_field_within_call_merges() {
    let batch = merge(&["{ u { a } u { b } }"]);
    assert_eq!(batch.operation.to_canonical(), "query { u { a b } }");
}

/// Verifies that one call using one response key for two different fields
/// is rejected.
#[test]
fn conflicting_field_within_call() {
    assert_eq!(
        merge_error(&["{ a }", "{ a: foo a: bar }"]),
        MergeError::ConflictingField {
            call_index: 1,
            response_key: "a".to_string(),
        },
    );
}

/// Verifies that a field used as a leaf by one call and with sub-fields by
/// another cannot be merged.
#[test]
fn selection_shape_mismatch() {
    assert_eq!(
        merge_error(&["{ a }", "{ a { b } }"]),
        MergeError::SelectionShapeMismatch {
            response_key: "a".to_string(),
        },
    );
}

/// Verifies that queries and mutations are never batched together.
#[test]
fn mixed_operation_kinds() {
    assert_eq!(
        merge_error(&["query { a }", "mutation { b }"]),
        MergeError::MixedOperationKinds {
            expected: OperationKind::Query,
            found: OperationKind::Mutation,
        },
    );
}

/// Verifies that mutations merge like queries.
#[test]
fn mutations_merge() {
    let batch = merge(&["mutation { like(id: 1) }", "mutation { follow(id: 2) }"]);
    assert_eq!(
        batch.operation.to_canonical(),
        "mutation { like(id: 1) follow(id: 2) }",
    );
}

/// Verifies that an empty batch is an error.
#[test]
fn empty_batch() {
    assert_eq!(merge_operations(&[]), Err(MergeError::EmptyBatch));
}

/// Verifies that a single call keeps its operation name and a merged batch
/// does not.
#[test]
fn operation_name_kept_only_for_single_call() {
    let single = merge(&["query GetUser { user { id } }"]);
    assert_eq!(
        single.operation.to_canonical(),
        "query GetUser { user { id } }",
    );

    let batch = merge(&["query A { a }", "query B { b }"]);
    assert_eq!(batch.operation.to_canonical(), "query { a b }");
}

/// Verifies that directives do not split fields and are taken from the
/// first contributor.
#[test]
fn field_directives_come_from_first_contributor() {
    let batch = merge(&["{ a @skip(if: true) }", "{ a }"]);
    assert_eq!(batch.operation.to_canonical(), "query { a @skip(if: true) }");
}

/// Verifies that operation directives are unioned without duplicates.
#[test]
fn operation_directives_are_deduplicated() {
    let batch = merge(&["query @live { a }", "query @live @cached { b }"]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query @live @cached { a b }",
    );
}

/// Verifies that fragment spreads and inline fragments pass through and
/// are emitted once.
#[test]
fn fragment_selections_pass_through() {
    let batch = merge(&[
        "{ node { ... on User { id } ...Extra } } fragment Extra on Node { id }",
        "{ node { ... on User { id } name } } fragment Extra on Node { id }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { node { ... on User { id } ...Extra name } }",
    );
    assert_eq!(batch.fragments.len(), 1);
    assert_eq!(
        batch.fragments[0].to_canonical(),
        "fragment Extra on Node { id }",
    );
}

/// Verifies that fragment bodies have their variables namespaced with the
/// owning call's prefix.
#[test]
fn fragment_variables_are_namespaced() {
    let batch = merge(&[
        "query($s: Int) { user { ...Pic } } \
        fragment Pic on User { pic(size: $s) }",
    ]);
    assert_eq!(
        batch.fragments[0].to_canonical(),
        "fragment Pic on User { pic(size: $c0_s) }",
    );
}

fn fragment_texts(batch: &MergedBatch) -> Vec<String> {
    batch.fragments.iter().map(|f| f.to_canonical()).collect()
}

/// Verifies that a call defining a fragment differently from an earlier
/// call gets its own renamed copy, and its spreads point at that copy.
#[test]
fn conflicting_fragment_definitions_are_renamed() {
    let batch = merge(&[
        "{ ...F } fragment F on Query { a }",
        "{ ...F } fragment F on Query { b }",
    ]);
    assert_eq!(batch.operation.to_canonical(), "query { ...F ...F_1 }");
    assert_eq!(
        fragment_texts(&batch),
        vec!["fragment F on Query { a }", "fragment F_1 on Query { b }"],
    );
}

/// Verifies that identical calls sharing a fragment that uses variables
/// each keep a copy bound to their own variables.
#[test]
fn identical_fragments_with_variables_stay_isolated() {
    let query = "query($id: ID) { ...F } \
        fragment F on Query { user(id: $id) { name } }";
    let batch = merge(&[query, query]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query ($c0_id: ID, $c1_id: ID) { ...F ...F_1 }",
    );
    assert_eq!(
        fragment_texts(&batch),
        vec![
            "fragment F on Query { user(id: $c0_id) { name } }",
            "fragment F_1 on Query { user(id: $c1_id) { name } }",
        ],
    );
}

/// Verifies that renaming a fragment also renames the fragments spreading
/// it, since their bodies change with it.
#[test]
fn renames_propagate_to_spreading_fragments() {
    let batch = merge(&[
        "{ ...A } fragment A on Query { ...B } fragment B on Query { x }",
        "{ ...A } fragment A on Query { ...B } fragment B on Query { y }",
    ]);
    assert_eq!(batch.operation.to_canonical(), "query { ...A ...A_1 }");
    assert_eq!(
        fragment_texts(&batch),
        vec![
            "fragment A on Query { ...B }",
            "fragment B on Query { x }",
            "fragment A_1 on Query { ...B_1 }",
            "fragment B_1 on Query { y }",
        ],
    );
}

/// Verifies that a renamed fragment skips names already holding another
/// body.
#[test]
fn renamed_fragment_skips_taken_names() {
    let batch = merge(&[
        "{ ...F ...F_1 } fragment F on Query { a } fragment F_1 on Query { z }",
        "{ ...F } fragment F on Query { b }",
    ]);
    assert_eq!(
        batch.operation.to_canonical(),
        "query { ...F ...F_1 ...F_1_2 }",
    );
    assert_eq!(
        fragment_texts(&batch),
        vec![
            "fragment F on Query { a }",
            "fragment F_1 on Query { z }",
            "fragment F_1_2 on Query { b }",
        ],
    );
}

/// Verifies that every field of every call, leaf or intermediate, has
/// exactly one mapping entry.
#[test]
fn every_field_is_mapped() {
    let batch = merge(&[
        "{ user { id friends { name } } }",
        "{ user(id: 2) { id } viewer { login } }",
    ]);
    let call0: Vec<String> = batch
        .mapping
        .entries(0)
        .map(|(original, _)| original.to_string())
        .collect();
    assert_eq!(
        call0,
        vec!["user", "user.id", "user.friends", "user.friends.name"],
    );
    let call1: Vec<String> = batch
        .mapping
        .entries(1)
        .map(|(original, merged)| format!("{original} -> {merged}"))
        .collect();
    assert_eq!(
        call1,
        vec![
            "user -> user_1",
            "viewer -> viewer",
            "user.id -> user_1.id",
            "viewer.login -> viewer.login",
        ],
    );
}
