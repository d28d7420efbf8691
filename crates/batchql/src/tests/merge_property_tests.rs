//! Property tests for the merge pipeline.

use crate::demultiplex;
use crate::merge_queries;
use crate::regenerate;
use crate::tests::utils::merge;
use crate::tests::utils::object;
use crate::CallVariables;
use batchql_parser::GraphQLParser;
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

const LEAVES: [&str; 5] = ["age", "email", "id", "login", "name"];
const OBJECTS: [&str; 3] = ["post", "user", "viewer"];

fn arb_leaves() -> impl Strategy<Value = BTreeSet<&'static str>> {
    prop::collection::btree_set(prop::sample::select(LEAVES.to_vec()), 1..=4)
}

/// A query in canonical form. Leaf names are never used for objects, so any
/// two generated queries can be merged.
fn arb_query() -> impl Strategy<Value = String> {
    (
        arb_leaves(),
        prop::collection::btree_map(
            prop::sample::select(OBJECTS.to_vec()),
            arb_leaves(),
            0..=3,
        ),
    )
        .prop_map(|(leaves, objects)| render_query(&leaves, &objects))
}

fn render_query(
    leaves: &BTreeSet<&str>,
    objects: &BTreeMap<&str, BTreeSet<&str>>,
) -> String {
    let mut selections: Vec<String> =
        leaves.iter().map(|leaf| leaf.to_string()).collect();
    for (object, fields) in objects {
        let fields: Vec<&str> = fields.iter().copied().collect();
        selections.push(format!("{object} {{ {} }}", fields.join(" ")));
    }
    format!("query {{ {} }}", selections.join(" "))
}

fn top_level_keys(query: &str) -> Vec<String> {
    let document = GraphQLParser::new(query)
        .expect("query should tokenize")
        .parse_executable_document()
        .expect("query should parse");
    document
        .operations()
        .flat_map(|operation| operation.selection_set.fields())
        .map(|field| field.response_key().to_string())
        .collect()
}

proptest! {
    #[test]
    fn merging_one_query_is_identity(query in arb_query()) {
        let merged = merge_queries([&query]).expect("query should merge");
        prop_assert_eq!(merged, query);
    }

    #[test]
    fn merging_a_query_with_itself_deduplicates(query in arb_query()) {
        let merged = merge_queries([&query, &query]).expect("queries should merge");
        prop_assert_eq!(merged, query);
    }

    #[test]
    fn disjoint_queries_are_unioned(
        first in prop::collection::btree_set(prop::sample::select(vec!["a", "b", "c"]), 1..=3),
        second in prop::collection::btree_set(prop::sample::select(vec!["x", "y", "z"]), 1..=3)
    ) {
        let first_query = render_query(&first, &BTreeMap::new());
        let second_query = render_query(&second, &BTreeMap::new());
        let merged = merge_queries([&first_query, &second_query])
            .expect("queries should merge");
        let expected: BTreeSet<&str> = first.union(&second).copied().collect();
        prop_assert_eq!(merged, render_query(&expected, &BTreeMap::new()));
    }

    #[test]
    fn merged_fields_are_first_appearance_union(
        first in arb_query(),
        second in arb_query()
    ) {
        let merged = merge_queries([&first, &second]).expect("queries should merge");
        let mut expected = top_level_keys(&first);
        for key in top_level_keys(&second) {
            if !expected.contains(&key) {
                expected.push(key);
            }
        }
        prop_assert_eq!(top_level_keys(&merged), expected);
    }

    #[test]
    fn merging_is_a_fixed_point(first in arb_query(), second in arb_query()) {
        let merged = merge_queries([&first, &second]).expect("queries should merge");
        let remerged = merge_queries([&merged, &merged]).expect("merge output should merge");
        prop_assert_eq!(&remerged, &merged);
        let single = merge_queries([&merged]).expect("merge output should merge");
        prop_assert_eq!(single, merged);
    }

    #[test]
    fn variables_never_leak_between_calls(first in any::<i64>(), second in any::<i64>()) {
        let query = "query($x: Int) { node(id: $x) { name } }";
        let batch = merge(&[query, query]);
        let regenerated = regenerate(
            &batch,
            &[
                CallVariables { call_index: 0, values: object(json!({ "x": first })) },
                CallVariables { call_index: 1, values: object(json!({ "x": second })) },
            ],
        );
        prop_assert_eq!(&regenerated.variables["c0_x"], &json!(first));
        prop_assert_eq!(&regenerated.variables["c1_x"], &json!(second));

        let data = json!({
            "node": { "name": first.to_string() },
            "node_1": { "name": second.to_string() },
        });
        prop_assert_eq!(
            demultiplex(&batch.mapping, 0, &data),
            json!({ "node": { "name": first.to_string() } }),
        );
        prop_assert_eq!(
            demultiplex(&batch.mapping, 1, &data),
            json!({ "node": { "name": second.to_string() } }),
        );
    }
}
