//! Tests for selection sets, fields, fragment spreads and inline fragments.

use crate::ast;
use crate::tests::utils::canonical;
use crate::tests::utils::first_operation;
use crate::tests::utils::top_level_field;

/// Verifies fields in order, with nesting.
#[test]
fn nested_fields() {
    let op = first_operation("{ user { name friends { name } } version }");
    let names: Vec<&str> =
        op.selection_set.fields().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["user", "version"]);

    let user = op.selection_set.fields().next().unwrap();
    let nested = user.selection_set.as_ref().unwrap();
    assert_eq!(nested.selections.len(), 2);
    assert!(op.selection_set.fields().nth(1).unwrap().selection_set.is_none());
}

/// Verifies that an alias is split from the field name.
#[test]
fn aliased_field() {
    let field = top_level_field("{ me: user(id: 1) { id } }", 0);
    assert_eq!(field.alias.as_deref(), Some("me"));
    assert_eq!(field.name, "user");
    assert_eq!(field.response_key(), "me");

    let field = top_level_field("{ user }", 0);
    assert_eq!(field.response_key(), "user");
}

/// Verifies field arguments keep their order.
#[test]
fn field_arguments() {
    let field = top_level_field("{ users(first: 10, after: $cursor) { id } }", 0);
    let names: Vec<&str> =
        field.arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["first", "after"]);
    assert_eq!(field.arguments[1].value, ast::Value::Variable("cursor".to_string()));
    assert_eq!(field.arguments_canonical(), "(first: 10, after: $cursor)");
}

/// Verifies directives on fields, with and without arguments.
#[test]
fn field_directives() {
    let field = top_level_field("{ a @skip(if: true) @client }", 0);
    assert_eq!(field.directives.len(), 2);
    assert_eq!(field.directives[0].name, "skip");
    assert_eq!(field.directives[0].arguments[0].value, ast::Value::Boolean(true));
    assert!(field.directives[1].arguments.is_empty());
    assert_eq!(
        canonical("{ a @skip(if: true) @client }"),
        "query { a @skip(if: true) @client }",
    );
}

/// Verifies that commas between selections are insignificant, including
/// leading and trailing ones.
#[test]
fn commas_are_ignored() {
    assert_eq!(canonical("{ , a, b,, c , }"), "query { a b c }");
    assert_eq!(canonical("{ f(a: 1,, b: 2,) }"), "query { f(a: 1, b: 2) }");
}

/// Verifies named fragment spreads.
#[test]
fn fragment_spread() {
    let op = first_operation("{ user { ...UserFields @include(if: $x) } }");
    let user = op.selection_set.fields().next().unwrap();
    let selections = &user.selection_set.as_ref().unwrap().selections;
    match &selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.fragment_name, "UserFields");
            assert_eq!(spread.directives[0].name, "include");
        },
        other => panic!("expected a fragment spread, got {other:?}"),
    }
}

/// Verifies inline fragments with a type condition, with only directives,
/// and with neither.
#[test]
fn inline_fragments() {
    let op = first_operation(
        "{ node { ... on User { name } ... @defer { id } ... { kind } } }",
    );
    let node = op.selection_set.fields().next().unwrap();
    let selections = &node.selection_set.as_ref().unwrap().selections;
    assert_eq!(selections.len(), 3);

    let conditions: Vec<Option<&str>> = selections
        .iter()
        .map(|selection| match selection {
            ast::Selection::InlineFragment(inline) => {
                inline.type_condition.as_deref()
            },
            other => panic!("expected an inline fragment, got {other:?}"),
        })
        .collect();
    assert_eq!(conditions, vec![Some("User"), None, None]);

    assert_eq!(
        canonical("{ node { ... on User { name } ... @defer { id } } }"),
        "query { node { ... on User { name } ... @defer { id } } }",
    );
}

/// Verifies that a fragment named like a keyword other than `on` is a
/// spread.
#[test]
fn spread_of_keyword_named_fragment() {
    let op = first_operation("{ ...query }");
    assert!(matches!(
        op.selection_set.selections[0],
        ast::Selection::FragmentSpread(_),
    ));
}
