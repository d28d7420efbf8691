//! Tests for the `merge` subcommand.

use crate::commands::merge::merge_files;
use crate::commands::merge::QueryFile;
use crate::commands::CommandEnum;
use crate::Cli;
use clap::Parser;
use std::path::PathBuf;

fn file(path: &str, source: &str) -> QueryFile {
    QueryFile {
        path: PathBuf::from(path),
        source: source.to_string(),
    }
}

/// Verifies that arguments and flags are parsed into a merge command.
#[test]
fn parses_merge_arguments() {
    let cli = Cli::try_parse_from([
        "batchql",
        "-v",
        "merge",
        "--show-mapping",
        "--graphql-file-exts",
        "graphql,.query",
        "queries/",
        "extra.gql",
    ])
    .expect("arguments should parse");
    assert!(cli.verbose);
    let Some(CommandEnum::Merge(cmd)) = cli.cmd else {
        panic!("expected the merge subcommand");
    };
    assert!(cmd.show_mapping);
    assert_eq!(
        cmd.file_or_dir_paths,
        vec![PathBuf::from("queries/"), PathBuf::from("extra.gql")],
    );
    let mut exts: Vec<String> = cmd.normalized_file_exts().into_iter().collect();
    exts.sort();
    assert_eq!(exts, vec![".graphql", ".query"]);
}

/// Verifies that at least one path is required.
#[test]
fn merge_requires_paths() {
    assert!(Cli::try_parse_from(["batchql", "merge"]).is_err());
}

/// Verifies that files are merged in the order given.
#[test]
fn merges_files_in_order() {
    let output = merge_files(
        &[file("a.graphql", "query { a }"), file("b.graphql", "{ b a }")],
        false,
    )
    .expect("files should merge");
    assert_eq!(output, "query { a b }");
}

/// Verifies that the mapping table follows the query when requested.
#[test]
fn shows_mapping() {
    let output = merge_files(
        &[
            file("a.graphql", "{ user(id: 1) { name } }"),
            file("b.graphql", "{ user(id: 2) { name } }"),
        ],
        true,
    )
    .expect("files should merge");
    assert_eq!(
        output,
        "query { user(id: 1) { name } user_1: user(id: 2) { name } }\n\
        \n\
        # call 0: a.graphql\n\
        # call 1: b.graphql\n\
        call 0: user -> user\n\
        call 0: user.name -> user.name\n\
        call 1: user -> user_1\n\
        call 1: user.name -> user_1.name",
    );
}

/// Verifies that parse errors name the file and point at the source line.
#[test]
fn reports_parse_errors_per_file() {
    let err = merge_files(
        &[file("ok.graphql", "{ a }"), file("bad.graphql", "query{")],
        false,
    )
    .expect_err("a broken file should fail the merge");
    assert!(err.starts_with("bad.graphql: error: expected one of name or `...`"));
    assert!(err.contains("1 | query{"));
}

/// Verifies that merge errors are reported.
#[test]
fn reports_merge_errors() {
    let err = merge_files(
        &[file("q.graphql", "query { a }"), file("m.graphql", "mutation { b }")],
        false,
    )
    .expect_err("a query and a mutation should not merge");
    assert_eq!(err, "Failed to merge queries: cannot batch a mutation with a query");
}
