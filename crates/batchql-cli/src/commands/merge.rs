use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use batchql::merge::merge_operations;
use batchql::merge::CallDocument;
use batchql::regenerate;
use batchql::BatchQLError;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Also print where each query's fields ended up in the merged \
             query.",
        long,
    )]
    pub(crate) show_mapping: bool,

    #[arg(
        help="Paths to one or more GraphQL query files, or directories \
             containing them, to merge in path order.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// A query file and its contents.
#[derive(Debug)]
pub(crate) struct QueryFile {
    pub path: PathBuf,
    pub source: String,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, mut errors) = self.find_query_files();

        let mut files = Vec::with_capacity(file_paths.len());
        for path in file_paths {
            match std::fs::read_to_string(&path) {
                Ok(source) => files.push(QueryFile { path, source }),
                Err(e) => errors.push(format!("{}: {e}", path.display())),
            }
        }
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to read query files:\n{}",
                output_utils::RED_X,
                errors.join("\n"),
            ));
        }
        if files.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }

        log::debug!("Merging {} query files...", files.len());
        match merge_files(&files, self.show_mapping) {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        }
    }
}

impl MergeCmd {
    /// `graphql_file_exts`, each with a leading `.`.
    pub(crate) fn normalized_file_exts(&self) -> HashSet<String> {
        self.graphql_file_exts.iter()
            .map(|ext| {
                if !ext.starts_with('.') {
                    format!(".{ext}")
                } else {
                    ext.to_owned()
                }
            })
            .collect()
    }

    /// Every matching file at or under the argument paths, directories
    /// walked in file-name order.
    fn find_query_files(&self) -> (Vec<PathBuf>, Vec<String>) {
        let graphql_file_exts = self.normalized_file_exts();
        let mut errors = vec![];
        let mut file_paths = vec![];

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        for path in &self.file_or_dir_paths {
            let entries = WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name();
            for entry in entries {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension()
                            && graphql_file_exts.contains(
                                &format!(".{}", ext.to_string_lossy()),
                            ) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file named explicitly is merged even when its extension
        // doesn't match.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to merge {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts.",
            );
            file_paths.push(first_arg_path.clone());
        }

        log::debug!("Found {} GraphQL files to merge.", file_paths.len());
        (file_paths, errors)
    }
}

/// Merges `files` as calls 0, 1, 2, ... of one batch and renders the merged
/// query. With `show_mapping`, the path mapping of every call follows.
pub(crate) fn merge_files(
    files: &[QueryFile],
    show_mapping: bool,
) -> Result<String, String> {
    let mut calls = Vec::with_capacity(files.len());
    let mut errors = vec![];
    for (call_index, file) in files.iter().enumerate() {
        match CallDocument::parse(call_index, &file.source) {
            Ok(call) => calls.push(call),
            Err(e) => errors.push(describe_error(file, &e)),
        }
    }
    if !errors.is_empty() {
        return Err(errors.join("\n"));
    }

    let merged = merge_operations(&calls)
        .map_err(|e| format!("Failed to merge queries: {e}"))?;
    let mut output = regenerate(&merged, &[]).query;
    if show_mapping {
        output.push_str("\n\n");
        for (call_index, file) in files.iter().enumerate() {
            output.push_str(&format!(
                "# call {call_index}: {}\n",
                file.path.display(),
            ));
        }
        output.push_str(&merged.mapping.to_string());
    }
    Ok(output.trim_end().to_string())
}

fn describe_error(file: &QueryFile, error: &BatchQLError) -> String {
    match error {
        BatchQLError::Parse(e) => format!(
            "{}: {}",
            file.path.display(),
            e.format_detailed(Some(&file.source)),
        ),
        other => format!("{}: {other}", file.path.display()),
    }
}
