use crate::merge::fragment_registry::for_each_spread;
use crate::BatchQLError;
use batchql_parser::ast::Definition;
use batchql_parser::ast::Document;
use batchql_parser::ast::FragmentDefinition;
use batchql_parser::ast::OperationDefinition;
use batchql_parser::GraphQLParseError;
use batchql_parser::GraphQLParseErrorKind;
use batchql_parser::GraphQLParser;
use batchql_parser::SourcePosition;
use std::collections::HashSet;

/// One call's parsed query, tagged with the call's index within its batch.
///
/// A call document holds exactly one operation plus any fragment
/// definitions that came with it.
#[derive(Clone, Debug, PartialEq)]
pub struct CallDocument {
    call_index: usize,
    operation: OperationDefinition,
    fragments: Vec<FragmentDefinition>,
}

impl CallDocument {
    /// Tokenizes and parses `source` as the query of call `call_index`.
    pub fn parse(call_index: usize, source: &str) -> Result<Self, BatchQLError> {
        let document = GraphQLParser::new(source)?.parse_executable_document()?;
        Ok(Self::from_document(call_index, document)?)
    }

    /// Splits a parsed document into its single operation and fragments.
    ///
    /// Documents with zero or several operations cannot be batched as one
    /// call and fail with [`GraphQLParseErrorKind::UnsupportedDocument`],
    /// as do documents that define a fragment twice or spread a fragment
    /// they do not define.
    pub fn from_document(
        call_index: usize,
        document: Document,
    ) -> Result<Self, GraphQLParseError> {
        let mut operations = vec![];
        let mut fragments = vec![];
        for definition in document.definitions {
            match definition {
                Definition::Operation(operation) => operations.push(operation),
                Definition::Fragment(fragment) => fragments.push(fragment),
            }
        }

        let operation_count = operations.len();
        let mut operations = operations.into_iter();
        let operation = match (operations.next(), operations.next()) {
            (Some(operation), None) => operation,
            (_, second) => {
                return Err(unsupported(
                    format!(
                        "expected exactly one operation definition, found \
                        {operation_count}",
                    ),
                    second.map(|op| op.position).unwrap_or_default(),
                ));
            },
        };

        let mut defined = HashSet::new();
        for fragment in &fragments {
            if !defined.insert(fragment.name.as_str()) {
                return Err(unsupported(
                    format!(
                        "fragment `{}` is defined more than once",
                        fragment.name,
                    ),
                    fragment.position,
                ));
            }
        }
        let bodies =
            std::iter::once((&operation.selection_set, operation.position))
                .chain(fragments.iter().map(|f| (&f.selection_set, f.position)));
        for (selection_set, position) in bodies {
            let mut unknown = None;
            for_each_spread(selection_set, &mut |spread| {
                let name = spread.fragment_name.as_str();
                if unknown.is_none() && !defined.contains(name) {
                    unknown = Some(name.to_string());
                }
            });
            if let Some(name) = unknown {
                return Err(unsupported(
                    format!("fragment `{name}` is spread but never defined"),
                    position,
                ));
            }
        }

        Ok(Self {
            call_index,
            operation,
            fragments,
        })
    }

    pub fn call_index(&self) -> usize {
        self.call_index
    }

    pub fn operation(&self) -> &OperationDefinition {
        &self.operation
    }

    pub fn fragments(&self) -> &[FragmentDefinition] {
        &self.fragments
    }
}

fn unsupported(message: String, position: SourcePosition) -> GraphQLParseError {
    GraphQLParseError::new(
        message,
        position,
        GraphQLParseErrorKind::UnsupportedDocument,
    )
}
