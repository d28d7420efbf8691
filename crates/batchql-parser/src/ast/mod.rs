//! Owned AST types for executable GraphQL documents.
//!
//! Nodes own their strings rather than borrowing from the source so that
//! documents from several inputs can be rewritten and combined into new
//! trees. Every node implements [`AstNode`], which renders the node in a
//! fixed canonical text form.
//!
//! # Example
//!
//! ```rust
//! use batchql_parser::ast::AstNode;
//! use batchql_parser::GraphQLParser;
//!
//! let parser = GraphQLParser::new("{ user(id: 1) { name } }").unwrap();
//! let doc = parser.parse_executable_document().unwrap();
//! assert_eq!(
//!     doc.to_canonical(),
//!     "query { user(id: 1) { name } }",
//! );
//! ```

mod argument;
mod ast_node;
mod definition;
mod directive_annotation;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::VariableDefinition;
