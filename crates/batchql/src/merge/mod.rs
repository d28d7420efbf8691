//! Merging the parsed queries of one batch into a single operation.
//!
//! [`merge_operations`] takes the [`CallDocument`]s of a batch and produces
//! a [`MergedBatch`]: one operation whose fields serve every call, plus a
//! [`PathMapping`] recording where each call's fields ended up so that the
//! response can be split back per call.

mod call_document;
mod field_signature;
mod fragment_registry;
mod merge_engine;
mod path_mapping;
mod variable_namespace;

pub use call_document::CallDocument;
pub use field_signature::FieldSignature;
pub use merge_engine::merge_operations;
pub use merge_engine::MergedBatch;
pub use path_mapping::FieldPath;
pub use path_mapping::PathMapping;
pub use variable_namespace::namespaced_variable;
