use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_joined;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::SourcePosition;
use inherent::inherent;

/// An operation definition (query, mutation, or subscription).
///
/// Shorthand operations (`{ a }`) parse as an unnamed `Query`. Canonical
/// text always spells the operation keyword out.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,

    /// Where the operation starts in its source (the default position for
    /// synthesized operations).
    pub position: SourcePosition,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str(self.kind.as_str());
        if let Some(name) = &self.name {
            sink.push(' ');
            sink.push_str(name);
        }
        if !self.variable_definitions.is_empty() {
            if self.name.is_none() {
                sink.push(' ');
            }
            sink.push('(');
            append_joined(&self.variable_definitions, ", ", sink);
            sink.push(')');
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_canonical(sink);
    }
}
