use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::SelectionSet;
use crate::SourcePosition;
use inherent::inherent;

/// A named fragment: `fragment UserFields on User { id name }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub position: SourcePosition,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_canonical(sink);
    }
}
