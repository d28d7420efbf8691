use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::SelectionSet;
use inherent::inherent;

/// An inline fragment: `... on User { id }` or `... @skip(if: $x) { id }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_canonical(sink);
    }
}
