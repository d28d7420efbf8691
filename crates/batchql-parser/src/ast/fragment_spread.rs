use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use inherent::inherent;

/// A named fragment spread: `...UserFields @include(if: $x)`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<DirectiveAnnotation>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.fragment_name);
        append_directives(&self.directives, sink);
    }
}
