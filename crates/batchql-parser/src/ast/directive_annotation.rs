use crate::ast::argument::append_arguments;
use crate::ast::Argument;
use crate::ast::AstNode;
use inherent::inherent;

/// A directive applied to an operation, field, fragment, or variable
/// definition, e.g. `@include(if: $withFriends)`.
///
/// Directives are carried through parsing and merging untouched; they are
/// never evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }
}
