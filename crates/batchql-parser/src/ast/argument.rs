use crate::ast::AstNode;
use crate::ast::Value;
use inherent::inherent;

/// A single `name: value` argument of a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_canonical(sink);
    }
}

/// Appends a parenthesized argument list, or nothing when `arguments` is
/// empty.
pub(crate) fn append_arguments(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    crate::ast::ast_node::append_joined(arguments, ", ", sink);
    sink.push(')');
}
