use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

/// A variable declared by an operation: `$id: ID! = "1"`.
///
/// `name` excludes the leading `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.type_annotation.append_canonical(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_canonical(sink);
        }
        append_directives(&self.directives, sink);
    }
}
