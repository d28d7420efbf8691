use crate::ast::argument::append_arguments;
use crate::ast::ast_node::append_directives;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's value appears under in a response: the alias
    /// when present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Canonical text of the argument list (`(a: 1, b: $x)`), or an empty
    /// string when there are no arguments.
    pub fn arguments_canonical(&self) -> String {
        let mut s = String::new();
        append_arguments(&self.arguments, &mut s);
        s
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_canonical(&self, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            selection_set.append_canonical(sink);
        }
    }
}
