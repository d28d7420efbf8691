use crate::ast::ast_node::append_joined;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::Selection;
use inherent::inherent;

/// The `{ ... }` block listing what is requested at one level of a query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self { selections }
    }

    /// Iterates over the direct field selections, skipping fragment spreads
    /// and inline fragments.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().filter_map(|selection| match selection {
            Selection::Field(field) => Some(field),
            _ => None,
        })
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn append_canonical(&self, sink: &mut String) {
        if self.selections.is_empty() {
            sink.push_str("{ }");
            return;
        }
        sink.push_str("{ ");
        append_joined(&self.selections, " ", sink);
        sink.push_str(" }");
    }
}
