use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// A top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn append_canonical(&self, sink: &mut String) {
        match self {
            Definition::Fragment(def) => def.append_canonical(sink),
            Definition::Operation(def) => def.append_canonical(sink),
        }
    }
}
