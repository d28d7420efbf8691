use crate::ast::AstNode;
use inherent::inherent;

/// The declared type of a variable: `ID`, `[ID]`, `ID!`, `[ID!]!`, ...
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn append_canonical(&self, sink: &mut String) {
        match self {
            TypeAnnotation::List(inner) => {
                sink.push('[');
                inner.append_canonical(sink);
                sink.push(']');
            },
            TypeAnnotation::Named(name) => sink.push_str(name),
            TypeAnnotation::NonNull(inner) => {
                inner.append_canonical(sink);
                sink.push('!');
            },
        }
    }
}
