use crate::ast::ast_node::append_joined;
use crate::ast::AstNode;
use inherent::inherent;

/// A GraphQL input value.
///
/// Scalar literals keep their raw source text (`Float("1.50")` is never
/// normalized, strings keep their quotes) so the canonical form reproduces
/// exactly what the caller wrote.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(String),
    Int(String),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(String),
}

impl Value {
    /// Rewrites every variable reference within this value.
    pub fn rename_variables(&mut self, rename: &impl Fn(&str) -> String) {
        match self {
            Value::Variable(name) => *name = rename(name),
            Value::List(items) => {
                for item in items {
                    item.rename_variables(rename);
                }
            },
            Value::Object(fields) => {
                for field in fields {
                    field.value.rename_variables(rename);
                }
            },
            _ => {},
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_canonical(&self, sink: &mut String) {
        match self {
            Value::Boolean(true) => sink.push_str("true"),
            Value::Boolean(false) => sink.push_str("false"),
            Value::Enum(raw)
            | Value::Float(raw)
            | Value::Int(raw)
            | Value::String(raw) => sink.push_str(raw),
            Value::List(items) => {
                sink.push('[');
                append_joined(items, ", ", sink);
                sink.push(']');
            },
            Value::Null => sink.push_str("null"),
            Value::Object(fields) => {
                sink.push('{');
                append_joined(fields, ", ", sink);
                sink.push('}');
            },
            Value::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            },
        }
    }
}

/// A `name: value` entry of an object value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn append_canonical(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_canonical(sink);
    }
}
