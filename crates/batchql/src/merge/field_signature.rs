use batchql_parser::ast::Field;

/// The identity two fields must share to be merged into one.
///
/// Arguments are compared by their canonical text after variable
/// namespacing, so the same argument spelled with different whitespace
/// still matches while references to different calls' variables never do.
/// Directives are not part of the signature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldSignature {
    pub response_key: String,
    pub name: String,
    pub arguments: String,
}

impl FieldSignature {
    pub fn of(field: &Field) -> Self {
        Self {
            response_key: field.response_key().to_string(),
            name: field.name.clone(),
            arguments: field.arguments_canonical(),
        }
    }
}

impl std::fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.response_key != self.name {
            write!(f, "{}: ", self.response_key)?;
        }
        write!(f, "{}{}", self.name, self.arguments)
    }
}
