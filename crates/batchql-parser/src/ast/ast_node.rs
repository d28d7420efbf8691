/// Trait implemented by all AST node types. Provides canonical text
/// rendering.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// # Canonical form
///
/// Canonical text is a fixed, minimal formatting: tokens separated by a
/// single space, selection sets as `{ a b }`, arguments as `(a: 1, b: 2)`,
/// lists as `[1, 2]` and objects as `{a: 1}`. Two nodes with the same
/// semantics always render to the same text, which makes the canonical form
/// usable as a comparison key.
pub trait AstNode {
    /// Append this node's canonical text to `sink`.
    fn append_canonical(&self, sink: &mut String);

    /// Return this node's canonical text.
    fn to_canonical(&self) -> String {
        let mut s = String::new();
        self.append_canonical(&mut s);
        s
    }
}

/// Appends `items` separated by `separator`.
pub(crate) fn append_joined<T: AstNode>(
    items: &[T],
    separator: &str,
    sink: &mut String,
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sink.push_str(separator);
        }
        item.append_canonical(sink);
    }
}

/// Appends each directive preceded by a space.
pub(crate) fn append_directives(
    directives: &[crate::ast::DirectiveAnnotation],
    sink: &mut String,
) {
    for directive in directives {
        sink.push(' ');
        directive.append_canonical(sink);
    }
}
