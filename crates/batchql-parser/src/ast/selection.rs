use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use inherent::inherent;

/// A single selection within a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn append_canonical(&self, sink: &mut String) {
        match self {
            Selection::Field(s) => s.append_canonical(sink),
            Selection::FragmentSpread(s) => s.append_canonical(sink),
            Selection::InlineFragment(s) => s.append_canonical(sink),
        }
    }
}
