use crate::token::GraphQLTokenKind;
use crate::SourcePosition;

/// Names that carry grammatical meaning in executable documents.
///
/// They are still lexed as [`GraphQLTokenKind::Name`] because GraphQL allows
/// them as ordinary field and argument names (e.g. `{ query }`).
pub const KEYWORDS: [&str; 5] = [
    "fragment",
    "mutation",
    "on",
    "query",
    "subscription",
];

/// Coarse classification of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLTokenCategory {
    Punctuation,
    Identifier,
    Keyword,
    Literal,
    EndOfInput,
}

/// A GraphQL token: its kind, the exact source text it was lexed from, and
/// the position of its first character.
///
/// Tokens are immutable and borrow their text from the source string, so a
/// token stream is produced once per input and never outlives it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,

    /// The raw source text of this token (empty for `Eof`).
    pub text: &'src str,

    /// Where the token starts in the source.
    pub position: SourcePosition,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(
        kind: GraphQLTokenKind,
        text: &'src str,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// Classifies this token as punctuation, identifier, keyword, literal, or
    /// end of input.
    pub fn category(&self) -> GraphQLTokenCategory {
        match self.kind {
            GraphQLTokenKind::Eof => GraphQLTokenCategory::EndOfInput,
            GraphQLTokenKind::Name if KEYWORDS.contains(&self.text) => {
                GraphQLTokenCategory::Keyword
            },
            GraphQLTokenKind::Name => GraphQLTokenCategory::Identifier,
            kind if kind.is_literal() => GraphQLTokenCategory::Literal,
            _ => GraphQLTokenCategory::Punctuation,
        }
    }

    /// Returns `true` if this token is the name `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.text == keyword
    }
}
