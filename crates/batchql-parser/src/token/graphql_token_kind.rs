/// The kind of a GraphQL token.
///
/// Token kinds carry no payload: the raw source text of every token lives
/// on [`GraphQLToken::text`](crate::token::GraphQLToken::text), which lets
/// combinators compare and report kinds cheaply by value.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue` with text `"-123"`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Names and literals
    // =========================================================================
    /// A GraphQL name/identifier. Keywords (`query`, `fragment`, `on`, ...)
    /// are lexed as names; see
    /// [`GraphQLToken::category()`](crate::token::GraphQLToken::category).
    Name,
    /// An integer literal, including optional negative sign.
    IntValue,
    /// A float literal, including optional negative sign.
    FloatValue,
    /// A string or block string literal, including its quotes.
    StringValue,

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input.
    Eof,
}

impl GraphQLTokenKind {
    /// Returns `true` if this token kind is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::At
                | GraphQLTokenKind::Bang
                | GraphQLTokenKind::Colon
                | GraphQLTokenKind::Comma
                | GraphQLTokenKind::CurlyBraceClose
                | GraphQLTokenKind::CurlyBraceOpen
                | GraphQLTokenKind::Dollar
                | GraphQLTokenKind::Ellipsis
                | GraphQLTokenKind::Equals
                | GraphQLTokenKind::ParenClose
                | GraphQLTokenKind::ParenOpen
                | GraphQLTokenKind::SquareBracketClose
                | GraphQLTokenKind::SquareBracketOpen
        )
    }

    /// Returns `true` if this token kind is a literal value (number, string,
    /// boolean, or null).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue
                | GraphQLTokenKind::FloatValue
                | GraphQLTokenKind::StringValue
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    /// Returns a human-readable display string for this token kind, as used
    /// in "expected ..." error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::At => "`@`",
            GraphQLTokenKind::Bang => "`!`",
            GraphQLTokenKind::Colon => "`:`",
            GraphQLTokenKind::Comma => "`,`",
            GraphQLTokenKind::CurlyBraceClose => "`}`",
            GraphQLTokenKind::CurlyBraceOpen => "`{`",
            GraphQLTokenKind::Dollar => "`$`",
            GraphQLTokenKind::Ellipsis => "`...`",
            GraphQLTokenKind::Equals => "`=`",
            GraphQLTokenKind::ParenClose => "`)`",
            GraphQLTokenKind::ParenOpen => "`(`",
            GraphQLTokenKind::SquareBracketClose => "`]`",
            GraphQLTokenKind::SquareBracketOpen => "`[`",
            GraphQLTokenKind::Name => "name",
            GraphQLTokenKind::IntValue => "integer",
            GraphQLTokenKind::FloatValue => "float",
            GraphQLTokenKind::StringValue => "string",
            GraphQLTokenKind::True => "`true`",
            GraphQLTokenKind::False => "`false`",
            GraphQLTokenKind::Null => "`null`",
            GraphQLTokenKind::Eof => "end of input",
        }
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
